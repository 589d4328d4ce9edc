//! Subcommands and their handlers.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail, ensure};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use zengshan_config::ZengshanConfig;
use zengshan_core::render::{Side, changing_summary, render_hexagram};
use zengshan_core::{
    COINS_PER_THROW, Calendar, CastResult, Diviner, FixedCalendar, GanZhiDate, HexagramCatalog,
    HexagramResolver, INTERPRETER_SYSTEM_PROMPT, Reading, ScriptedCoins, SystemCalendar,
    ThreadRngCoins, ThrowRecord, build_interpretation_prompt, render_reading, render_throw,
};
use zengshan_providers::retry::RetryConfig;
use zengshan_providers::{ApiConfig, InterpretRequest, Interpretation, interpret_until};
use zengshan_types::{
    HexagramCode, LINE_COUNT, Line, NonEmptyString, Palace, PalaceConfigTable, Provider,
};

#[derive(Debug, Parser)]
#[command(name = "zengshan", version, about = "增删卜易 three-coin divination")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cast a hexagram with six throws of three coins
    Cast(CastArgs),

    /// Show a hexagram by its six-digit code (bottom line first)
    Show {
        /// e.g. 101010 for 水火既济
        code: HexagramCode,
        /// Moving line positions, 1-indexed
        #[arg(long, value_delimiter = ',')]
        changing: Vec<u8>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the hexagram catalog
    Catalog {
        /// Only this palace (乾, 乾宫 or qian)
        #[arg(long)]
        palace: Option<String>,
    },

    /// Show today's month and day pillars
    Today {
        /// Use this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Debug, Args)]
pub struct CastArgs {
    /// The matter being asked about
    #[arg(short, long)]
    pub question: Option<String>,

    /// 18 coin faces, bottom throw first: 1 = back (背), 0 = inscription (字)
    #[arg(long)]
    pub coins: Option<String>,

    /// Ask the configured language model to interpret the reading
    #[arg(long)]
    pub interpret: bool,

    /// Override the configured provider (claude or openai)
    #[arg(long, requires = "interpret")]
    pub provider: Option<String>,

    /// Date used for the month and day pillars (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(long, env = "ZENGSHAN_API_BASE_URL", hide = true)]
    pub base_url: Option<String>,
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Cast(args) => cast(args).await,
        Command::Show {
            code,
            changing,
            json,
        } => show(code, &changing, json),
        Command::Catalog { palace } => catalog(palace.as_deref()),
        Command::Today { date } => today(date),
    }
}

fn calendar_for(date: Option<NaiveDate>) -> Result<GanZhiDate> {
    let pillars = match date {
        Some(date) => FixedCalendar::from(date).today(),
        None => SystemCalendar.today(),
    };
    pillars.context("calendar unavailable")
}

#[derive(Serialize)]
struct CastReport<'a> {
    calendar: String,
    date: NaiveDate,
    throws: &'a [ThrowRecord],
    reading: &'a Reading,
    interpretation: Option<&'a Interpretation>,
}

async fn cast(args: CastArgs) -> Result<()> {
    let catalog = HexagramCatalog::standard();
    let palaces = PalaceConfigTable::standard();
    let mut diviner = Diviner::new(HexagramResolver::new(&catalog, &palaces));

    let question = args
        .question
        .as_deref()
        .and_then(|q| NonEmptyString::new(q).ok());
    diviner.begin(question);

    let throws = match &args.coins {
        Some(script) => {
            let mut coins = ScriptedCoins::parse(script)?;
            let expected = LINE_COUNT * COINS_PER_THROW;
            ensure!(
                coins.remaining() == expected,
                "--coins needs exactly {expected} faces, got {}",
                coins.remaining()
            );
            diviner.throw_remaining(&mut coins)?
        }
        None => diviner.throw_remaining(&mut ThreadRngCoins)?,
    };
    let reading = diviner.finish()?;
    let calendar = calendar_for(args.date)?;

    if !args.json {
        let mut out = String::new();
        let _ = writeln!(out, "起卦：{} {calendar}", calendar.date());
        out.push('\n');
        for throw in &throws {
            let _ = writeln!(out, "{}", render_throw(throw));
        }
        out.push('\n');
        out.push_str(&render_reading(&reading));
        print!("{out}");
    }

    let interpretation = if args.interpret {
        Some(request_interpretation(&args, &calendar, &reading).await?)
    } else {
        None
    };

    if args.json {
        let report = CastReport {
            calendar: calendar.to_string(),
            date: calendar.date(),
            throws: &throws,
            reading: &reading,
            interpretation: interpretation.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(interpretation) = &interpretation {
        println!("\n解卦（{}）：\n{}", interpretation.model, interpretation.text);
        if interpretation.truncated {
            println!("\n（输出已达长度上限，解读不完整）");
        }
    }
    Ok(())
}

async fn request_interpretation(
    args: &CastArgs,
    calendar: &GanZhiDate,
    reading: &Reading,
) -> Result<Interpretation> {
    let config = ZengshanConfig::load()?.unwrap_or_default();

    let provider = match args.provider.as_deref() {
        Some(raw) => Provider::parse(raw).with_context(|| format!("unknown provider: {raw}"))?,
        None => config.provider(),
    };
    let model = match config.model(provider) {
        Ok(model) => model,
        // An explicit --provider overrides a model configured for the other one.
        Err(_) if args.provider.is_some() => provider.default_model(),
        Err(err) => return Err(err.into()),
    };
    let Some(api_key) = config.api_key(provider) else {
        bail!(
            "no API key for {}: set {} or add it under [api_keys] in {}",
            provider.display_name(),
            provider.env_var(),
            ZengshanConfig::path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "~/.zengshan/config.toml".to_string())
        );
    };

    let limits = config.interpretation();
    let mut api = ApiConfig::new(api_key, model)?
        .with_timeout(limits.timeout())
        .with_max_output_tokens(limits.max_output_tokens)
        .with_retry_config(RetryConfig::default().with_max_retries(limits.max_retries));
    if let Some(base_url) = &args.base_url {
        api = api.with_base_url(base_url.as_str())?;
    }

    let prompt = build_interpretation_prompt(None, calendar, reading);
    let request = InterpretRequest {
        system_prompt: INTERPRETER_SYSTEM_PROMPT,
        prompt: &prompt,
    };

    if !args.json {
        println!("\n正在请求{}解卦（Ctrl-C 取消）……", provider.display_name());
    }
    let interpretation = interpret_until(&api, &request, ctrl_c()).await?;
    Ok(interpretation)
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "Ctrl-C handler unavailable");
        std::future::pending::<()>().await;
    }
}

/// Lines for `code` with the given 1-indexed positions moving.
fn lines_for(code: HexagramCode, changing: &[u8]) -> Result<[Line; LINE_COUNT]> {
    for &position in changing {
        ensure!(
            (1..=LINE_COUNT as u8).contains(&position),
            "changing line {position} is out of range 1-{LINE_COUNT}"
        );
    }
    Ok(std::array::from_fn(|index| {
        Line::new(code.is_yang(index), changing.contains(&((index + 1) as u8)))
    }))
}

fn show(code: HexagramCode, changing: &[u8], json: bool) -> Result<()> {
    let catalog = HexagramCatalog::standard();
    let palaces = PalaceConfigTable::standard();
    let resolver = HexagramResolver::new(&catalog, &palaces);

    let result = CastResult::from_lines(lines_for(code, changing)?);
    let hexagrams = resolver.resolve_pair(&result);
    let reading = Reading::new(None, result, hexagrams);

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
        return Ok(());
    }

    let result = reading.result();
    let hexagrams = reading.hexagrams();
    let mut out = render_hexagram(
        Side::Original,
        hexagrams.original(),
        hexagrams.original_kinship(),
        result.lines(),
    );
    if result.has_changing_lines() {
        out.push('\n');
        out.push_str(&render_hexagram(
            Side::Transformed,
            hexagrams.transformed(),
            hexagrams.transformed_kinship(),
            result.lines(),
        ));
        let _ = writeln!(out, "\n动爻：{}", changing_summary(result.changing_positions()));
    }
    print!("{out}");
    Ok(())
}

fn catalog(palace: Option<&str>) -> Result<()> {
    let catalog = HexagramCatalog::standard();
    let records = match palace {
        Some(raw) => {
            let palace = Palace::parse(raw).with_context(|| format!("unknown palace: {raw}"))?;
            catalog.by_palace(palace)
        }
        None => catalog.records(),
    };

    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{}  {}  {}·{}  世{} 应{}",
            record.code(),
            record.name(),
            record.palace(),
            record.element(),
            record.ruling_line(),
            record.responding_line()
        );
    }
    print!("{out}");
    Ok(())
}

fn today(date: Option<NaiveDate>) -> Result<()> {
    let calendar = calendar_for(date)?;
    println!("{} {calendar}", calendar.date());
    Ok(())
}
