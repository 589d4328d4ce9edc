//! Plain-text rendering of throws and readings.
//!
//! The model is bottom-first everywhere; rendering reverses to top-first here
//! and nowhere else.

use std::fmt::{self, Write};

use zengshan_types::{Branch, Element, Kinship, LINE_COUNT, Line, POSITION_NAMES};

use crate::diviner::{Reading, ThrowRecord};
use crate::resolver::{KnownHexagram, ResolvedHexagram};

/// 世 / 应 marker on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker {
    Ruling,
    Responding,
}

impl LineMarker {
    #[must_use]
    pub const fn hanzi(self) -> &'static str {
        match self {
            LineMarker::Ruling => "世",
            LineMarker::Responding => "应",
        }
    }
}

/// Annotated line of a resolved hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDetail {
    /// 0-based, bottom first.
    pub index: usize,
    pub kinship: Option<Kinship>,
    pub branch: Branch,
    pub element: Element,
    pub marker: Option<LineMarker>,
}

impl LineDetail {
    #[must_use]
    pub fn position_name(&self) -> String {
        format!("{}爻", POSITION_NAMES[self.index])
    }
}

impl fmt::Display for LineDetail {
    /// `初爻：子孙子水 —— 世`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}：", self.position_name())?;
        if let Some(kinship) = self.kinship {
            write!(f, "{kinship}")?;
        }
        write!(f, "{}{}", self.branch, self.element)?;
        if let Some(marker) = self.marker {
            write!(f, " —— {}", marker.hanzi())?;
        }
        Ok(())
    }
}

/// Per-line details, bottom first.
#[must_use]
pub fn line_details(
    hexagram: &KnownHexagram,
    kinship: Option<&[Kinship; LINE_COUNT]>,
) -> [LineDetail; LINE_COUNT] {
    std::array::from_fn(|index| {
        let position = (index + 1) as u8;
        let marker = if hexagram.ruling_line() == position {
            Some(LineMarker::Ruling)
        } else if hexagram.responding_line() == position {
            Some(LineMarker::Responding)
        } else {
            None
        };
        LineDetail {
            index,
            kinship: kinship.map(|all| all[index]),
            branch: hexagram.branches()[index],
            element: hexagram.line_elements()[index],
            marker,
        }
    })
}

/// `第1爻：背 字 字 —— 单 阳爻 ⚊`
#[must_use]
pub fn render_throw(record: &ThrowRecord) -> String {
    let state = record.line.state();
    format!(
        "第{}爻：{} —— {} {} {}",
        record.position,
        record.coins,
        state.throw_name(),
        state.description(),
        state.symbol()
    )
}

/// Which side of the cast a hexagram is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Transformed,
}

impl Side {
    const fn title(self) -> &'static str {
        match self {
            Side::Original => "本卦",
            Side::Transformed => "变卦",
        }
    }
}

/// Symbol for `line` as drawn on `side`. Changing lines show ○/× on the
/// original and a plain line marked `*` on the transformed hexagram.
fn line_symbol(line: Line, side: Side) -> String {
    match side {
        Side::Original => line.state().symbol().to_string(),
        Side::Transformed => {
            let symbol = if line.transformed_is_yang() { "⚊" } else { "⚋" };
            if line.is_changing() {
                format!("{symbol}*")
            } else {
                format!("{symbol} ")
            }
        }
    }
}

#[must_use]
pub fn render_hexagram(
    side: Side,
    hexagram: &ResolvedHexagram,
    kinship: Option<&[Kinship; LINE_COUNT]>,
    lines: &[Line; LINE_COUNT],
) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}：{} [{}]", side.title(), hexagram.name(), hexagram.code());
    if let Some(known) = hexagram.known() {
        let _ = write!(out, " {}·{}", known.palace(), known.element());
    }
    out.push('\n');
    out.push_str(&hexagram.judgment());
    out.push('\n');

    let details = hexagram.known().map(|known| line_details(known, kinship));
    for index in (0..LINE_COUNT).rev() {
        let symbol = line_symbol(lines[index], side);
        match &details {
            Some(details) => {
                let _ = writeln!(out, "  {symbol}  {}", details[index]);
            }
            None => {
                let _ = writeln!(out, "  {symbol}  {}爻", POSITION_NAMES[index]);
            }
        }
    }
    out
}

/// Full text of a reading: question, both hexagrams, moving lines.
#[must_use]
pub fn render_reading(reading: &Reading) -> String {
    let mut out = String::new();
    if let Some(question) = reading.question() {
        let _ = writeln!(out, "所问：{question}");
        out.push('\n');
    }

    let result = reading.result();
    let hexagrams = reading.hexagrams();
    out.push_str(&render_hexagram(
        Side::Original,
        hexagrams.original(),
        hexagrams.original_kinship(),
        result.lines(),
    ));
    out.push('\n');
    out.push_str(&render_hexagram(
        Side::Transformed,
        hexagrams.transformed(),
        hexagrams.transformed_kinship(),
        result.lines(),
    ));
    out.push('\n');
    let _ = writeln!(out, "动爻：{}", changing_summary(result.changing_positions()));
    out
}

/// `第1、3爻` or `无动爻`.
#[must_use]
pub fn changing_summary(positions: &[u8]) -> String {
    if positions.is_empty() {
        return "无动爻".to_string();
    }
    let joined = positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("、");
    format!("第{joined}爻")
}
