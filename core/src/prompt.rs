//! Interpretation payload handed to the language model.

use std::fmt::Write;

use zengshan_types::{Kinship, LINE_COUNT};

use crate::calendar::GanZhiDate;
use crate::diviner::Reading;
use crate::render::{changing_summary, line_details};
use crate::resolver::ResolvedHexagram;

/// System instruction sent alongside [`build_interpretation_prompt`].
pub const INTERPRETER_SYSTEM_PROMPT: &str = "你是一位精通《增删卜易》六爻纳甲法的解卦师。\
根据用户提供的卦象、世应、六亲、月建日辰与动爻，依增删卜易的方法断卦。\
先定用神，再论旺衰、生克、动变，最后给出简明的结论与建议。";

fn push_hexagram(
    out: &mut String,
    title: &str,
    hexagram: &ResolvedHexagram,
    kinship: Option<&[Kinship; LINE_COUNT]>,
) {
    let _ = write!(out, "{title}：{}", hexagram.name());
    if let Some(known) = hexagram.known() {
        let _ = write!(out, "（{}，属{}）", known.palace(), known.element());
    }
    out.push('\n');
    let _ = writeln!(out, "卦辞：{}", hexagram.judgment());
    if let Some(known) = hexagram.known() {
        for detail in line_details(known, kinship).iter().rev() {
            let _ = writeln!(out, "  {detail}");
        }
    }
}

/// Plain-text prompt built from the question, today's pillars and the reading.
#[must_use]
pub fn build_interpretation_prompt(
    question: Option<&str>,
    calendar: &GanZhiDate,
    reading: &Reading,
) -> String {
    let mut out = String::new();
    let question = question
        .or_else(|| reading.question().map(|q| q.as_str()))
        .unwrap_or("未说明所问之事");
    let _ = writeln!(out, "所问之事：{question}");
    let _ = writeln!(out, "起卦时间：{calendar}");
    out.push('\n');

    let hexagrams = reading.hexagrams();
    push_hexagram(
        &mut out,
        "本卦",
        hexagrams.original(),
        hexagrams.original_kinship(),
    );
    out.push('\n');
    push_hexagram(
        &mut out,
        "变卦",
        hexagrams.transformed(),
        hexagrams.transformed_kinship(),
    );
    out.push('\n');

    let _ = writeln!(
        out,
        "动爻：{}",
        changing_summary(reading.result().changing_positions())
    );
    out.push('\n');
    out.push_str("请依增删卜易之法解读此卦，结合月建日辰论用神旺衰，并回答所问之事。");
    out
}
