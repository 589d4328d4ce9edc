//! The five phases (五行) and their generation/destruction cycles.
//!
//! Both cycles are closed permutations over the five elements, so every lookup
//! here is total. `generates`/`generated_by` and `destroys`/`destroyed_by` are
//! exact inverses of each other; the unit tests pin that down.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// The element this one produces (我生).
    ///
    /// Wood → Fire → Earth → Metal → Water → Wood.
    #[must_use]
    pub const fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element that produces this one (生我).
    #[must_use]
    pub const fn generated_by(self) -> Element {
        match self {
            Element::Fire => Element::Wood,
            Element::Earth => Element::Fire,
            Element::Metal => Element::Earth,
            Element::Water => Element::Metal,
            Element::Wood => Element::Water,
        }
    }

    /// The element this one overcomes (我克): two steps ahead on the
    /// generation cycle.
    #[must_use]
    pub const fn destroys(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    /// The element that overcomes this one (克我).
    #[must_use]
    pub const fn destroyed_by(self) -> Element {
        match self {
            Element::Earth => Element::Wood,
            Element::Water => Element::Earth,
            Element::Fire => Element::Water,
            Element::Metal => Element::Fire,
            Element::Wood => Element::Metal,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    /// Traditional single-character name (木 火 土 金 水).
    #[must_use]
    pub const fn hanzi(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Parse from either the English name or the single hanzi.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Element::ALL.into_iter().find(|element| {
            element.as_str().eq_ignore_ascii_case(trimmed) || element.hanzi() == trimmed
        })
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}
