//! The eight palaces (八宫) and their canonical branch sequences.
//!
//! [`PalaceConfigTable`] is the authority for per-line branches: whatever a
//! catalog record stores inline is re-derived from here before display.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Branch, Element, LINE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palace {
    Qian,
    Dui,
    Li,
    Zhen,
    Xun,
    Kan,
    Gen,
    Kun,
}

impl Palace {
    pub const ALL: [Palace; 8] = [
        Palace::Qian,
        Palace::Dui,
        Palace::Li,
        Palace::Zhen,
        Palace::Xun,
        Palace::Kan,
        Palace::Gen,
        Palace::Kun,
    ];

    /// Full palace name, e.g. `乾宫`.
    #[must_use]
    pub const fn hanzi(self) -> &'static str {
        match self {
            Palace::Qian => "乾宫",
            Palace::Dui => "兑宫",
            Palace::Li => "离宫",
            Palace::Zhen => "震宫",
            Palace::Xun => "巽宫",
            Palace::Kan => "坎宫",
            Palace::Gen => "艮宫",
            Palace::Kun => "坤宫",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Palace::Qian => "qian",
            Palace::Dui => "dui",
            Palace::Li => "li",
            Palace::Zhen => "zhen",
            Palace::Xun => "xun",
            Palace::Kan => "kan",
            Palace::Gen => "gen",
            Palace::Kun => "kun",
        }
    }

    /// Parse `乾宫`, `乾`, or the pinyin `qian`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Palace::ALL.into_iter().find(|palace| {
            palace.hanzi() == trimmed
                || palace.hanzi().trim_end_matches('宫') == trimmed
                || palace.as_str().eq_ignore_ascii_case(trimmed)
        })
    }
}

impl fmt::Display for Palace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// Ruling element and bottom-to-top branch sequence of one palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceEntry {
    palace: Palace,
    element: Element,
    branches: [Branch; LINE_COUNT],
}

impl PalaceEntry {
    #[must_use]
    pub const fn new(palace: Palace, element: Element, branches: [Branch; LINE_COUNT]) -> Self {
        Self {
            palace,
            element,
            branches,
        }
    }

    #[must_use]
    pub const fn palace(&self) -> Palace {
        self.palace
    }

    #[must_use]
    pub const fn element(&self) -> Element {
        self.element
    }

    #[must_use]
    pub const fn branches(&self) -> &[Branch; LINE_COUNT] {
        &self.branches
    }

    /// Per-line elements derived from the branch sequence.
    #[must_use]
    pub fn line_elements(&self) -> [Element; LINE_COUNT] {
        self.branches.map(Branch::element)
    }
}

/// Read-only lookup from [`Palace`] to its [`PalaceEntry`].
#[derive(Debug, Clone)]
pub struct PalaceConfigTable {
    entries: HashMap<Palace, PalaceEntry>,
}

impl PalaceConfigTable {
    /// The eight-palace assignment used by the Zeng-Shan-Bu-Yi school.
    #[must_use]
    pub fn standard() -> Self {
        use Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};

        Self::from_entries([
            PalaceEntry::new(Palace::Qian, Element::Metal, [Zi, Yin, Chen, Wu, Shen, Xu]),
            PalaceEntry::new(Palace::Dui, Element::Metal, [Si, Mao, Chou, Hai, You, Wei]),
            PalaceEntry::new(Palace::Li, Element::Fire, [Mao, Chou, Hai, You, Wei, Si]),
            PalaceEntry::new(Palace::Zhen, Element::Wood, [Zi, Yin, Chen, Wu, Shen, Xu]),
            PalaceEntry::new(Palace::Xun, Element::Wood, [Chou, Hai, You, Wei, Si, Mao]),
            PalaceEntry::new(Palace::Kan, Element::Water, [Yin, Chen, Wu, Shen, Xu, Zi]),
            PalaceEntry::new(Palace::Gen, Element::Earth, [Chen, Wu, Shen, Xu, Zi, Yin]),
            PalaceEntry::new(Palace::Kun, Element::Earth, [Wei, Si, Mao, Chou, Hai, You]),
        ])
    }

    /// Build a table from explicit entries. Later entries replace earlier ones
    /// for the same palace.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = PalaceEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.palace(), entry))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, palace: Palace) -> Option<&PalaceEntry> {
        self.entries.get(&palace)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PalaceConfigTable {
    fn default() -> Self {
        Self::standard()
    }
}
