//! Lines (爻) and the four drawn line states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// Traditional position names, bottom (初) to top (上).
pub const POSITION_NAMES: [&str; LINE_COUNT] = ["初", "二", "三", "四", "五", "上"];

/// One of the four line states a coin throw can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineState {
    /// 单: one back.
    StableYang,
    /// 拆: two backs.
    StableYin,
    /// 重: three backs. Becomes yin in the transformed hexagram.
    ChangingYang,
    /// 交: no backs. Becomes yang in the transformed hexagram.
    ChangingYin,
}

impl LineState {
    pub const ALL: [LineState; 4] = [
        LineState::StableYang,
        LineState::StableYin,
        LineState::ChangingYang,
        LineState::ChangingYin,
    ];

    /// Map a back count to its line state. Counts above three are not a
    /// possible three-coin outcome.
    #[must_use]
    pub const fn from_backs(backs: u8) -> Option<Self> {
        match backs {
            1 => Some(LineState::StableYang),
            2 => Some(LineState::StableYin),
            3 => Some(LineState::ChangingYang),
            0 => Some(LineState::ChangingYin),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_yang(self) -> bool {
        matches!(self, LineState::StableYang | LineState::ChangingYang)
    }

    #[must_use]
    pub const fn is_changing(self) -> bool {
        matches!(self, LineState::ChangingYang | LineState::ChangingYin)
    }

    /// Symbol used when drawing the original hexagram.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            LineState::StableYang => "⚊",
            LineState::StableYin => "⚋",
            LineState::ChangingYang => "○",
            LineState::ChangingYin => "×",
        }
    }

    /// Traditional name of the throw outcome (单 拆 重 交).
    #[must_use]
    pub const fn throw_name(self) -> &'static str {
        match self {
            LineState::StableYang => "单",
            LineState::StableYin => "拆",
            LineState::ChangingYang => "重",
            LineState::ChangingYin => "交",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            LineState::StableYang => "阳爻",
            LineState::StableYin => "阴爻",
            LineState::ChangingYang => "阳动",
            LineState::ChangingYin => "阴动",
        }
    }
}

impl fmt::Display for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A drawn line. Immutable once created; its position is its index in the
/// cast's line sequence (0 = bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    is_yang: bool,
    is_changing: bool,
}

impl Line {
    #[must_use]
    pub const fn new(is_yang: bool, is_changing: bool) -> Self {
        Self {
            is_yang,
            is_changing,
        }
    }

    #[must_use]
    pub const fn is_yang(self) -> bool {
        self.is_yang
    }

    #[must_use]
    pub const fn is_changing(self) -> bool {
        self.is_changing
    }

    /// Polarity in the transformed hexagram: flipped iff the line is changing.
    #[must_use]
    pub const fn transformed_is_yang(self) -> bool {
        self.is_yang != self.is_changing
    }

    #[must_use]
    pub const fn state(self) -> LineState {
        match (self.is_yang, self.is_changing) {
            (true, false) => LineState::StableYang,
            (false, false) => LineState::StableYin,
            (true, true) => LineState::ChangingYang,
            (false, true) => LineState::ChangingYin,
        }
    }
}

impl From<LineState> for Line {
    fn from(state: LineState) -> Self {
        Line::new(state.is_yang(), state.is_changing())
    }
}
