//! Heavenly stems (天干) and earthly branches (地支).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Element;

/// One of the twelve earthly branches, in cyclic order starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Fixed elemental association. 辰 戌 丑 未 all map to Earth.
    #[must_use]
    pub const fn element(self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Element::Earth,
        }
    }

    /// Zero-based position in the cycle (子 = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Branch at `index` modulo 12.
    #[must_use]
    pub const fn from_index(index: usize) -> Branch {
        Branch::ALL[index % 12]
    }

    #[must_use]
    pub const fn hanzi(self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// One of the ten heavenly stems, in cyclic order starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Stem {
        Stem::ALL[index % 10]
    }

    #[must_use]
    pub const fn hanzi(self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// A stem-branch pair (干支), one of the sixty positions of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    stem: Stem,
    branch: Branch,
}

impl StemBranch {
    /// Position `index` (mod 60) of the sexagenary cycle; 0 is 甲子.
    #[must_use]
    pub const fn from_cycle_index(index: usize) -> Self {
        let index = index % 60;
        Self {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }

    #[must_use]
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    #[must_use]
    pub const fn stem(self) -> Stem {
        self.stem
    }

    #[must_use]
    pub const fn branch(self) -> Branch {
        self.branch
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}
