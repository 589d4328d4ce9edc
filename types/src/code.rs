//! Six-bit hexagram codes.
//!
//! Bit `i` holds line `i` (0 = bottom), 1 for yang. The textual form is six
//! `0`/`1` characters in position order, so `"100000"` has a single yang line
//! at the bottom (地雷复).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{LINE_COUNT, Line};

/// Number of distinct hexagram codes.
pub const CODE_COUNT: usize = 1 << LINE_COUNT;

const MASK: u8 = (1 << LINE_COUNT) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexagramCode(u8);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeParseError {
    #[error("hexagram code must have 6 characters (got {0})")]
    Length(usize),
    #[error("hexagram code may only contain '0' and '1' (got {0:?} at position {1})")]
    Digit(char, usize),
}

impl HexagramCode {
    /// Build from the low six bits of `bits`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & MASK)
    }

    /// Compile-time constructor for literal codes in static tables.
    #[must_use]
    pub const fn from_ascii(raw: &[u8; LINE_COUNT]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < LINE_COUNT {
            match raw[i] {
                b'1' => bits |= 1 << i,
                b'0' => {}
                _ => panic!("hexagram code literal must be binary"),
            }
            i += 1;
        }
        Self(bits)
    }

    /// Code of the hexagram as drawn.
    #[must_use]
    pub fn original(lines: &[Line; LINE_COUNT]) -> Self {
        Self::collect(lines.iter().map(|line| line.is_yang()))
    }

    /// Code after every changing line has flipped.
    #[must_use]
    pub fn transformed(lines: &[Line; LINE_COUNT]) -> Self {
        Self::collect(lines.iter().map(|line| line.transformed_is_yang()))
    }

    fn collect(polarity: impl Iterator<Item = bool>) -> Self {
        let bits = polarity
            .enumerate()
            .filter(|(_, yang)| *yang)
            .fold(0u8, |acc, (i, _)| acc | (1 << i));
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the line at zero-based `position` is yang.
    #[must_use]
    pub const fn is_yang(self, position: usize) -> bool {
        position < LINE_COUNT && (self.0 >> position) & 1 == 1
    }

    /// Flip every line whose bit is set in `mask`.
    #[must_use]
    pub const fn flip(self, mask: u8) -> Self {
        Self((self.0 ^ mask) & MASK)
    }

    /// All 64 codes in ascending bit order.
    pub fn all() -> impl Iterator<Item = HexagramCode> {
        (0..CODE_COUNT as u8).map(HexagramCode)
    }
}

impl fmt::Display for HexagramCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..LINE_COUNT {
            f.write_str(if self.is_yang(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for HexagramCode {
    type Err = CodeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let count = trimmed.chars().count();
        if count != LINE_COUNT {
            return Err(CodeParseError::Length(count));
        }
        let mut bits = 0u8;
        for (position, ch) in trimmed.chars().enumerate() {
            match ch {
                '1' => bits |= 1 << position,
                '0' => {}
                other => return Err(CodeParseError::Digit(other, position)),
            }
        }
        Ok(Self(bits))
    }
}

impl TryFrom<String> for HexagramCode {
    type Error = CodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexagramCode> for String {
    fn from(value: HexagramCode) -> Self {
        value.to_string()
    }
}
