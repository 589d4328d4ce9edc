//! Three-coin throws and the randomness sources that drive them.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use zengshan_types::{Line, LineState};

/// Coins per throw.
pub const COINS_PER_THROW: usize = 3;

/// One face of a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinFace {
    /// 字: the inscribed face.
    Inscription,
    /// 背: the back.
    Back,
}

impl CoinFace {
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { CoinFace::Back } else { CoinFace::Inscription }
    }

    #[must_use]
    pub const fn hanzi(self) -> &'static str {
        match self {
            CoinFace::Inscription => "字",
            CoinFace::Back => "背",
        }
    }
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// The three faces of a single throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinThrow {
    faces: [CoinFace; COINS_PER_THROW],
}

impl CoinThrow {
    #[must_use]
    pub const fn new(faces: [CoinFace; COINS_PER_THROW]) -> Self {
        Self { faces }
    }

    #[must_use]
    pub const fn faces(&self) -> [CoinFace; COINS_PER_THROW] {
        self.faces
    }

    /// Number of coins showing their back, 0..=3.
    #[must_use]
    pub fn backs(&self) -> u8 {
        self.faces
            .iter()
            .filter(|face| **face == CoinFace::Back)
            .count() as u8
    }

    #[must_use]
    pub fn line_state(&self) -> LineState {
        // backs() never exceeds COINS_PER_THROW, so from_backs always maps.
        LineState::from_backs(self.backs()).unwrap_or(LineState::ChangingYin)
    }

    #[must_use]
    pub fn line(&self) -> Line {
        Line::from(self.line_state())
    }
}

impl fmt::Display for CoinThrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.faces;
        write!(f, "{a} {b} {c}")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoinSourceError {
    #[error("coin script exhausted after {drawn} draws")]
    Exhausted { drawn: usize },
    #[error("randomness unavailable: {0}")]
    Unavailable(String),
}

/// A source of independent, uniform coin faces.
pub trait CoinSource {
    fn next_face(&mut self) -> Result<CoinFace, CoinSourceError>;
}

/// Draw three faces from `source`.
pub fn throw_coins<S: CoinSource + ?Sized>(source: &mut S) -> Result<CoinThrow, CoinSourceError> {
    Ok(CoinThrow::new([
        source.next_face()?,
        source.next_face()?,
        source.next_face()?,
    ]))
}

/// Thread-local OS-seeded randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngCoins;

impl CoinSource for ThreadRngCoins {
    fn next_face(&mut self) -> Result<CoinFace, CoinSourceError> {
        Ok(CoinFace::from_bit(rand::random::<bool>()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("coin script may only contain '0' (字) and '1' (背); found {found:?} at position {position}")]
pub struct CoinScriptError {
    pub found: char,
    pub position: usize,
}

/// Replays a fixed sequence of faces. Fails once drained.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCoins {
    faces: VecDeque<CoinFace>,
    drawn: usize,
}

impl ScriptedCoins {
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = CoinFace>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Parse `1` (背) / `0` (字) characters; whitespace, `,` and `|` are ignored.
    pub fn parse(script: &str) -> Result<Self, CoinScriptError> {
        let mut faces = Vec::new();
        for (position, ch) in script.chars().enumerate() {
            match ch {
                '1' => faces.push(CoinFace::Back),
                '0' => faces.push(CoinFace::Inscription),
                c if c.is_whitespace() || c == ',' || c == '|' => {}
                found => return Err(CoinScriptError { found, position }),
            }
        }
        Ok(Self::new(faces))
    }

    /// Faces not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl CoinSource for ScriptedCoins {
    fn next_face(&mut self) -> Result<CoinFace, CoinSourceError> {
        let face = self
            .faces
            .pop_front()
            .ok_or(CoinSourceError::Exhausted { drawn: self.drawn })?;
        self.drawn += 1;
        Ok(face)
    }
}
