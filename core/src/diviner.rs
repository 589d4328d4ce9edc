//! One divination from question to resolved reading.

use serde::Serialize;
use thiserror::Error;

use zengshan_types::{Line, NonEmptyString};

use crate::coin::{CoinSource, CoinSourceError, CoinThrow, throw_coins};
use crate::resolver::{HexagramPair, HexagramResolver};
use crate::session::{CastResult, CastSession, SessionError, SessionState};

#[derive(Debug, Error)]
pub enum DivinationError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Coins(#[from] CoinSourceError),
}

/// What a single throw produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThrowRecord {
    /// 1-indexed line position.
    pub position: usize,
    pub coins: CoinThrow,
    pub line: Line,
}

/// A completed divination.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    question: Option<NonEmptyString>,
    result: CastResult,
    hexagrams: HexagramPair,
}

impl Reading {
    #[must_use]
    pub fn new(
        question: Option<NonEmptyString>,
        result: CastResult,
        hexagrams: HexagramPair,
    ) -> Self {
        Self {
            question,
            result,
            hexagrams,
        }
    }

    #[must_use]
    pub fn question(&self) -> Option<&NonEmptyString> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> &CastResult {
        &self.result
    }

    #[must_use]
    pub fn hexagrams(&self) -> &HexagramPair {
        &self.hexagrams
    }
}

/// Drives a [`CastSession`] with coin throws and resolves the outcome.
#[derive(Debug, Clone)]
pub struct Diviner<'a> {
    resolver: HexagramResolver<'a>,
    session: CastSession,
    question: Option<NonEmptyString>,
}

impl<'a> Diviner<'a> {
    #[must_use]
    pub fn new(resolver: HexagramResolver<'a>) -> Self {
        Self {
            resolver,
            session: CastSession::new(),
            question: None,
        }
    }

    /// Start a new divination, discarding any previous one.
    pub fn begin(&mut self, question: Option<NonEmptyString>) {
        tracing::debug!(has_question = question.is_some(), "Beginning divination");
        self.question = question;
        self.session.start();
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.state() == SessionState::Complete
    }

    /// Throw three coins and record the resulting line. Nothing is drawn from
    /// `source` unless the session is accepting throws.
    pub fn throw<S: CoinSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<ThrowRecord, DivinationError> {
        self.session.ensure_accepting()?;
        let coins = throw_coins(source)?;
        let line = coins.line();
        let position = self.session.record_throw(line)?;
        Ok(ThrowRecord {
            position,
            coins,
            line,
        })
    }

    /// Throw until the session completes.
    pub fn throw_remaining<S: CoinSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Vec<ThrowRecord>, DivinationError> {
        let mut records = Vec::new();
        while !self.is_complete() {
            records.push(self.throw(source)?);
        }
        Ok(records)
    }

    pub fn finish(&self) -> Result<Reading, DivinationError> {
        let result = self.session.build_result()?;
        let hexagrams = self.resolver.resolve_pair(&result);
        tracing::debug!(
            original = %result.original(),
            transformed = %result.transformed(),
            changing = ?result.changing_positions(),
            "Cast complete"
        );
        Ok(Reading::new(self.question.clone(), result, hexagrams))
    }
}
