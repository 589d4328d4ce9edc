//! The six-throw cast state machine.
//!
//! ```text
//! NotStarted --start()--> InProgress(0) --record_throw()x6--> Complete
//!                              ^                                  |
//!                              +-------------start()--------------+
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use zengshan_types::{HexagramCode, LINE_COUNT, Line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    /// `step` lines have been recorded so far (0..=5).
    InProgress { step: usize },
    Complete,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::NotStarted => f.write_str("not started"),
            SessionState::InProgress { step } => write!(f, "in progress ({step}/{LINE_COUNT})"),
            SessionState::Complete => f.write_str("complete"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {operation} while session is {state}")]
    InvalidStateTransition {
        operation: &'static str,
        state: SessionState,
    },
}

/// The outcome of one completed cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastResult {
    lines: [Line; LINE_COUNT],
    original: HexagramCode,
    transformed: HexagramCode,
    changing_positions: Vec<u8>,
}

impl CastResult {
    /// Derive both codes and the changing positions from six lines, bottom first.
    #[must_use]
    pub fn from_lines(lines: [Line; LINE_COUNT]) -> Self {
        let changing_positions = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_changing())
            .map(|(i, _)| (i + 1) as u8)
            .collect();
        Self {
            original: HexagramCode::original(&lines),
            transformed: HexagramCode::transformed(&lines),
            lines,
            changing_positions,
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[Line; LINE_COUNT] {
        &self.lines
    }

    #[must_use]
    pub fn original(&self) -> HexagramCode {
        self.original
    }

    #[must_use]
    pub fn transformed(&self) -> HexagramCode {
        self.transformed
    }

    /// 1-indexed, ascending.
    #[must_use]
    pub fn changing_positions(&self) -> &[u8] {
        &self.changing_positions
    }

    #[must_use]
    pub fn has_changing_lines(&self) -> bool {
        !self.changing_positions.is_empty()
    }
}

/// One divination's worth of throws.
#[derive(Debug, Clone)]
pub struct CastSession {
    state: SessionState,
    lines: Vec<Line>,
}

impl CastSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::NotStarted,
            lines: Vec::with_capacity(LINE_COUNT),
        }
    }

    /// Reset to the first throw, discarding anything recorded before.
    pub fn start(&mut self) {
        if !self.lines.is_empty() {
            tracing::debug!(discarded = self.lines.len(), "Restarting cast session");
        }
        self.lines.clear();
        self.state = SessionState::InProgress { step: 0 };
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Lines recorded so far, bottom first.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whether `record_throw` would currently be accepted.
    pub fn ensure_accepting(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::InProgress { .. } => Ok(()),
            state => Err(SessionError::InvalidStateTransition {
                operation: "record a throw",
                state,
            }),
        }
    }

    /// Append `line` at the current step. Returns the 1-indexed position it
    /// was recorded at.
    pub fn record_throw(&mut self, line: Line) -> Result<usize, SessionError> {
        self.ensure_accepting()?;
        self.lines.push(line);
        let step = self.lines.len();
        tracing::debug!(
            position = step,
            yang = line.is_yang(),
            changing = line.is_changing(),
            "Recorded throw"
        );
        self.state = if step == LINE_COUNT {
            SessionState::Complete
        } else {
            SessionState::InProgress { step }
        };
        Ok(step)
    }

    pub fn build_result(&self) -> Result<CastResult, SessionError> {
        let lines: [Line; LINE_COUNT] = match self.state {
            SessionState::Complete => self.lines.as_slice().try_into().map_err(|_| {
                SessionError::InvalidStateTransition {
                    operation: "build a result",
                    state: self.state,
                }
            })?,
            state => {
                return Err(SessionError::InvalidStateTransition {
                    operation: "build a result",
                    state,
                });
            }
        };
        Ok(CastResult::from_lines(lines))
    }
}

impl Default for CastSession {
    fn default() -> Self {
        Self::new()
    }
}
