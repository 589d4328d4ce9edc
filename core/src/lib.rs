//! Divination engine for Zengshan.
//!
//! Coin throws feed a [`CastSession`]; the finished [`CastResult`] is resolved
//! against the [`HexagramCatalog`] and palace table into a [`HexagramPair`].
//! Nothing here performs network IO. The calendar and randomness sources are
//! injected through the [`Calendar`] and [`CoinSource`] traits.

#![allow(clippy::missing_errors_doc)]

pub mod calendar;
pub mod catalog;
pub mod coin;
mod diviner;
mod prompt;
pub mod render;
mod resolver;
mod session;

pub use calendar::{Calendar, CalendarError, FixedCalendar, GanZhiDate, SystemCalendar};
pub use catalog::{HexagramCatalog, HexagramRecord};
pub use coin::{
    COINS_PER_THROW, CoinFace, CoinScriptError, CoinSource, CoinSourceError, CoinThrow,
    ScriptedCoins, ThreadRngCoins, throw_coins,
};
pub use diviner::{DivinationError, Diviner, Reading, ThrowRecord};
pub use prompt::{INTERPRETER_SYSTEM_PROMPT, build_interpretation_prompt};
pub use render::{render_reading, render_throw};
pub use resolver::{
    BranchSource, HexagramPair, HexagramResolver, KnownHexagram, Resolution, ResolvedHexagram,
};
pub use session::{CastResult, CastSession, SessionError, SessionState};
