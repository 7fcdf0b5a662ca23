//! Break engine: the two office gauges and every rule that moves them.
//!
//! The engine owns accumulated stress and the boss alert meter, applies
//! elapsed-time drift and cooldown on every action, and executes break
//! routines against a single seeded generator so that a fixed seed
//! reproduces entire sessions byte for byte.
//!
//! # Modules
//!
//! - [`state`]: the [`ChillState`] engine and its time rules
//! - [`routine`]: routine/scenario data types executed by the engine
//! - [`report`]: rendered break outcomes
//! - [`config`]: construction-time tuning
//! - [`clock`]: injectable clock and sleep capabilities
//! - [`history`]: append-only JSONL break history

pub mod clock;
pub mod config;
pub mod history;
pub mod report;
pub mod routine;
pub mod state;

pub use clock::{tokio_sleep, Clock, SleepFn, SleepFuture, SystemClock};
pub use config::EngineConfig;
pub use history::{BreakLogger, BreakRecord};
pub use report::{BreakReport, GaugeSnapshot};
pub use routine::{BreakRoutine, DetailLines, PostHook, Scenario};
pub use state::{ChillState, BOSS_WATCH_DELAY_SECS, MAX_BOSS_ALERT, MAX_STRESS};
