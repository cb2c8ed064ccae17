//! Background move computation.
//!
//! The search itself is synchronous. This module runs it on a worker thread
//! against a copy of the live game so the caller stays responsive, and hands
//! back the outcome for the caller to commit.

mod controller;
mod difficulty;

pub use controller::{EngineController, SearchJob, SearchOutcome};
pub use difficulty::Difficulty;
