//! # Moodscope-Core
//!
//! Core types for the Moodscope daily mood tracker: the stored daily entry,
//! the questionnaire vocabulary behind its activity tags, and the Big Five
//! personality result derived from a user's history.

pub mod error;
pub mod ocean;
pub mod questionnaire;
pub mod types;

pub use error::{Error, Result};
pub use ocean::*;
pub use questionnaire::*;
pub use types::*;
