//! # Moodscope-Dynamics
//!
//! Big Five personality estimation from a history of daily mood entries.
//!
//! ## Pipeline
//!
//! 1. **Sort** entries by date (on a copy; the caller's order is kept)
//! 2. **Affect dynamics** - mean, SD, MSSD and lag-1 autocorrelation of the
//!    valence and arousal series
//! 3. **Activity patterns** - social, novelty, sleep, exercise and diversity
//!    ratios from the activity tags
//! 4. **Trait mapping** - fixed weighted sums of normalized features,
//!    scaled to 0-100
//! 5. **Confidence** - from entry count and the calendar span covered
//!
//! Everything is synchronous and side-effect free. Histories shorter than
//! [`MIN_ENTRIES`] are the caller's to reject, see
//! [`ensure_sufficient_entries`].

pub mod affect;
pub mod assessment;
pub mod config;
pub mod patterns;
pub mod stats;
pub mod trait_mapper;

pub use affect::*;
pub use assessment::*;
pub use self::config::*;
pub use patterns::*;
pub use trait_mapper::*;
