//! Core guess-matching library for blind-test answers.
//!
//! Provides:
//! - Text normalization (light and strict)
//! - Edit distance tolerant of adjacent swaps and space/hyphen variants
//! - Length-adaptive tolerance
//! - Guess judging with configurable settings

pub mod distance;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod threshold;
pub mod types;

pub use distance::{distance, distance_with_unit};
pub use error::{Result, SettingsError};
pub use matching::{judge_guess, judge_guess_any, Verdict};
pub use normalize::{light_normalize, normalize, strict_normalize};
pub use threshold::{max_allowed_distance, max_allowed_distance_with_unit};
pub use types::{CharUnit, MatchSettings, NormalizationLevel, QuestionOverrides};
