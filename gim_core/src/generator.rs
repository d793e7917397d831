//! Workout suggestions derived from a personal-record weight.
//!
//! Each difficulty level prescribes a fixed sets/reps scheme and a fraction
//! of the personal record to lift:
//! - Easy: 3 sets of 12 at 50%
//! - Medium: 3 sets of 8 at 70%
//! - Hard: 3 sets of 5 at 85%

use crate::error::ParseError;
use crate::{Exercise, Level};

/// Suggestion strategy for one difficulty level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generator {
    Easy,
    Medium,
    Hard,
}

impl Generator {
    /// Select the strategy for a difficulty level
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Easy => Generator::Easy,
            Level::Medium => Generator::Medium,
            Level::Hard => Generator::Hard,
        }
    }

    /// (sets, reps, fraction of personal record)
    fn scheme(self) -> (u32, u32, f64) {
        match self {
            Generator::Easy => (3, 12, 0.5),
            Generator::Medium => (3, 8, 0.7),
            Generator::Hard => (3, 5, 0.85),
        }
    }

    /// Suggest a session for `personal_record`
    ///
    /// Output shape: `"<name>: <weight>kg <sets>sets x <reps>reps"` with the
    /// weight rounded half away from zero to two decimal places.
    pub fn suggest(self, personal_record: &Exercise) -> Result<String, ParseError> {
        let (sets, reps, factor) = self.scheme();
        let suggested = round_to_hundredths(factor * personal_record.weight.value()?);
        Ok(format!(
            "{}: {:.2}kg {}sets x {}reps",
            personal_record.name, suggested, sets, reps
        ))
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
