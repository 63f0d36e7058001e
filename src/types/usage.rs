use crate::error::GemcostError;
use serde::{Deserialize, Serialize};

/// Daily usage volumes driving the cost computation.
///
/// Text lengths are measured in characters, not tokens; in English a
/// token is roughly 4 characters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageProfile {
    pub api_calls_per_day: u64,
    pub avg_input_length: u64,
    pub avg_output_length: u64,
    pub image_count_per_day: u64,
    pub video_seconds_per_day: f64,
    pub audio_seconds_per_day: f64,
}

impl Default for UsageProfile {
    fn default() -> Self {
        UsageProfile {
            api_calls_per_day: 0,
            avg_input_length: 0,
            avg_output_length: 0,
            image_count_per_day: 0,
            video_seconds_per_day: 0.0,
            audio_seconds_per_day: 0.0,
        }
    }
}

impl UsageProfile {
    /// Reject negative or non-finite durations. The integer fields
    /// cannot go negative, but the float fields can arrive as -1, NaN
    /// or inf from a JSON profile or a flag, and the pricing engine
    /// itself never clamps.
    pub fn validate(&self) -> Result<(), GemcostError> {
        for (field, value) in [
            ("videoSecondsPerDay", self.video_seconds_per_day),
            ("audioSecondsPerDay", self.audio_seconds_per_day),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(GemcostError::NegativeInput { field, value });
            }
        }
        Ok(())
    }

    /// Total input characters per day, across all calls. Saturating,
    /// since both factors are unbounded caller input.
    pub fn input_chars_per_day(&self) -> u64 {
        self.api_calls_per_day.saturating_mul(self.avg_input_length)
    }

    /// Total output characters per day, across all calls.
    pub fn output_chars_per_day(&self) -> u64 {
        self.api_calls_per_day.saturating_mul(self.avg_output_length)
    }
}
