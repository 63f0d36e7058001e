use crate::constants::DAYS_PER_MONTH;
use serde::Serialize;
use std::fmt;
use std::iter::Sum;

/// A newtype wrapper for cost values in USD
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    /// Create a new Cost from a raw value
    #[inline]
    pub fn new(value: f64) -> Self {
        Cost(value)
    }

    /// Get the raw value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The same cost scaled from one day to one month (30 days).
    #[inline]
    pub fn monthly(&self) -> Cost {
        Cost(self.0 * DAYS_PER_MONTH)
    }

    /// Cost per unit of the given volume, 0 when the volume is 0.
    pub fn per_unit(&self, volume: f64) -> Cost {
        if volume > 0.0 {
            Cost(self.0 / volume)
        } else {
            Cost(0.0)
        }
    }

    /// Format as currency string (e.g., "$1.23")
    pub fn to_formatted_string(&self) -> String {
        // Handle negative zero case
        let formatted_value = if self.0.abs() < 0.005 { 0.00 } else { self.0 };
        format!("${:.2}", formatted_value)
    }

    /// Format with six decimals, for tiny per-unit prices (e.g., "$0.000020")
    pub fn to_unit_price_string(&self) -> String {
        format!("${:.6}", self.0)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        Cost(iter.map(|c| c.0).sum())
    }
}

/// The engine's output: per-modality daily costs plus the daily and
/// monthly totals. `daily_total` is always the sum of the five
/// components and `monthly_total` is always `daily_total * 30`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub image_cost: Cost,
    pub video_cost: Cost,
    pub text_input_cost: Cost,
    pub audio_cost: Cost,
    pub text_output_cost: Cost,
    pub daily_total: Cost,
    pub monthly_total: Cost,
}

impl CostBreakdown {
    /// Assemble a breakdown from the five component costs, deriving the
    /// totals so they cannot drift out of sync.
    pub fn from_components(
        image_cost: Cost,
        video_cost: Cost,
        text_input_cost: Cost,
        audio_cost: Cost,
        text_output_cost: Cost,
    ) -> Self {
        let daily_total: Cost = [
            image_cost,
            video_cost,
            text_input_cost,
            audio_cost,
            text_output_cost,
        ]
        .into_iter()
        .sum();

        CostBreakdown {
            image_cost,
            video_cost,
            text_input_cost,
            audio_cost,
            text_output_cost,
            daily_total,
            monthly_total: daily_total.monthly(),
        }
    }
}
