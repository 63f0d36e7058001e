// Module declarations
pub mod cli;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod pricing;
pub mod report;
pub mod types;

// Re-export commonly used items
pub use error::{GemcostError, Result};
pub use pricing::estimate;
pub use report::Report;
pub use types::{
    ContextWindow, Cost, CostBreakdown, ImageBillingMode, ModelTier, UsageProfile,
    WindowSelection,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_json_to_breakdown() {
        let json_str = r#"{
            "apiCallsPerDay": 20000,
            "avgInputLength": 2000,
            "avgOutputLength": 750,
            "imageCountPerDay": 1000,
            "videoSecondsPerDay": 0,
            "audioSecondsPerDay": 0
        }"#;

        let profile: UsageProfile = serde_json::from_str(json_str).unwrap();
        profile.validate().unwrap();

        let window = WindowSelection::Auto.resolve(profile.avg_input_length);
        assert_eq!(window, ContextWindow::UpTo128K);

        let breakdown = estimate(
            &profile,
            ModelTier::Gemini15Flash,
            window,
            ImageBillingMode::PerImage,
        );
        assert!((breakdown.daily_total.value() - 1.895).abs() < 1e-12);
        assert_eq!(
            breakdown.monthly_total.value(),
            breakdown.daily_total.value() * 30.0
        );
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let profile = UsageProfile {
            api_calls_per_day: 5000,
            avg_input_length: 300_000,
            avg_output_length: 1200,
            image_count_per_day: 250,
            video_seconds_per_day: 40.0,
            audio_seconds_per_day: 15.0,
        };
        let window = ContextWindow::from_input_length(profile.avg_input_length);
        assert_eq!(window, ContextWindow::Over128K);

        let first = estimate(
            &profile,
            ModelTier::Gemini15Pro,
            window,
            ImageBillingMode::PerImage,
        );
        let second = estimate(
            &profile,
            ModelTier::Gemini15Pro,
            window,
            ImageBillingMode::PerImage,
        );
        assert_eq!(first, second);
    }
}
