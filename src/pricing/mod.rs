use crate::types::{
    ContextWindow, Cost, CostBreakdown, ImageBillingMode, ModelTier, RateSet, UsageProfile,
};

/// Estimate the daily and monthly cost of a usage profile.
///
/// Pure arithmetic over the rate table: no state, no I/O, no time
/// dependence, so the same inputs always produce the same breakdown.
/// Inputs are assumed non-negative; the caller validates before calling.
pub fn estimate(
    usage: &UsageProfile,
    model: ModelTier,
    window: ContextWindow,
    image_billing: ImageBillingMode,
) -> CostBreakdown {
    let rates = RateSet::lookup(model, window);

    let image_volume = match image_billing {
        ImageBillingMode::PerImage => usage.image_count_per_day as f64,
        ImageBillingMode::PerApiCall => usage.api_calls_per_day as f64,
    };

    let image_cost = Cost::new(rates.image * image_volume);
    let video_cost = Cost::new(rates.video_per_second * usage.video_seconds_per_day);
    let text_input_cost =
        Cost::new(rates.text_input_per_1k_chars * (usage.input_chars_per_day() as f64 / 1000.0));
    let audio_cost = Cost::new(rates.audio_per_second * usage.audio_seconds_per_day);
    let text_output_cost =
        Cost::new(rates.text_output_per_1k_chars * (usage.output_chars_per_day() as f64 / 1000.0));

    CostBreakdown::from_components(
        image_cost,
        video_cost,
        text_input_cost,
        audio_cost,
        text_output_cost,
    )
}
