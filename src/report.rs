use crate::constants::PRICING_PAGE_URL;
use crate::formatting::{format_count, format_seconds};
use crate::types::{
    ContextWindow, Cost, CostBreakdown, ImageBillingMode, ModelTier, UsageProfile,
};
use colored::Colorize;
use std::fmt::Write;

/// One rendered modality section: the billed volume for one day and
/// one month, the per-unit price, and the daily and monthly cost.
struct ModalitySection {
    title: &'static str,
    daily_volume: String,
    monthly_volume: String,
    unit_label: &'static str,
    unit_price: Cost,
    daily_cost: Cost,
}

impl ModalitySection {
    fn write_to(&self, out: &mut String, index: usize) {
        let _ = writeln!(out, "{}", format!("{}. {}", index, self.title).bold());
        let _ = writeln!(out, "  - Daily volume: {}", self.daily_volume);
        let _ = writeln!(out, "  - Monthly volume: {}", self.monthly_volume);
        let _ = writeln!(
            out,
            "  - {}: {}",
            self.unit_label,
            self.unit_price.to_unit_price_string()
        );
        let _ = writeln!(out, "  - Daily cost: {}", self.daily_cost);
        let _ = writeln!(out, "  - Monthly cost: {}", self.daily_cost.monthly());
    }
}

/// Everything needed to reproduce the original calculator's report:
/// the inputs, the selected tier and window, and the breakdown the
/// engine produced for them.
pub struct Report<'a> {
    usage: &'a UsageProfile,
    model: ModelTier,
    window: ContextWindow,
    image_billing: ImageBillingMode,
    breakdown: &'a CostBreakdown,
}

impl<'a> Report<'a> {
    pub fn new(
        usage: &'a UsageProfile,
        model: ModelTier,
        window: ContextWindow,
        image_billing: ImageBillingMode,
        breakdown: &'a CostBreakdown,
    ) -> Self {
        Report {
            usage,
            model,
            window,
            image_billing,
            breakdown,
        }
    }

    /// Render the full breakdown report as a terminal-ready string.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{} ({} context window)",
            self.model.display_name().yellow().bold(),
            self.window
        );
        let _ = writeln!(
            out,
            "Total daily cost: {}",
            self.breakdown.daily_total.to_formatted_string().green().bold()
        );
        let _ = writeln!(
            out,
            "Total monthly cost: {}",
            self.breakdown.monthly_total.to_formatted_string().green().bold()
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Detailed cost breakdown".bold());

        for (index, section) in self.sections().iter().enumerate() {
            let _ = writeln!(out);
            section.write_to(&mut out, index + 1);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Monthly summary".bold());
        for (label, cost) in [
            ("image input", self.breakdown.image_cost),
            ("video input", self.breakdown.video_cost),
            ("text input", self.breakdown.text_input_cost),
            ("audio input", self.breakdown.audio_cost),
            ("text output", self.breakdown.text_output_cost),
        ] {
            let _ = writeln!(out, "  - Monthly {} cost: {}", label, cost.monthly());
        }
        let _ = writeln!(
            out,
            "  - Total monthly cost: {}",
            self.breakdown.monthly_total.to_formatted_string().green().bold()
        );

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Rates from the Gemini API pricing page: {}",
            PRICING_PAGE_URL.cyan()
        );

        out
    }

    fn sections(&self) -> [ModalitySection; 5] {
        let (image_volume, image_unit_label) = match self.image_billing {
            ImageBillingMode::PerImage => {
                (self.usage.image_count_per_day, "Cost per image")
            }
            ImageBillingMode::PerApiCall => {
                (self.usage.api_calls_per_day, "Cost per API call")
            }
        };
        let input_kchars = self.usage.input_chars_per_day() as f64 / 1000.0;
        let output_kchars = self.usage.output_chars_per_day() as f64 / 1000.0;

        [
            ModalitySection {
                title: "Image input",
                daily_volume: format!("{} billed units", format_count(image_volume)),
                monthly_volume: format!(
                    "{} billed units",
                    format_count(image_volume.saturating_mul(30))
                ),
                unit_label: image_unit_label,
                unit_price: self.breakdown.image_cost.per_unit(image_volume as f64),
                daily_cost: self.breakdown.image_cost,
            },
            ModalitySection {
                title: "Video input",
                daily_volume: format_seconds(self.usage.video_seconds_per_day),
                monthly_volume: format_seconds(self.usage.video_seconds_per_day * 30.0),
                unit_label: "Cost per second of video",
                unit_price: self
                    .breakdown
                    .video_cost
                    .per_unit(self.usage.video_seconds_per_day),
                daily_cost: self.breakdown.video_cost,
            },
            ModalitySection {
                title: "Text input",
                daily_volume: format!(
                    "{} characters",
                    format_count(self.usage.input_chars_per_day())
                ),
                monthly_volume: format!(
                    "{} characters",
                    format_count(self.usage.input_chars_per_day().saturating_mul(30))
                ),
                unit_label: "Cost per 1k characters",
                unit_price: self.breakdown.text_input_cost.per_unit(input_kchars),
                daily_cost: self.breakdown.text_input_cost,
            },
            ModalitySection {
                title: "Audio input",
                daily_volume: format_seconds(self.usage.audio_seconds_per_day),
                monthly_volume: format_seconds(self.usage.audio_seconds_per_day * 30.0),
                unit_label: "Cost per second of audio",
                unit_price: self
                    .breakdown
                    .audio_cost
                    .per_unit(self.usage.audio_seconds_per_day),
                daily_cost: self.breakdown.audio_cost,
            },
            ModalitySection {
                title: "Text output",
                daily_volume: format!(
                    "{} characters",
                    format_count(self.usage.output_chars_per_day())
                ),
                monthly_volume: format!(
                    "{} characters",
                    format_count(self.usage.output_chars_per_day().saturating_mul(30))
                ),
                unit_label: "Cost per 1k characters",
                unit_price: self.breakdown.text_output_cost.per_unit(output_kchars),
                daily_cost: self.breakdown.text_output_cost,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::estimate;

    fn render_flash_report() -> String {
        let usage = UsageProfile {
            api_calls_per_day: 20000,
            avg_input_length: 2000,
            avg_output_length: 750,
            image_count_per_day: 1000,
            video_seconds_per_day: 0.0,
            audio_seconds_per_day: 0.0,
        };
        let breakdown = estimate(
            &usage,
            ModelTier::Gemini15Flash,
            ContextWindow::UpTo128K,
            ImageBillingMode::PerImage,
        );
        Report::new(
            &usage,
            ModelTier::Gemini15Flash,
            ContextWindow::UpTo128K,
            ImageBillingMode::PerImage,
            &breakdown,
        )
        .render()
    }

    #[test]
    fn test_report_contains_totals() {
        let report = render_flash_report();
        assert!(report.contains("Gemini 1.5 Flash"));
        assert!(report.contains("<= 128K"));
        // daily 1.895, monthly 56.85
        assert!(report.contains("$1.90"));
        assert!(report.contains("$56.85"));
    }

    #[test]
    fn test_report_lists_all_modalities() {
        let report = render_flash_report();
        for title in [
            "Image input",
            "Video input",
            "Text input",
            "Audio input",
            "Text output",
        ] {
            assert!(report.contains(title), "missing section: {title}");
        }
        assert!(report.contains(PRICING_PAGE_URL));
    }

    #[test]
    fn test_report_unit_prices() {
        let report = render_flash_report();
        // Cost per image: 0.02 / 1000
        assert!(report.contains("$0.000020"));
        // Cost per 1k input characters matches the table rate
        assert!(report.contains("$0.000019"));
        // Zero-volume modalities show a zero unit price, not a division fault
        assert!(report.contains("$0.000000"));
    }

    #[test]
    fn test_report_scales_volumes_monthly() {
        let report = render_flash_report();
        // 1000 images -> 30,000 per month
        assert!(report.contains("30,000 billed units"));
        // 40,000,000 input chars -> 1,200,000,000 per month
        assert!(report.contains("1,200,000,000 characters"));
    }

    #[test]
    fn test_report_handles_huge_volumes() {
        let usage = UsageProfile {
            api_calls_per_day: u64::MAX,
            avg_input_length: u64::MAX,
            avg_output_length: u64::MAX,
            image_count_per_day: u64::MAX,
            video_seconds_per_day: 0.0,
            audio_seconds_per_day: 0.0,
        };
        let window = ContextWindow::from_input_length(usage.avg_input_length);
        assert_eq!(window, ContextWindow::Over128K);
        let breakdown = estimate(
            &usage,
            ModelTier::Gemini15Flash,
            window,
            ImageBillingMode::PerImage,
        );
        // Saturating volume scaling, no wrap and no panic
        let report = Report::new(
            &usage,
            ModelTier::Gemini15Flash,
            window,
            ImageBillingMode::PerImage,
            &breakdown,
        )
        .render();
        assert!(report.contains("Text input"));
    }

    #[test]
    fn test_report_per_api_call_labels() {
        let usage = UsageProfile {
            api_calls_per_day: 100,
            ..UsageProfile::default()
        };
        let breakdown = estimate(
            &usage,
            ModelTier::Gemini10Pro,
            ContextWindow::UpTo128K,
            ImageBillingMode::PerApiCall,
        );
        let report = Report::new(
            &usage,
            ModelTier::Gemini10Pro,
            ContextWindow::UpTo128K,
            ImageBillingMode::PerApiCall,
            &breakdown,
        )
        .render();
        assert!(report.contains("Cost per API call"));
        assert!(report.contains("$0.002500"));
    }
}
