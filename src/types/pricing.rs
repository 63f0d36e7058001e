use super::context_window::ContextWindow;
use super::model::ModelTier;
use crate::error::GemcostError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which daily volume multiplies the image rate.
///
/// The upstream pricing material is inconsistent here: one variant
/// bills per distinct image processed, the other per API call. This is
/// a deployment-level configuration axis, defaulting to per-image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageBillingMode {
    #[default]
    PerImage,
    PerApiCall,
}

impl fmt::Display for ImageBillingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageBillingMode::PerImage => write!(f, "per-image"),
            ImageBillingMode::PerApiCall => write!(f, "per-api-call"),
        }
    }
}

impl FromStr for ImageBillingMode {
    type Err = GemcostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per-image" => Ok(ImageBillingMode::PerImage),
            "per-api-call" | "per-call" => Ok(ImageBillingMode::PerApiCall),
            _ => Err(GemcostError::UnknownBillingMode { name: s.to_string() }),
        }
    }
}

/// The five per-unit dollar rates for one (model, context window) pair.
///
/// Text rates are per 1000 characters, video and audio per second of
/// media, image per billed unit (see [`ImageBillingMode`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSet {
    pub image: f64,
    pub video_per_second: f64,
    pub text_input_per_1k_chars: f64,
    pub audio_per_second: f64,
    pub text_output_per_1k_chars: f64,
}

impl RateSet {
    /// Rate table lookup. Gemini 1.0 Pro has a single rate set, so the
    /// window is ignored for it; it also has no audio pricing at all.
    pub fn lookup(tier: ModelTier, window: ContextWindow) -> Self {
        match (tier, window) {
            (ModelTier::Gemini15Flash, ContextWindow::UpTo128K) => RateSet {
                image: 0.00002,
                video_per_second: 0.00002,
                text_input_per_1k_chars: 0.00001875,
                audio_per_second: 0.000002,
                text_output_per_1k_chars: 0.000075,
            },
            (ModelTier::Gemini15Flash, ContextWindow::Over128K) => RateSet {
                image: 0.00004,
                video_per_second: 0.00004,
                text_input_per_1k_chars: 0.0000375,
                audio_per_second: 0.000004,
                text_output_per_1k_chars: 0.00015,
            },
            (ModelTier::Gemini15Pro, ContextWindow::UpTo128K) => RateSet {
                image: 0.00032875,
                video_per_second: 0.00032875,
                text_input_per_1k_chars: 0.0003125,
                audio_per_second: 0.00003125,
                text_output_per_1k_chars: 0.00125,
            },
            (ModelTier::Gemini15Pro, ContextWindow::Over128K) => RateSet {
                image: 0.0006575,
                video_per_second: 0.0006575,
                text_input_per_1k_chars: 0.0000625,
                audio_per_second: 0.000625,
                text_output_per_1k_chars: 0.0025,
            },
            (ModelTier::Gemini10Pro, _) => RateSet {
                image: 0.0025,
                video_per_second: 0.002,
                text_input_per_1k_chars: 0.000125,
                audio_per_second: 0.0,
                text_output_per_1k_chars: 0.000375,
            },
        }
    }
}

impl From<(ModelTier, ContextWindow)> for RateSet {
    fn from((tier, window): (ModelTier, ContextWindow)) -> Self {
        RateSet::lookup(tier, window)
    }
}
