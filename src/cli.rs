use crate::error::{GemcostError, Result};
use crate::types::{
    ContextWindow, CostBreakdown, ImageBillingMode, ModelTier, UsageProfile, WindowSelection,
};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gemcost", version, about = "Gemini API cost approximator")]
pub struct Cli {
    /// Model tier: gemini-1.5-flash, gemini-1.5-pro or gemini-1.0-pro
    #[arg(short, long, default_value = "gemini-1.5-flash")]
    pub model: String,

    /// Average number of API calls per day
    #[arg(long, default_value_t = 20000)]
    pub api_calls: u64,

    /// Average input length per API call, in characters
    #[arg(long, default_value_t = 2000)]
    pub input_chars: u64,

    /// Average output length per API call, in characters
    #[arg(long, default_value_t = 750)]
    pub output_chars: u64,

    /// Total number of images processed per day
    #[arg(long, default_value_t = 1000)]
    pub images: u64,

    /// Total duration of video processed per day, in seconds
    #[arg(long, default_value_t = 0.0)]
    pub video_seconds: f64,

    /// Total duration of audio processed per day, in seconds (never billed on 1.0 Pro)
    #[arg(long, default_value_t = 0.0)]
    pub audio_seconds: f64,

    /// Read the usage profile as camelCase JSON from a file, or '-' for stdin
    /// (overrides the individual volume flags)
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Context window: auto (derive from input length), up-to-128k or over-128k
    #[arg(short = 'w', long, default_value = "auto")]
    pub context_window: String,

    /// Image billing convention: per-image or per-api-call
    #[arg(long, default_value = "per-image")]
    pub image_billing: String,

    /// Emit the estimate as JSON instead of the rendered report
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Collect the usage profile, either from the profile file/stdin or
    /// from the individual volume flags.
    pub fn usage_profile(&self) -> Result<UsageProfile> {
        let profile = match &self.profile {
            Some(path) => load_profile(path)?,
            None => UsageProfile {
                api_calls_per_day: self.api_calls,
                avg_input_length: self.input_chars,
                avg_output_length: self.output_chars,
                image_count_per_day: self.images,
                video_seconds_per_day: self.video_seconds,
                audio_seconds_per_day: self.audio_seconds,
            },
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn model_tier(&self) -> Result<ModelTier> {
        self.model.parse()
    }

    pub fn window_selection(&self) -> Result<WindowSelection> {
        self.context_window.parse()
    }

    pub fn billing_mode(&self) -> Result<ImageBillingMode> {
        self.image_billing.parse()
    }
}

fn load_profile(path: &Path) -> Result<UsageProfile> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(serde_json::from_str(&buffer)?)
    } else {
        let contents = fs::read_to_string(path).map_err(|source| GemcostError::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// The structured result for `--json` output: the resolved selections
/// alongside the breakdown, so the consumer sees which window and
/// billing convention actually applied.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateOutput {
    pub model: ModelTier,
    pub context_window: ContextWindow,
    pub image_billing: ImageBillingMode,
    pub usage: UsageProfile,
    pub breakdown: CostBreakdown,
}
