use crate::error::GemcostError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The Gemini model tiers with published pricing.
///
/// A closed enum instead of free-form model strings, so an unpriced
/// tier cannot slip through a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ModelTier {
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,
    #[serde(rename = "gemini-1.5-pro")]
    Gemini15Pro,
    #[serde(rename = "gemini-1.0-pro")]
    Gemini10Pro,
}

impl ModelTier {
    /// All tiers, in the order the original form listed them.
    pub const ALL: [ModelTier; 3] = [
        ModelTier::Gemini15Flash,
        ModelTier::Gemini15Pro,
        ModelTier::Gemini10Pro,
    ];

    /// Human-readable name, as shown in the report header.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelTier::Gemini15Flash => "Gemini 1.5 Flash",
            ModelTier::Gemini15Pro => "Gemini 1.5 Pro",
            ModelTier::Gemini10Pro => "Gemini 1.0 Pro",
        }
    }

}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ModelTier {
    type Err = GemcostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini-1.5-flash" | "1.5-flash" | "flash" => Ok(ModelTier::Gemini15Flash),
            "gemini-1.5-pro" | "1.5-pro" | "pro" => Ok(ModelTier::Gemini15Pro),
            "gemini-1.0-pro" | "1.0-pro" => Ok(ModelTier::Gemini10Pro),
            _ => Err(GemcostError::UnknownModel { name: s.to_string() }),
        }
    }
}
