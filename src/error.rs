use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GemcostError {
    // Selector parsing errors
    #[error("Unknown model '{name}' (expected gemini-1.5-flash, gemini-1.5-pro or gemini-1.0-pro)")]
    UnknownModel { name: String },

    #[error("Unknown context window '{name}' (expected auto, up-to-128k or over-128k)")]
    UnknownContextWindow { name: String },

    #[error("Unknown image billing mode '{name}' (expected per-image or per-api-call)")]
    UnknownBillingMode { name: String },

    // Input validation
    #[error("Usage field '{field}' must be a finite, non-negative number, got {value}")]
    NegativeInput { field: &'static str, value: f64 },

    // Profile loading errors
    #[error("Failed to read usage profile: {path}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read usage profile from stdin")]
    StdinRead(#[from] std::io::Error),

    #[error("Failed to process JSON")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GemcostError>;
