use crate::constants::{CHARS_PER_TOKEN, CONTEXT_WINDOW_CHAR_THRESHOLD};
use crate::error::GemcostError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which side of the 128K-token pricing boundary a request falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ContextWindow {
    #[serde(rename = "up-to-128k")]
    UpTo128K,
    #[serde(rename = "over-128k")]
    Over128K,
}

impl ContextWindow {
    /// Derive the window from the average input length in characters,
    /// using the 4-characters-per-token heuristic. Saturates instead of
    /// wrapping, so absurdly large inputs land in the large window.
    pub fn from_input_length(avg_input_length: u64) -> Self {
        if avg_input_length.saturating_mul(CHARS_PER_TOKEN) <= CONTEXT_WINDOW_CHAR_THRESHOLD {
            ContextWindow::UpTo128K
        } else {
            ContextWindow::Over128K
        }
    }
}

impl fmt::Display for ContextWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextWindow::UpTo128K => write!(f, "<= 128K"),
            ContextWindow::Over128K => write!(f, "> 128K"),
        }
    }
}

/// CLI-facing window selection: an explicit window, or derive it from
/// the input length. The original tool auto-derived, so that is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowSelection {
    #[default]
    Auto,
    Explicit(ContextWindow),
}

impl WindowSelection {
    /// Resolve to a concrete window for the given average input length.
    pub fn resolve(&self, avg_input_length: u64) -> ContextWindow {
        match self {
            WindowSelection::Auto => ContextWindow::from_input_length(avg_input_length),
            WindowSelection::Explicit(window) => *window,
        }
    }
}

impl FromStr for WindowSelection {
    type Err = GemcostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(WindowSelection::Auto),
            "up-to-128k" | "<=128k" => Ok(WindowSelection::Explicit(ContextWindow::UpTo128K)),
            "over-128k" | ">128k" => Ok(WindowSelection::Explicit(ContextWindow::Over128K)),
            _ => Err(GemcostError::UnknownContextWindow { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_derivation() {
        // 100000 chars -> 400000 <= 512000
        assert_eq!(
            ContextWindow::from_input_length(100_000),
            ContextWindow::UpTo128K
        );
        // 200000 chars -> 800000 > 512000
        assert_eq!(
            ContextWindow::from_input_length(200_000),
            ContextWindow::Over128K
        );
    }

    #[test]
    fn test_window_derivation_boundary() {
        // 128000 * 4 == 512000 is still inside the window
        assert_eq!(
            ContextWindow::from_input_length(128_000),
            ContextWindow::UpTo128K
        );
        assert_eq!(
            ContextWindow::from_input_length(128_001),
            ContextWindow::Over128K
        );
        assert_eq!(ContextWindow::from_input_length(0), ContextWindow::UpTo128K);
    }

    #[test]
    fn test_window_derivation_saturates_on_huge_input() {
        // A wrapped multiply would land these back in the small window
        assert_eq!(
            ContextWindow::from_input_length(u64::MAX),
            ContextWindow::Over128K
        );
        assert_eq!(
            ContextWindow::from_input_length(1 << 62),
            ContextWindow::Over128K
        );
    }

    #[test]
    fn test_window_selection_resolve() {
        assert_eq!(
            WindowSelection::Auto.resolve(200_000),
            ContextWindow::Over128K
        );
        assert_eq!(
            WindowSelection::Explicit(ContextWindow::UpTo128K).resolve(200_000),
            ContextWindow::UpTo128K
        );
    }

    #[test]
    fn test_window_selection_from_str() {
        assert_eq!(
            "auto".parse::<WindowSelection>().unwrap(),
            WindowSelection::Auto
        );
        assert_eq!(
            "up-to-128k".parse::<WindowSelection>().unwrap(),
            WindowSelection::Explicit(ContextWindow::UpTo128K)
        );
        assert_eq!(
            "over-128k".parse::<WindowSelection>().unwrap(),
            WindowSelection::Explicit(ContextWindow::Over128K)
        );
        assert!("128k-or-bust".parse::<WindowSelection>().is_err());
    }

    #[test]
    fn test_window_display() {
        assert_eq!(ContextWindow::UpTo128K.to_string(), "<= 128K");
        assert_eq!(ContextWindow::Over128K.to_string(), "> 128K");
    }
}
