/// Days in a billing month, as the upstream calculator defines it.
/// Monthly figures are always the daily figure times this constant.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Rough characters-per-token ratio for English text, used to map an
/// average input length in characters onto the token-denominated
/// context-window boundary.
pub const CHARS_PER_TOKEN: u64 = 4;

/// Character-count boundary between the two pricing windows
/// (128K tokens at the 4-chars/token heuristic).
pub const CONTEXT_WINDOW_CHAR_THRESHOLD: u64 = 512_000;

/// Upstream pricing reference, shown at the end of the report.
pub const PRICING_PAGE_URL: &str = "https://cloud.google.com/vertex-ai/generative-ai/pricing";
