pub mod context_window;
pub mod cost;
pub mod model;
pub mod pricing;
pub mod usage;

pub use context_window::{ContextWindow, WindowSelection};
pub use cost::{Cost, CostBreakdown};
pub use model::ModelTier;
pub use pricing::{ImageBillingMode, RateSet};
pub use usage::UsageProfile;
