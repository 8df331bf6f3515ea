//! Shared types for the promotion console
//!
//! Data models exchanged between the wizard, the promotion repository and
//! the list/detail pages (via the stored JSON list).

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{PromotionId, PromotionRecord, PromotionView, WizardState};
