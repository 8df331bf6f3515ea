//! Promotion list and detail views

pub mod hydrate;
pub mod listing;
pub mod seeds;

pub use hydrate::{hydrate, overlay};
pub use listing::{StatusFilter, normalize, with_missing_seeds};
pub use seeds::{SAMPLE_PROMOTION_ID, sample_promotion, seed_promotions};
