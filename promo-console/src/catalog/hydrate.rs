//! Detail-view hydration
//!
//! Stored records written by older console versions miss most display
//! fields. Hydration overlays the record onto fixed defaults so the detail
//! page never sees a missing segment, rule or reward description.

use shared::models::{PromotionRecord, PromotionView};

use super::seeds::{SAMPLE_PROMOTION_ID, sample_promotion};

pub const DEFAULT_SEGMENT: &str = "Sportsbook Players";
pub const DEFAULT_RULES: &str = "Min 6 Selections, 1 Loss, Stake > 5 ETB";
pub const DEFAULT_REWARD: &str = "100% - 200% Stake Back (Capped at 100k)";
pub const DEFAULT_MARKET: &str = "ET";
pub const DEFAULT_PERIOD: &str = "Active";

/// Overlay `record` onto the detail defaults; record fields win.
pub fn overlay(record: &PromotionRecord) -> PromotionView {
    let record = record.clone();
    PromotionView {
        id: record.id,
        name: record.name,
        promotion_type: record.promotion_type,
        status: record.status,
        market: record.market.unwrap_or_else(|| DEFAULT_MARKET.to_string()),
        segment: record.segment.unwrap_or_else(|| DEFAULT_SEGMENT.to_string()),
        stats: record.stats.unwrap_or_default(),
        period: record.period.unwrap_or_else(|| DEFAULT_PERIOD.to_string()),
        rules: record.rules.unwrap_or_else(|| DEFAULT_RULES.to_string()),
        reward: record.reward.unwrap_or_else(|| DEFAULT_REWARD.to_string()),
        engagement: record.engagement,
        banner_image: record.banner_image,
        terms_and_conditions: record.terms_and_conditions,
    }
}

/// Build the detail view for a looked-up record.
///
/// Without a record, only the built-in sample id resolves; any other id
/// yields `None` and the caller renders its loading/empty state.
pub fn hydrate(record: Option<&PromotionRecord>, fallback_id: &str) -> Option<PromotionView> {
    match record {
        Some(record) => Some(overlay(record)),
        None if fallback_id == SAMPLE_PROMOTION_ID => Some(overlay(&sample_promotion())),
        None => {
            tracing::debug!(id = fallback_id, "No stored promotion and no built-in sample");
            None
        }
    }
}
