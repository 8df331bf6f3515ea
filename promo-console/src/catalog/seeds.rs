//! Built-in demo promotions

use shared::models::{PromotionRecord, PromotionStats};

/// Id of the demo promotion the detail page can show without storage
pub const SAMPLE_PROMOTION_ID: &str = "PRM-2024-001";

fn stats(claims: u64, cost: &str, conversion: &str) -> Option<PromotionStats> {
    Some(PromotionStats {
        claims,
        cost: cost.to_string(),
        conversion: conversion.to_string(),
    })
}

/// Built-in sample returned by the hydrator for [`SAMPLE_PROMOTION_ID`]
pub fn sample_promotion() -> PromotionRecord {
    PromotionRecord {
        market: Some("ET".to_string()),
        segment: Some("Sportsbook Players".to_string()),
        rules: Some("Min 6 Selections, 1 Loss, Stake > 5 ETB".to_string()),
        reward: Some("100% - 200% Stake Back (Capped at 100k)".to_string()),
        period: Some("Feb 1 - Ongoing".to_string()),
        ..PromotionRecord::new(SAMPLE_PROMOTION_ID, "Ethiopia Acca Insurance", "Cashback", "active")
    }
}

/// Promotions written to an empty repository
pub fn seed_promotions() -> Vec<PromotionRecord> {
    vec![
        PromotionRecord {
            segment: Some("Sportsbook Players".to_string()),
            stats: stats(1240, "ETB 124,000", "12%"),
            period: Some("Feb 1 - Ongoing".to_string()),
            ..PromotionRecord::new(SAMPLE_PROMOTION_ID, "Ethiopia Acca Insurance", "Cashback", "active")
        },
        PromotionRecord {
            segment: Some("New Users".to_string()),
            stats: stats(342, "€3,400", "15%"),
            period: Some("Feb 1 - Feb 28".to_string()),
            ..PromotionRecord::new("PRM-2024-002", "Cashia Launch Cashback", "Deposit Match", "active")
        },
        PromotionRecord {
            segment: Some("New Users".to_string()),
            stats: stats(850, "€8,500", "8%"),
            period: Some("Mar 1 - Mar 31".to_string()),
            ..PromotionRecord::new(
                "PRM-2024-003",
                "Super League Welcome Bonus",
                "Deposit Match",
                "paused",
            )
        },
    ]
}
