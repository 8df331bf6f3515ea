//! Published Promotion Models
//!
//! `PromotionRecord` is one element of the stored promotion list. Only `id`,
//! `name`, `type` and `status` are guaranteed; older records written by
//! earlier console versions miss the rest. `PromotionView` is the fully
//! populated shape the detail page renders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Promotion identifier
///
/// Records published by the wizard carry a millisecond timestamp; seeded and
/// imported records carry text ids such as `PRM-2024-001`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum PromotionId {
    Number(i64),
    Text(String),
}

impl PromotionId {
    /// Compare against an id given as text (route parameter, CLI argument)
    pub fn matches(&self, other: &str) -> bool {
        match self {
            Self::Number(n) => n.to_string() == other,
            Self::Text(s) => s == other,
        }
    }
}

impl fmt::Display for PromotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PromotionId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for PromotionId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Engagement stats shown on list and detail pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PromotionStats {
    pub claims: u64,
    /// Display text including currency, e.g. "ETB 124,000"
    pub cost: String,
    /// Display text, e.g. "12%"
    pub conversion: String,
}

impl Default for PromotionStats {
    fn default() -> Self {
        Self {
            claims: 0,
            cost: "-".to_string(),
            conversion: "-".to_string(),
        }
    }
}

/// Stored promotion (flattened projection of a published draft)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRecord {
    pub id: PromotionId,
    pub name: String,
    /// Display label ("Cashback", "Deposit Match", ...)
    #[serde(rename = "type")]
    pub promotion_type: String,
    /// Free text; casing varies between writers ("active", "Active")
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PromotionStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<String>,
    /// Legacy flat claim count written by the first dashboard version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions: Option<String>,
}

impl PromotionRecord {
    /// Minimal record with only the guaranteed fields set
    pub fn new(
        id: impl Into<PromotionId>,
        name: impl Into<String>,
        promotion_type: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            promotion_type: promotion_type.into(),
            status: status.into(),
            market: None,
            segment: None,
            stats: None,
            period: None,
            rules: None,
            reward: None,
            engagement: None,
            claims: None,
            banner_image: None,
            terms_and_conditions: None,
        }
    }

    /// Claim count, preferring the legacy flat field over `stats`
    pub fn claim_count(&self) -> u64 {
        self.claims
            .or_else(|| self.stats.as_ref().map(|s| s.claims))
            .unwrap_or(0)
    }
}

/// Fully populated detail view model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromotionView {
    pub id: PromotionId,
    pub name: String,
    #[serde(rename = "type")]
    pub promotion_type: String,
    pub status: String,
    pub market: String,
    pub segment: String,
    pub stats: PromotionStats,
    pub period: String,
    pub rules: String,
    pub reward: String,
    pub engagement: Option<String>,
    pub banner_image: Option<String>,
    pub terms_and_conditions: Option<String>,
}
