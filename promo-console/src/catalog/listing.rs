//! List page helpers: seed merging, normalization and status filtering

use std::collections::HashSet;
use std::str::FromStr;

use shared::models::PromotionRecord;

use super::seeds::seed_promotions;

pub const LIST_DEFAULT_SEGMENT: &str = "All Players";
pub const LIST_DEFAULT_PERIOD: &str = "Scheduled";

/// Fill the fields the list page always shows
pub fn normalize(mut record: PromotionRecord) -> PromotionRecord {
    if record.stats.is_none() {
        record.stats = Some(Default::default());
    }
    if record.segment.is_none() {
        record.segment = Some(LIST_DEFAULT_SEGMENT.to_string());
    }
    if record.period.is_none() {
        record.period = Some(LIST_DEFAULT_PERIOD.to_string());
    }
    record
}

/// Stored promotions followed by any seed whose name is not already stored
pub fn with_missing_seeds(saved: Vec<PromotionRecord>) -> Vec<PromotionRecord> {
    let names: HashSet<String> = saved.iter().map(|p| p.name.clone()).collect();
    let missing = seed_promotions()
        .into_iter()
        .filter(|seed| !names.contains(&seed.name));
    saved.into_iter().chain(missing).collect()
}

/// List page status filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Lower-cased status text
    Status(String),
}

impl StatusFilter {
    pub fn matches(&self, record: &PromotionRecord) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => record.status.to_lowercase() == *status,
        }
    }

    pub fn apply(&self, records: Vec<PromotionRecord>) -> Vec<PromotionRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s.is_empty() || s == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Status(s))
        }
    }
}
