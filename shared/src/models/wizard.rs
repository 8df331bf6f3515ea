//! Promotion Wizard Draft Model
//!
//! `WizardState` is the aggregate draft built by the create-promotion wizard.
//! It has five sections, each always fully shaped; the `*Update` payloads are
//! the partial forms accepted by the section-scoped update operations.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::util::deserialize_some;

/// Promotion / reward type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromotionType {
    #[default]
    Cashback,
    Bonus,
    Spins,
    Physical,
}

impl PromotionType {
    /// Human-readable label used on published records
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cashback => "Cashback",
            Self::Bonus => "Bonus",
            Self::Spins => "Free Spins",
            Self::Physical => "Physical",
        }
    }

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cashback => "cashback",
            Self::Bonus => "bonus",
            Self::Spins => "spins",
            Self::Physical => "physical",
        }
    }
}

/// Reward calculation mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalcType {
    Simple,
    #[default]
    Tiered,
}

impl CalcType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Tiered => "tiered",
        }
    }
}

/// When the reward is credited
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CreditTiming {
    #[default]
    Instant,
    Delayed,
}

/// Axis a reward tier is keyed on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKey {
    #[default]
    Week,
    Selections,
    Stake,
}

/// Recurrence frequency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

/// Tab shown on the display step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTab {
    #[default]
    Display,
    Communication,
}

// ========== Eligibility ==========

/// Leaf predicate on an event parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    pub id: i64,
    pub param: String,
    pub operator: String,
    pub value: String,
    /// Parameter value type (number / boolean / select / text)
    #[serde(rename = "type")]
    pub rule_type: String,
}

/// Eligibility trigger: an event type plus its rules
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub id: String,
    pub event_id: String,
    pub rules: Vec<Rule>,
}

// ========== Rewards ==========

/// One reward bracket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TierRule {
    pub id: i64,
    pub dimension_key: DimensionKey,
    pub dimension_value: String,
    pub segment: String,
    pub percentage: String,
    /// Unit-less cap; may be a label such as "Varies"
    pub cap: String,
}

impl TierRule {
    fn week(id: i64, week: &str, segment: &str, percentage: &str, cap: &str) -> Self {
        Self {
            id,
            dimension_key: DimensionKey::Week,
            dimension_value: week.to_string(),
            segment: segment.to_string(),
            percentage: percentage.to_string(),
            cap: cap.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimpleConfig {
    pub percentage: String,
    pub cap: String,
}

// ========== Schedule ==========

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recurrence {
    pub frequency: Frequency,
    pub days: Vec<Weekday>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub total_claims: String,
    pub per_player: String,
    pub budget: Option<String>,
}

// ========== Display ==========

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub sms_enabled: bool,
    pub push_enabled: bool,
    /// May contain `{{placeholder}}` tokens, kept verbatim
    pub sms_template: String,
}

impl Communication {
    /// Placeholder names in the SMS template, in order of appearance.
    ///
    /// `"Hi {{player_name}}, {{amount}} credited"` yields
    /// `["player_name", "amount"]`. Unterminated tokens are ignored.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut found = Vec::new();
        let mut rest = self.sms_template.as_str();
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                break;
            };
            let name = after[..end].trim();
            if !name.is_empty() {
                found.push(name);
            }
            rest = &after[end + 2..];
        }
        found
    }
}

// ========== Sections ==========

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Basics {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub promotion_type: PromotionType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub markets: Vec<String>,
    pub channels: Vec<String>,
    pub segment: String,
    pub custom_segments: Vec<String>,
    pub triggers: Vec<Trigger>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rewards {
    #[serde(rename = "type")]
    pub reward_type: PromotionType,
    pub calc_type: CalcType,
    pub matrix_dimension: String,
    pub tiers: Vec<TierRule>,
    pub simple_config: SimpleConfig,
    /// Wagering requirement multiplier (x35)
    pub wagering: u32,
    pub credit_timing: CreditTiming,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_recurring: bool,
    pub recurrence: Recurrence,
    pub limits: Limits,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Display {
    pub active_tab: DisplayTab,
    pub title: String,
    pub teaser: String,
    pub banner_image: Option<String>,
    pub terms_and_conditions: String,
    pub badges: Vec<String>,
    pub communication: Communication,
}

/// Aggregate promotion draft
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WizardState {
    pub basics: Basics,
    pub eligibility: Eligibility,
    pub rewards: Rewards,
    pub schedule: Schedule,
    pub display: Display,
}

/// Default SMS sent when a cashback is credited
pub const DEFAULT_SMS_TEMPLATE: &str = "Congratulations! Kshs {{amount}} cashback credited for {{week}} via Cashia. Check your Wallet. Deposit Kshs 50+ to stay eligible for next week. T&Cs apply.";

impl Default for WizardState {
    fn default() -> Self {
        Self {
            basics: Basics {
                name: "Cashia Launch Cashback".to_string(),
                description: String::new(),
                promotion_type: PromotionType::Cashback,
            },
            eligibility: Eligibility {
                markets: vec!["ke".to_string()],
                channels: vec!["mobile".to_string(), "app".to_string()],
                segment: "all".to_string(),
                custom_segments: Vec::new(),
                triggers: Vec::new(),
            },
            rewards: Rewards {
                reward_type: PromotionType::Cashback,
                calc_type: CalcType::Tiered,
                matrix_dimension: "week".to_string(),
                tiers: vec![
                    TierRule::week(1, "Week 1", "Low Value (50-200)", "30", "60"),
                    TierRule::week(2, "Week 1", "Lower Mid", "30", "100"),
                    TierRule::week(3, "Week 1", "Higher Mid", "30", "200"),
                    TierRule::week(4, "Week 1", "High Value", "30", "400"),
                    TierRule::week(5, "Week 2", "All Segments", "20", "Varies"),
                ],
                simple_config: SimpleConfig {
                    percentage: "100".to_string(),
                    cap: "500".to_string(),
                },
                wagering: 35,
                credit_timing: CreditTiming::Instant,
            },
            schedule: Schedule {
                start_date: None,
                end_date: None,
                is_recurring: false,
                recurrence: Recurrence {
                    frequency: Frequency::Weekly,
                    days: Vec::new(),
                },
                limits: Limits {
                    total_claims: String::new(),
                    per_player: "1".to_string(),
                    budget: None,
                },
            },
            display: Display {
                active_tab: DisplayTab::Display,
                title: "Cashia Launch Cashback".to_string(),
                teaser: "Get up to 30% weekly cashback on your deposits with Cashia!".to_string(),
                banner_image: None,
                terms_and_conditions: String::new(),
                badges: vec!["NEW".to_string()],
                communication: Communication {
                    sms_enabled: true,
                    push_enabled: false,
                    sms_template: DEFAULT_SMS_TEMPLATE.to_string(),
                },
            },
        }
    }
}

// ========== Update payloads ==========
//
// Absent fields are left untouched by the merge. Fields that are optional in
// the section use `Option<Option<T>>`: absent = keep, `null` = clear.

/// Partial basics update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasicsUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub promotion_type: Option<PromotionType>,
}

/// Partial eligibility update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityUpdate {
    pub markets: Option<Vec<String>>,
    pub channels: Option<Vec<String>>,
    pub segment: Option<String>,
    pub custom_segments: Option<Vec<String>>,
    pub triggers: Option<Vec<Trigger>>,
}

/// Partial rewards update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RewardsUpdate {
    #[serde(rename = "type")]
    pub reward_type: Option<PromotionType>,
    pub calc_type: Option<CalcType>,
    pub matrix_dimension: Option<String>,
    pub tiers: Option<Vec<TierRule>>,
    pub simple_config: Option<SimpleConfig>,
    pub wagering: Option<u32>,
    pub credit_timing: Option<CreditTiming>,
}

/// Partial schedule update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub end_date: Option<Option<NaiveDate>>,
    pub is_recurring: Option<bool>,
    pub recurrence: Option<Recurrence>,
    pub limits: Option<Limits>,
}

/// Partial display update
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayUpdate {
    pub active_tab: Option<DisplayTab>,
    pub title: Option<String>,
    pub teaser: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub banner_image: Option<Option<String>>,
    pub terms_and_conditions: Option<String>,
    pub badges: Option<Vec<String>>,
    pub communication: Option<Communication>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_shape() {
        let state = WizardState::default();
        assert_eq!(state.basics.name, "Cashia Launch Cashback");
        assert_eq!(state.rewards.tiers.len(), 5);
        assert_eq!(state.rewards.tiers[4].cap, "Varies");
        assert_eq!(state.rewards.wagering, 35);
        assert_eq!(state.schedule.limits.per_player, "1");
        assert_eq!(state.display.badges, vec!["NEW"]);
    }

    #[test]
    fn test_camel_case_json() {
        let json = serde_json::to_value(WizardState::default()).unwrap();
        assert_eq!(json["basics"]["type"], "cashback");
        assert_eq!(json["eligibility"]["customSegments"], serde_json::json!([]));
        assert_eq!(json["rewards"]["calcType"], "tiered");
        assert_eq!(json["rewards"]["tiers"][0]["dimensionKey"], "week");
        assert_eq!(json["schedule"]["recurrence"]["frequency"], "Weekly");
        assert_eq!(json["display"]["communication"]["smsEnabled"], true);
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let absent: DisplayUpdate = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert_eq!(absent.banner_image, None);

        let cleared: DisplayUpdate = serde_json::from_str(r#"{"bannerImage":null}"#).unwrap();
        assert_eq!(cleared.banner_image, Some(None));

        let set: ScheduleUpdate = serde_json::from_str(r#"{"startDate":"2024-02-01"}"#).unwrap();
        assert_eq!(set.start_date, Some(NaiveDate::from_ymd_opt(2024, 2, 1)));
    }

    #[test]
    fn test_placeholders_in_order() {
        let comm = Communication {
            sms_enabled: true,
            push_enabled: false,
            sms_template: "Hi {{player_name}}, {{ amount }} credited. {{broken".to_string(),
        };
        assert_eq!(comm.placeholders(), vec!["player_name", "amount"]);
    }

    #[test]
    fn test_default_template_placeholders() {
        let state = WizardState::default();
        assert_eq!(
            state.display.communication.placeholders(),
            vec!["amount", "week"]
        );
    }
}
