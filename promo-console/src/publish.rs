//! Publish a finished draft
//!
//! The draft is flattened into a [`PromotionRecord`] (the denormalized shape
//! the list/detail pages read), checked, and prepended to the repository.

use shared::models::{PromotionId, PromotionRecord, PromotionStats, WizardState};
use shared::util::now_millis;

use crate::core::PublishResult;
use crate::storage::{KeyValueStore, PromotionRepository};
use crate::utils::validation::validate_record;
use crate::wizard::WizardSession;

pub const UNTITLED_PROMOTION: &str = "Untitled Promotion";
pub const DEFAULT_PUBLISH_MARKET: &str = "KE";
pub const PUBLISHED_STATUS: &str = "Active";

/// Flatten a draft into a record with the given id
pub fn project(state: &WizardState, id: PromotionId) -> PromotionRecord {
    let name = match state.basics.name.trim() {
        "" => UNTITLED_PROMOTION.to_string(),
        name => name.to_string(),
    };

    let market = state
        .eligibility
        .markets
        .first()
        .map(|m| m.to_uppercase())
        .unwrap_or_else(|| DEFAULT_PUBLISH_MARKET.to_string());

    let start = state
        .schedule
        .start_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Immediate".to_string());
    let end = state
        .schedule
        .end_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "Ongoing".to_string());

    let terms = &state.display.terms_and_conditions;

    PromotionRecord {
        market: Some(market),
        segment: Some(state.eligibility.segment.clone()),
        stats: Some(PromotionStats::default()),
        period: Some(format!("{start} - {end}")),
        rules: Some(format!("Min {} Triggers", state.eligibility.triggers.len())),
        reward: Some(format!(
            "{} - {}",
            state.rewards.reward_type.as_str(),
            state.rewards.calc_type.as_str()
        )),
        engagement: Some("0%".to_string()),
        banner_image: state.display.banner_image.clone(),
        terms_and_conditions: (!terms.trim().is_empty()).then(|| terms.clone()),
        ..PromotionRecord::new(
            id,
            name,
            state.basics.promotion_type.label(),
            PUBLISHED_STATUS,
        )
    }
}

/// Project the session's draft, validate it and prepend it to the repository
pub fn publish<S: KeyValueStore>(
    session: &WizardSession,
    repository: &PromotionRepository<S>,
) -> PublishResult<PromotionRecord> {
    let record = project(session.state(), PromotionId::Number(now_millis()));
    validate_record(&record)?;

    repository.append(record.clone())?;
    tracing::info!(
        id = %record.id,
        name = %record.name,
        promotion_type = %record.promotion_type,
        period = record.period.as_deref().unwrap_or_default(),
        banner = record.banner_image.is_some(),
        "Promotion published"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PublishError;
    use crate::storage::RedbStore;
    use crate::utils::validation::MAX_NAME_LEN;
    use chrono::NaiveDate;
    use shared::models::{
        BasicsUpdate, CalcType, DisplayUpdate, EligibilityUpdate, PromotionType, RewardsUpdate,
        ScheduleUpdate, Trigger,
    };

    #[test]
    fn test_project_default_draft() {
        let record = project(&WizardState::default(), PromotionId::Number(42));
        assert_eq!(record.id, PromotionId::Number(42));
        assert_eq!(record.name, "Cashia Launch Cashback");
        assert_eq!(record.promotion_type, "Cashback");
        assert_eq!(record.status, "Active");
        assert_eq!(record.market.as_deref(), Some("KE"));
        assert_eq!(record.segment.as_deref(), Some("all"));
        assert_eq!(record.period.as_deref(), Some("Immediate - Ongoing"));
        assert_eq!(record.rules.as_deref(), Some("Min 0 Triggers"));
        assert_eq!(record.reward.as_deref(), Some("cashback - tiered"));
        assert_eq!(record.engagement.as_deref(), Some("0%"));
        assert_eq!(record.terms_and_conditions, None);
    }

    #[test]
    fn test_project_uses_edited_sections() {
        let mut session = WizardSession::new();
        session.update_basics(BasicsUpdate {
            name: Some("   ".into()),
            promotion_type: Some(PromotionType::Spins),
            ..Default::default()
        });
        session.update_eligibility(EligibilityUpdate {
            markets: Some(vec!["et".into(), "ke".into()]),
            triggers: Some(vec![
                Trigger {
                    id: "t-1".into(),
                    event_id: "deposit".into(),
                    rules: vec![],
                },
                Trigger {
                    id: "t-2".into(),
                    event_id: "bet_settled".into(),
                    rules: vec![],
                },
            ]),
            ..Default::default()
        });
        session.update_rewards(RewardsUpdate {
            reward_type: Some(PromotionType::Spins),
            calc_type: Some(CalcType::Simple),
            ..Default::default()
        });
        session.update_schedule(ScheduleUpdate {
            start_date: Some(NaiveDate::from_ymd_opt(2024, 2, 1)),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 2, 28)),
            ..Default::default()
        });
        session.update_display(DisplayUpdate {
            banner_image: Some(Some("data:image/png;base64,AAAA".into())),
            terms_and_conditions: Some("18+ only.".into()),
            ..Default::default()
        });

        let record = project(session.state(), PromotionId::Number(1));
        assert_eq!(record.name, UNTITLED_PROMOTION);
        assert_eq!(record.promotion_type, "Free Spins");
        assert_eq!(record.market.as_deref(), Some("ET"));
        assert_eq!(record.period.as_deref(), Some("2024-02-01 - 2024-02-28"));
        assert_eq!(record.rules.as_deref(), Some("Min 2 Triggers"));
        assert_eq!(record.reward.as_deref(), Some("spins - simple"));
        assert!(record.banner_image.is_some());
        assert_eq!(record.terms_and_conditions.as_deref(), Some("18+ only."));
    }

    #[test]
    fn test_no_markets_falls_back() {
        let mut state = WizardState::default();
        state.eligibility.markets.clear();
        let record = project(&state, PromotionId::Number(1));
        assert_eq!(record.market.as_deref(), Some(DEFAULT_PUBLISH_MARKET));
    }

    #[test]
    fn test_publish_prepends_to_repository() {
        let repository = PromotionRepository::new(RedbStore::open_in_memory().unwrap());
        repository
            .append(PromotionRecord::new("PRM-2024-002", "Older", "Bonus", "active"))
            .unwrap();

        let session = WizardSession::new();
        let record = publish(&session, &repository).unwrap();

        let listed = repository.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], record);
        assert!(matches!(record.id, PromotionId::Number(_)));
        assert!(repository.find(&record.id.to_string()).is_some());
    }

    #[test]
    fn test_publish_rejects_overlong_name() {
        let repository = PromotionRepository::new(RedbStore::open_in_memory().unwrap());
        repository
            .append(PromotionRecord::new("PRM-2024-002", "Older", "Bonus", "active"))
            .unwrap();

        let mut session = WizardSession::new();
        session.update_basics(BasicsUpdate {
            name: Some("x".repeat(MAX_NAME_LEN + 1)),
            ..Default::default()
        });

        let result = publish(&session, &repository);
        assert!(matches!(result, Err(PublishError::Validation(_))));
        assert_eq!(repository.list().len(), 1);
    }
}
