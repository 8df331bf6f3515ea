//! Section merge
//!
//! One level deep: a present key replaces the section field, an absent key
//! keeps it. Nested objects (`recurrence`, `limits`, `simpleConfig`,
//! `communication`) are replaced wholesale, never merged field by field.

use shared::models::{
    Basics, BasicsUpdate, Display, DisplayUpdate, Eligibility, EligibilityUpdate, Rewards,
    RewardsUpdate, Schedule, ScheduleUpdate,
};

/// A wizard section that accepts a partial update
pub trait SectionMerge {
    type Update;

    fn merge(&mut self, update: Self::Update);
}

/// Replace `slot` if the update carries a value
fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

impl SectionMerge for Basics {
    type Update = BasicsUpdate;

    fn merge(&mut self, update: BasicsUpdate) {
        set(&mut self.name, update.name);
        set(&mut self.description, update.description);
        set(&mut self.promotion_type, update.promotion_type);
    }
}

impl SectionMerge for Eligibility {
    type Update = EligibilityUpdate;

    fn merge(&mut self, update: EligibilityUpdate) {
        set(&mut self.markets, update.markets);
        set(&mut self.channels, update.channels);
        set(&mut self.segment, update.segment);
        set(&mut self.custom_segments, update.custom_segments);
        set(&mut self.triggers, update.triggers);
    }
}

impl SectionMerge for Rewards {
    type Update = RewardsUpdate;

    fn merge(&mut self, update: RewardsUpdate) {
        set(&mut self.reward_type, update.reward_type);
        set(&mut self.calc_type, update.calc_type);
        set(&mut self.matrix_dimension, update.matrix_dimension);
        set(&mut self.tiers, update.tiers);
        set(&mut self.simple_config, update.simple_config);
        set(&mut self.wagering, update.wagering);
        set(&mut self.credit_timing, update.credit_timing);
    }
}

impl SectionMerge for Schedule {
    type Update = ScheduleUpdate;

    fn merge(&mut self, update: ScheduleUpdate) {
        set(&mut self.start_date, update.start_date);
        set(&mut self.end_date, update.end_date);
        set(&mut self.is_recurring, update.is_recurring);
        set(&mut self.recurrence, update.recurrence);
        set(&mut self.limits, update.limits);
    }
}

impl SectionMerge for Display {
    type Update = DisplayUpdate;

    fn merge(&mut self, update: DisplayUpdate) {
        set(&mut self.active_tab, update.active_tab);
        set(&mut self.title, update.title);
        set(&mut self.teaser, update.teaser);
        set(&mut self.banner_image, update.banner_image);
        set(&mut self.terms_and_conditions, update.terms_and_conditions);
        set(&mut self.badges, update.badges);
        set(&mut self.communication, update.communication);
    }
}
