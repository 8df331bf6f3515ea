//! Wizard session
//!
//! Single owner of the draft for one editing session. Step forms receive a
//! `&mut WizardSession` and route every change through the section updates;
//! nothing outside this module mutates the draft directly.

use shared::models::{
    BasicsUpdate, DisplayUpdate, EligibilityUpdate, RewardsUpdate, ScheduleUpdate, WizardState,
};

use super::merge::SectionMerge;

/// In-progress promotion draft
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    state: WizardState,
}

impl WizardSession {
    /// Start a session with the default draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session editing an existing draft
    pub fn from_state(state: WizardState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn into_state(self) -> WizardState {
        self.state
    }

    pub fn update_basics(&mut self, update: BasicsUpdate) {
        tracing::debug!(?update, "Updating basics");
        self.state.basics.merge(update);
    }

    pub fn update_eligibility(&mut self, update: EligibilityUpdate) {
        tracing::debug!(?update, "Updating eligibility");
        self.state.eligibility.merge(update);
    }

    pub fn update_rewards(&mut self, update: RewardsUpdate) {
        tracing::debug!(?update, "Updating rewards");
        self.state.rewards.merge(update);
    }

    pub fn update_schedule(&mut self, update: ScheduleUpdate) {
        tracing::debug!(?update, "Updating schedule");
        self.state.schedule.merge(update);
    }

    pub fn update_display(&mut self, update: DisplayUpdate) {
        tracing::debug!(?update, "Updating display");
        self.state.display.merge(update);
    }

    /// Discard all edits and return to the default draft
    pub fn reset(&mut self) {
        tracing::debug!("Resetting wizard draft");
        self.state = WizardState::default();
    }

    /// Replace the whole draft verbatim
    ///
    /// No defaulting or merging: the caller supplies a complete draft.
    pub fn load_promotion(&mut self, state: WizardState) {
        tracing::debug!(name = %state.basics.name, "Loading promotion into wizard");
        self.state = state;
    }
}
