//! Create-promotion wizard state
//!
//! - [`WizardSession`]: owned draft with section-scoped updates
//! - [`SectionMerge`]: one-level-deep merge of a partial update into a section

mod merge;
mod session;

pub use merge::SectionMerge;
pub use session::WizardSession;
