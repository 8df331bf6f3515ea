//! Data models
//!
//! Shared between the console core and the browser pages (via storage).
//! JSON field names are camelCase to match the stored promotion list.

pub mod promotion;
pub mod wizard;

// Re-exports
pub use promotion::*;
pub use wizard::*;
