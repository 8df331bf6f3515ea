//! Persistence: key-value slots and the promotion repository

pub mod kv;
pub mod repository;

pub use kv::{KeyValueStore, RedbStore, StoreError, StoreResult};
pub use repository::{PROMOTIONS_KEY, PromotionRepository};
