//! Promotion repository
//!
//! The whole list lives in one slot as a JSON array, newest first. Writes
//! are read-modify-write of the full list; concurrent writers are not
//! detected (last writer wins).

use shared::models::PromotionRecord;

use super::kv::{KeyValueStore, StoreResult};
use crate::catalog::listing::with_missing_seeds;
use crate::catalog::seeds::seed_promotions;

/// Slot holding the serialized promotion list
pub const PROMOTIONS_KEY: &str = "saved_promotions";

/// Published promotions over a key-value slot
pub struct PromotionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> PromotionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored promotions, newest first.
    ///
    /// A missing, unreadable or non-array slot reads as an empty list.
    /// Elements that do not parse as a record are skipped.
    pub fn list(&self) -> Vec<PromotionRecord> {
        self.read_entries()
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed promotion entry");
                    None
                }
            })
            .collect()
    }

    /// Prepend a record and write the whole list back.
    ///
    /// Entries that `list` skips are written back untouched.
    pub fn append(&self, record: PromotionRecord) -> StoreResult<()> {
        let mut entries = self.read_entries();
        tracing::debug!(id = %record.id, existing = entries.len(), "Appending promotion");
        entries.insert(0, serde_json::to_value(&record)?);
        self.write(&entries)
    }

    /// Raw elements of the stored array
    fn read_entries(&self) -> Vec<serde_json::Value> {
        let bytes = match self.store.get(PROMOTIONS_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read promotion list, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed promotion list, treating as empty");
                Vec::new()
            }
        }
    }

    /// Look up by id in its text form
    pub fn find(&self, id: &str) -> Option<PromotionRecord> {
        self.list().into_iter().find(|p| p.id.matches(id))
    }

    /// List page contents.
    ///
    /// An empty repository is seeded with the demo promotions; otherwise the
    /// stored list is returned with any missing seeds appended (not written).
    /// A slot holding only malformed entries is not overwritten.
    pub fn list_or_seed(&self) -> StoreResult<Vec<PromotionRecord>> {
        if self.read_entries().is_empty() {
            let seeds = seed_promotions();
            tracing::info!(count = seeds.len(), "Seeding empty promotion list");
            let entries = seeds
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            self.write(&entries)?;
            return Ok(seeds);
        }
        Ok(with_missing_seeds(self.list()))
    }

    fn write(&self, entries: &[serde_json::Value]) -> StoreResult<()> {
        let bytes = serde_json::to_vec(entries)?;
        self.store.set(PROMOTIONS_KEY, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RedbStore;

    fn repo() -> PromotionRepository<RedbStore> {
        PromotionRepository::new(RedbStore::open_in_memory().unwrap())
    }

    #[test]
    fn test_append_to_empty_store() {
        let repo = repo();
        assert!(repo.list().is_empty());

        let record = PromotionRecord::new(1_i64, "Weekend Reload", "Bonus", "Active");
        repo.append(record.clone()).unwrap();

        let listed = repo.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], record);
    }

    #[test]
    fn test_append_to_seeded_store() {
        let repo = repo();
        repo.append(PromotionRecord::new(1_i64, "First", "Bonus", "Active")).unwrap();
        repo.append(PromotionRecord::new(2_i64, "Second", "Bonus", "Active")).unwrap();
        let before = repo.list().len();
        assert_eq!(before, 2);

        let record = PromotionRecord::new("PRM-X", "Third", "Cashback", "Active");
        repo.append(record.clone()).unwrap();

        let listed = repo.list();
        assert_eq!(listed.len(), before + 1);
        assert_eq!(listed[0], record);
        assert_eq!(listed[1].name, "Second");
        assert_eq!(listed[2].name, "First");
    }

    #[test]
    fn test_malformed_slot_reads_empty() {
        let repo = repo();
        repo.store().set(PROMOTIONS_KEY, b"{not json").unwrap();
        assert!(repo.list().is_empty());

        // a malformed slot is overwritten by the next append
        repo.append(PromotionRecord::new(1_i64, "Fresh", "Bonus", "Active")).unwrap();
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn test_malformed_entry_skipped_and_kept() {
        let repo = repo();
        let stored = br#"[
            {"id": "PRM-1", "name": "Good", "type": "Bonus", "status": "active"},
            {"id": 1700000000000.0, "name": "Float id", "type": "Bonus", "status": "active"}
        ]"#;
        repo.store().set(PROMOTIONS_KEY, stored).unwrap();

        let listed = repo.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Good");

        repo.append(PromotionRecord::new(2_i64, "New", "Bonus", "Active")).unwrap();
        let names: Vec<String> = repo.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["New", "Good"]);

        let raw = repo.store().get(PROMOTIONS_KEY).unwrap().unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_slice(&raw).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2]["name"], "Float id");
    }

    #[test]
    fn test_non_array_slot_reads_empty() {
        let repo = repo();
        repo.store().set(PROMOTIONS_KEY, br#"{"id": "PRM-1"}"#).unwrap();
        assert!(repo.list().is_empty());
    }

    #[test]
    fn test_find_by_text_id() {
        let repo = repo();
        repo.append(PromotionRecord::new(1_700_000_000_000_i64, "Published", "Cashback", "Active"))
            .unwrap();
        repo.append(PromotionRecord::new("PRM-2024-002", "Seeded", "Deposit Match", "active"))
            .unwrap();

        assert_eq!(repo.find("1700000000000").unwrap().name, "Published");
        assert_eq!(repo.find("PRM-2024-002").unwrap().name, "Seeded");
        assert!(repo.find("PRM-2024-404").is_none());
    }

    #[test]
    fn test_list_or_seed_writes_seeds_once() {
        let repo = repo();
        let first = repo.list_or_seed().unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(repo.list().len(), 3);

        repo.append(PromotionRecord::new(9_i64, "Mine", "Bonus", "Active")).unwrap();
        let second = repo.list_or_seed().unwrap();
        assert_eq!(second.len(), 4);
        assert_eq!(second[0].name, "Mine");
    }
}
