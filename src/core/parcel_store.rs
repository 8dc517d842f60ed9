//! Parcel storage
//!
//! This module provides the ParcelStore component that owns every parcel the
//! depot knows about, keyed by parcel identifier.
//!
//! # Lifecycle
//!
//! Parcels are inserted by the parcel loader or by an explicit add, are
//! mutated only when collected, and are never removed. Collected parcels
//! stay queryable so the report can list them with their fees.
//!
//! # Duplicate Handling
//!
//! Inserting a parcel whose identifier is already present replaces the old
//! entry (last write wins), so a re-read parcel line acts as an update.

use crate::io::EventLog;
use crate::types::Parcel;
use std::collections::HashMap;

/// Keyed store of all parcels at the depot
#[derive(Debug)]
pub struct ParcelStore {
    /// Map of parcel identifier to parcel
    parcels: HashMap<String, Parcel>,
    log: EventLog,
}

impl ParcelStore {
    /// Create a new empty parcel store
    ///
    /// # Arguments
    ///
    /// * `log` - Activity log shared with the rest of the depot
    pub fn new(log: EventLog) -> Self {
        ParcelStore {
            parcels: HashMap::new(),
            log,
        }
    }

    /// Insert a parcel, replacing any parcel with the same identifier
    ///
    /// # Returns
    ///
    /// The parcel previously stored under that identifier, if any
    pub fn insert(&mut self, parcel: Parcel) -> Option<Parcel> {
        self.log.record(format!("Parcel added: {}", parcel.id()));
        self.parcels.insert(parcel.id().to_string(), parcel)
    }

    /// Look up a parcel by exact identifier
    ///
    /// # Returns
    ///
    /// * `Some(&Parcel)` - If the parcel exists
    /// * `None` - If the identifier is unknown
    pub fn get(&self, parcel_id: &str) -> Option<&Parcel> {
        self.parcels.get(parcel_id)
    }

    pub fn contains(&self, parcel_id: &str) -> bool {
        self.parcels.contains_key(parcel_id)
    }

    /// Mark a parcel as collected
    ///
    /// # Returns
    ///
    /// * `true` - If the parcel exists (it is now collected)
    /// * `false` - If the identifier is unknown; nothing changes
    pub fn mark_collected(&mut self, parcel_id: &str) -> bool {
        match self.parcels.get_mut(parcel_id) {
            Some(parcel) => {
                parcel.mark_collected();
                self.log
                    .record(format!("Parcel marked as collected: {}", parcel_id));
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// All parcels, in no particular order
    pub fn all(&self) -> Vec<&Parcel> {
        self.parcels.values().collect()
    }

    /// Parcels still waiting for collection, in no particular order
    pub fn uncollected(&self) -> Vec<&Parcel> {
        self.parcels.values().filter(|p| !p.is_collected()).collect()
    }

    /// Parcels already collected, in no particular order
    pub fn collected(&self) -> Vec<&Parcel> {
        self.parcels.values().filter(|p| p.is_collected()).collect()
    }

    /// Count parcels that have been in the depot strictly longer than `days`
    pub fn count_in_depot_longer_than(&self, days: u32) -> usize {
        self.parcels
            .values()
            .filter(|p| p.days_in_depot() > days)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn parcel(id: &str, days: u32) -> Parcel {
        Parcel::new(id, days, Decimal::ONE, Dimensions::new(1, 2, 3))
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = ParcelStore::new(EventLog::new());
        assert!(store.insert(parcel("P1", 2)).is_none());

        let found = store.get("P1").unwrap();
        assert_eq!(found.days_in_depot(), 2);
        assert!(store.get("p1").is_none());
    }

    #[test]
    fn test_insert_same_id_replaces() {
        let mut store = ParcelStore::new(EventLog::new());
        store.insert(parcel("P1", 2));
        let previous = store.insert(parcel("P1", 9));

        assert_eq!(previous.map(|p| p.days_in_depot()), Some(2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("P1").unwrap().days_in_depot(), 9);
    }

    #[test]
    fn test_mark_collected_known_and_unknown() {
        let log = EventLog::new();
        let mut store = ParcelStore::new(log.clone());
        store.insert(parcel("P1", 2));

        assert!(store.mark_collected("P1"));
        assert!(store.get("P1").unwrap().is_collected());

        let entries_before = log.len();
        assert!(!store.mark_collected("NOPE"));
        assert_eq!(log.len(), entries_before);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_partitions_cover_every_parcel_once() {
        let mut store = ParcelStore::new(EventLog::new());
        for i in 0..6 {
            store.insert(parcel(&format!("P{}", i), i));
        }
        store.mark_collected("P1");
        store.mark_collected("P4");

        let collected = store.collected();
        let waiting = store.uncollected();
        assert_eq!(collected.len(), 2);
        assert_eq!(waiting.len(), 4);
        assert_eq!(collected.len() + waiting.len(), store.all().len());
        assert!(collected.iter().all(|p| p.is_collected()));
        assert!(waiting.iter().all(|p| !p.is_collected()));
    }

    #[rstest]
    #[case(0, 4)]
    #[case(3, 3)]
    #[case(7, 1)]
    #[case(10, 0)]
    fn test_count_in_depot_longer_than(#[case] threshold: u32, #[case] expected: usize) {
        let mut store = ParcelStore::new(EventLog::new());
        for (id, days) in [("A", 0), ("B", 1), ("C", 4), ("D", 7), ("E", 8)] {
            store.insert(parcel(id, days));
        }
        assert_eq!(store.count_in_depot_longer_than(threshold), expected);
    }
}
