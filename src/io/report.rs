//! Depot summary report
//!
//! `DepotReport` gathers the figures the depot reports on (counts, the
//! collected and waiting lists, per-parcel fees, long-stay count, total fees)
//! from a parcel store. `lines` renders them as human-readable text.
//!
//! Both lists are sorted by parcel identifier so that the same store always
//! produces the same report.

use crate::core::fee::{calculate_fee, LONG_STAY_DAYS};
use crate::core::ParcelStore;
use crate::types::{DepotError, Parcel};
use rust_decimal::Decimal;
use std::io::Write;

/// Currency symbol used when printing fees
pub const CURRENCY: &str = "£";

/// A collected parcel with the fee charged for it
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedEntry {
    pub parcel: Parcel,
    pub fee: Decimal,
}

/// Snapshot of the depot for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct DepotReport {
    pub total_parcels: usize,
    pub collected: Vec<CollectedEntry>,
    pub waiting: Vec<Parcel>,
    /// Parcels in the depot for more than `LONG_STAY_DAYS`
    pub long_stay_count: usize,
    pub total_fees: Decimal,
}

impl DepotReport {
    /// Build a report from the current state of the store
    ///
    /// # Errors
    ///
    /// Returns `DepotError::FeeOverflow` if the collected fees do not sum
    /// to a representable `Decimal`.
    pub fn build(store: &ParcelStore) -> Result<Self, DepotError> {
        let mut collected: Vec<CollectedEntry> = store
            .collected()
            .into_iter()
            .map(|parcel| CollectedEntry {
                fee: calculate_fee(parcel),
                parcel: parcel.clone(),
            })
            .collect();
        collected.sort_by(|a, b| a.parcel.id().cmp(b.parcel.id()));

        let mut waiting: Vec<Parcel> = store.uncollected().into_iter().cloned().collect();
        waiting.sort_by(|a, b| a.id().cmp(b.id()));

        let total_fees = collected
            .iter()
            .try_fold(Decimal::ZERO, |total, entry| {
                total
                    .checked_add(entry.fee)
                    .ok_or_else(|| DepotError::FeeOverflow {
                        parcel_id: entry.parcel.id().to_string(),
                    })
            })?;

        Ok(DepotReport {
            total_parcels: store.len(),
            collected,
            waiting,
            long_stay_count: store.count_in_depot_longer_than(LONG_STAY_DAYS),
            total_fees,
        })
    }

    /// Render the report as text lines
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "=== DEPOT PARCEL SYSTEM REPORT ===".to_string(),
            format!("Total parcels: {}", self.total_parcels),
            format!("Collected parcels: {}", self.collected.len()),
            format!("Waiting parcels: {}", self.waiting.len()),
            String::new(),
            "COLLECTED PARCELS:".to_string(),
        ];

        for entry in &self.collected {
            lines.push(format!(
                "{} - Fee: {}{:.2}",
                describe(&entry.parcel),
                CURRENCY,
                entry.fee
            ));
        }

        lines.push(String::new());
        lines.push("WAITING PARCELS:".to_string());
        lines.extend(self.waiting.iter().map(describe));

        lines.push(String::new());
        lines.push("STATISTICS:".to_string());
        lines.push(format!(
            "Parcels in depot more than {} days: {}",
            LONG_STAY_DAYS, self.long_stay_count
        ));
        lines.push(format!(
            "Total fees collected: {}{:.2}",
            CURRENCY, self.total_fees
        ));
        lines.push("=== END OF REPORT ===".to_string());

        lines
    }

    /// Write the rendered report to `output`
    pub fn write_to(&self, output: &mut dyn Write) -> Result<(), DepotError> {
        for line in self.lines() {
            writeln!(output, "{}", line)?;
        }
        output.flush()?;
        Ok(())
    }
}

/// One-line description of a parcel used in both report lists
fn describe(parcel: &Parcel) -> String {
    format!(
        "{} - Days: {} - Weight: {} - Dimensions: {}",
        parcel.id(),
        parcel.days_in_depot(),
        parcel.weight(),
        parcel.dimensions()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::EventLog;
    use crate::types::Dimensions;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_store() -> ParcelStore {
        let mut store = ParcelStore::new(EventLog::new());
        store.insert(Parcel::new("X100", 10, dec("2.0"), Dimensions::new(10, 10, 10)));
        store.insert(Parcel::new("P1", 2, dec("5.0"), Dimensions::new(20, 30, 40)));
        store.insert(Parcel::new("P2", 8, dec("1.5"), Dimensions::new(1, 2, 3)));
        store.mark_collected("X100");
        store.mark_collected("P1");
        store
    }

    #[test]
    fn test_build_counts_and_fees() {
        let report = DepotReport::build(&sample_store()).unwrap();

        assert_eq!(report.total_parcels, 3);
        assert_eq!(report.collected.len(), 2);
        assert_eq!(report.waiting.len(), 1);
        assert_eq!(report.long_stay_count, 2);
        assert_eq!(report.total_fees, dec("261.40"));

        let ids: Vec<&str> = report.collected.iter().map(|e| e.parcel.id()).collect();
        assert_eq!(ids, vec!["P1", "X100"]);
    }

    #[test]
    fn test_lines_layout() {
        let lines = DepotReport::build(&sample_store()).unwrap().lines();

        assert_eq!(
            lines,
            vec![
                "=== DEPOT PARCEL SYSTEM REPORT ===",
                "Total parcels: 3",
                "Collected parcels: 2",
                "Waiting parcels: 1",
                "",
                "COLLECTED PARCELS:",
                "P1 - Days: 2 - Weight: 5.0 - Dimensions: 20 x 30 x 40 - Fee: £242.50",
                "X100 - Days: 10 - Weight: 2.0 - Dimensions: 10 x 10 x 10 - Fee: £18.90",
                "",
                "WAITING PARCELS:",
                "P2 - Days: 8 - Weight: 1.5 - Dimensions: 1 x 2 x 3",
                "",
                "STATISTICS:",
                "Parcels in depot more than 7 days: 2",
                "Total fees collected: £261.40",
                "=== END OF REPORT ===",
            ]
        );
    }

    #[test]
    fn test_empty_store_report() {
        let report = DepotReport::build(&ParcelStore::new(EventLog::new())).unwrap();
        assert_eq!(report.total_fees, Decimal::ZERO);

        let mut output = Vec::new();
        report.write_to(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Total parcels: 0"));
        assert!(text.contains("Total fees collected: £0.00"));
    }

    #[test]
    fn test_build_reports_fee_overflow() {
        let mut store = ParcelStore::new(EventLog::new());
        for id in ["H1", "H2", "H3"] {
            let weight = Decimal::from_scientific("7e28").unwrap();
            store.insert(Parcel::new(id, 1, weight, Dimensions::new(1, 1, 1)));
            store.mark_collected(id);
        }

        let result = DepotReport::build(&store);

        assert!(matches!(
            result,
            Err(DepotError::FeeOverflow { ref parcel_id }) if parcel_id == "H3"
        ));
    }
}
