//! Collection processing
//!
//! The Worker serves the customer at the head of the queue: it removes them,
//! finds their parcel, charges the fee and marks the parcel collected.
//!
//! The worker owns the parcel store and the customer queue so that every
//! mutation of either goes through one place. It remembers the last
//! successful collection (customer, parcel identifier, fee) until the next
//! call or until `clear_current_transaction`.
//!
//! A customer whose parcel is unknown is still removed from the queue and is
//! not re-queued.

use crate::core::customer_queue::CustomerQueue;
use crate::core::fee::calculate_fee;
use crate::core::parcel_store::ParcelStore;
use crate::io::EventLog;
use crate::types::{Customer, DepotError, Parcel, ParcelId};
use rust_decimal::Decimal;

/// The collection currently on the counter
#[derive(Debug, Clone, PartialEq)]
struct CurrentTransaction {
    customer: Customer,
    parcel_id: ParcelId,
    fee: Decimal,
}

/// Serves customers one at a time against the parcel store
#[derive(Debug)]
pub struct Worker {
    parcels: ParcelStore,
    queue: CustomerQueue,
    current: Option<CurrentTransaction>,
    log: EventLog,
}

impl Worker {
    /// Create a worker over an existing store and queue
    pub fn new(parcels: ParcelStore, queue: CustomerQueue, log: EventLog) -> Self {
        Worker {
            parcels,
            queue,
            current: None,
            log,
        }
    }

    /// Process the customer at the head of the queue
    ///
    /// # Returns
    ///
    /// * `Ok(fee)` - The customer collected their parcel; the parcel is now
    ///   marked collected and the transaction is recorded as current
    /// * `Err(DepotError)` - Nobody was served
    ///
    /// # Errors
    ///
    /// - `QueueEmpty` if nobody is waiting. Nothing changes.
    /// - `ParcelNotFound` if the customer's parcel is unknown. The customer
    ///   has left the queue, the current transaction is cleared, and the
    ///   store is untouched.
    pub fn process_next(&mut self) -> Result<Decimal, DepotError> {
        let customer = match self.queue.remove(0) {
            Some(customer) => customer,
            None => {
                self.log.record("No customers in queue to process");
                return Err(DepotError::QueueEmpty);
            }
        };
        self.log
            .record(format!("Processing customer: {}", customer.name()));

        let fee = match self.parcels.get(customer.parcel_id()) {
            Some(parcel) => calculate_fee(parcel),
            None => {
                self.log
                    .record(format!("Parcel not found: {}", customer.parcel_id()));
                tracing::warn!(
                    customer = customer.name(),
                    parcel = customer.parcel_id(),
                    "customer removed without a matching parcel"
                );
                self.current = None;
                return Err(DepotError::parcel_not_found(
                    customer.parcel_id(),
                    customer.name(),
                ));
            }
        };
        self.log.record(format!("Fee calculated: £{:.2}", fee));

        self.parcels.mark_collected(customer.parcel_id());
        self.log.record(format!(
            "Parcel {} collected by {}",
            customer.parcel_id(),
            customer.name()
        ));

        self.current = Some(CurrentTransaction {
            parcel_id: customer.parcel_id().to_string(),
            customer,
            fee,
        });
        Ok(fee)
    }

    /// Forget the current transaction; store and queue are untouched
    pub fn clear_current_transaction(&mut self) {
        self.current = None;
    }

    pub fn current_customer(&self) -> Option<&Customer> {
        self.current.as_ref().map(|t| &t.customer)
    }

    /// The parcel of the current transaction, as held in the store
    ///
    /// The parcel is looked up by identifier on every call. If the store
    /// entry has since been replaced through `parcels_mut`, this returns the
    /// replacement, not the parcel that was collected. `current_fee` keeps
    /// the fee that was charged.
    pub fn current_parcel(&self) -> Option<&Parcel> {
        self.current
            .as_ref()
            .and_then(|t| self.parcels.get(&t.parcel_id))
    }

    /// Fee of the current transaction, zero when there is none
    pub fn current_fee(&self) -> Decimal {
        self.current.as_ref().map_or(Decimal::ZERO, |t| t.fee)
    }

    pub fn parcels(&self) -> &ParcelStore {
        &self.parcels
    }

    pub fn parcels_mut(&mut self) -> &mut ParcelStore {
        &mut self.parcels
    }

    pub fn queue(&self) -> &CustomerQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut CustomerQueue {
        &mut self.queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn worker_with(parcels: &[(&str, u32, &str)], customers: &[(&str, &str)]) -> Worker {
        let log = EventLog::new();
        let mut store = ParcelStore::new(log.clone());
        for (id, days, weight) in parcels {
            store.insert(Parcel::new(*id, *days, dec(weight), Dimensions::new(10, 10, 10)));
        }
        let mut queue = CustomerQueue::new(log.clone());
        for (i, (name, parcel_id)) in customers.iter().enumerate() {
            queue.push(Customer::new(i as u32 + 1, *name, *parcel_id));
        }
        Worker::new(store, queue, log)
    }

    #[test]
    fn test_initial_state_is_empty() {
        let worker = worker_with(&[], &[]);
        assert!(worker.current_customer().is_none());
        assert!(worker.current_parcel().is_none());
        assert_eq!(worker.current_fee(), Decimal::ZERO);
    }

    #[test]
    fn test_process_next_collects_parcel() {
        let mut worker = worker_with(&[("X100", 10, "2.0")], &[("Jane Doe", "X100")]);

        let fee = worker.process_next().unwrap();

        assert_eq!(fee, dec("18.90"));
        assert!(worker.queue().is_empty());
        assert!(worker.parcels().get("X100").unwrap().is_collected());
        assert_eq!(worker.current_customer().unwrap().name(), "Jane Doe");
        assert_eq!(worker.current_parcel().unwrap().id(), "X100");
        assert!(worker.current_parcel().unwrap().is_collected());
        assert_eq!(worker.current_fee(), dec("18.90"));
    }

    #[test]
    fn test_process_next_on_empty_queue() {
        let mut worker = worker_with(&[("P1", 1, "1")], &[]);

        let result = worker.process_next();

        assert_eq!(result, Err(DepotError::QueueEmpty));
        assert!(worker.queue().is_empty());
        assert!(!worker.parcels().get("P1").unwrap().is_collected());
    }

    #[test]
    fn test_process_next_on_empty_queue_keeps_current() {
        let mut worker = worker_with(&[("P1", 1, "1")], &[("Ann", "P1")]);
        worker.process_next().unwrap();

        assert!(worker.process_next().is_err());
        assert_eq!(worker.current_customer().unwrap().name(), "Ann");
    }

    #[test]
    fn test_missing_parcel_loses_customer() {
        let mut worker = worker_with(
            &[("P1", 1, "1")],
            &[("Ann", "P404"), ("Bob", "P1")],
        );

        let result = worker.process_next();

        assert!(matches!(
            result,
            Err(DepotError::ParcelNotFound { ref parcel_id, .. }) if parcel_id == "P404"
        ));
        assert_eq!(worker.queue().len(), 1);
        assert_eq!(worker.queue().first().unwrap().name(), "Bob");
        assert_eq!(worker.queue().first().unwrap().sequence(), 1);
        assert!(!worker.parcels().get("P1").unwrap().is_collected());
        assert!(worker.current_customer().is_none());
        assert_eq!(worker.current_fee(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_parcel_clears_previous_transaction() {
        let mut worker = worker_with(&[("P1", 1, "1")], &[("Ann", "P1"), ("Bob", "P404")]);
        worker.process_next().unwrap();

        assert!(worker.process_next().is_err());
        assert!(worker.current_customer().is_none());
        assert!(worker.current_parcel().is_none());
    }

    #[test]
    fn test_current_parcel_follows_store_entry() {
        let mut worker = worker_with(&[("P1", 1, "1")], &[("Ann", "P1")]);
        let fee = worker.process_next().unwrap();

        worker
            .parcels_mut()
            .insert(Parcel::new("P1", 9, dec("4"), Dimensions::new(1, 1, 1)));

        let parcel = worker.current_parcel().unwrap();
        assert_eq!(parcel.days_in_depot(), 9);
        assert!(!parcel.is_collected());
        assert_eq!(worker.current_fee(), fee);
    }

    #[test]
    fn test_clear_current_transaction() {
        let mut worker = worker_with(&[("P1", 1, "1")], &[("Ann", "P1")]);
        worker.process_next().unwrap();

        worker.clear_current_transaction();

        assert!(worker.current_customer().is_none());
        assert_eq!(worker.current_fee(), Decimal::ZERO);
        assert!(worker.parcels().get("P1").unwrap().is_collected());
    }

    #[test]
    fn test_drain_queue_in_order() {
        let mut worker = worker_with(
            &[("P1", 1, "1"), ("P2", 5, "2")],
            &[("Ann", "P1"), ("Bob", "P2"), ("Cid", "P3")],
        );

        assert!(worker.process_next().is_ok());
        assert_eq!(worker.queue().first().unwrap().sequence(), 1);
        assert_eq!(worker.current_customer().unwrap().name(), "Ann");
        assert!(worker.process_next().is_ok());
        assert_eq!(worker.current_customer().unwrap().name(), "Bob");
        assert!(worker.process_next().is_err());
        assert_eq!(worker.process_next(), Err(DepotError::QueueEmpty));
        assert_eq!(worker.parcels().collected().len(), 2);
    }
}
