//! Customer waiting line
//!
//! The CustomerQueue owns every customer currently waiting. Customers join at
//! the tail and normally leave from the head, but any position can be
//! removed. After every removal the remaining customers are renumbered so
//! that each sequence number equals the customer's 1-based position.

use crate::io::EventLog;
use crate::types::{Customer, DepotError, SequenceNumber};

/// Ordered line of waiting customers
#[derive(Debug)]
pub struct CustomerQueue {
    customers: Vec<Customer>,
    log: EventLog,
}

impl CustomerQueue {
    /// Create a new empty queue
    pub fn new(log: EventLog) -> Self {
        CustomerQueue {
            customers: Vec::new(),
            log,
        }
    }

    /// Append a customer to the tail, keeping their sequence number as given
    ///
    /// Used by the loader, which trusts the sequence numbers in the file.
    pub fn push(&mut self, customer: Customer) {
        self.log.record(format!(
            "Customer added to queue: {} for parcel {}",
            customer.name(),
            customer.parcel_id()
        ));
        self.customers.push(customer);
    }

    /// Add a new customer at the tail with the next sequence number
    ///
    /// # Arguments
    ///
    /// * `name` - Customer name, surrounding whitespace is trimmed
    /// * `parcel_id` - Parcel the customer is collecting
    ///
    /// # Errors
    ///
    /// Returns `DepotError::InvalidCustomer` if the name or parcel identifier
    /// is empty, or the parcel identifier contains whitespace.
    pub fn enqueue(&mut self, name: &str, parcel_id: &str) -> Result<&Customer, DepotError> {
        let name = name.trim();
        let parcel_id = parcel_id.trim();

        if name.is_empty() {
            return Err(DepotError::invalid_customer("name cannot be empty"));
        }
        if parcel_id.is_empty() {
            return Err(DepotError::invalid_customer("parcel ID cannot be empty"));
        }
        if parcel_id.contains(char::is_whitespace) {
            return Err(DepotError::invalid_customer(format!(
                "parcel ID '{}' cannot contain whitespace",
                parcel_id
            )));
        }

        let sequence = self.next_sequence();
        self.push(Customer::new(sequence, name, parcel_id));

        // push just appended, so the tail exists
        Ok(&self.customers[self.customers.len() - 1])
    }

    /// Remove the customer at a 0-based position
    ///
    /// Every customer left in the queue is renumbered to its new 1-based
    /// position.
    ///
    /// # Returns
    ///
    /// * `Some(Customer)` - The removed customer
    /// * `None` - If `index` is out of range; the queue is unchanged
    pub fn remove(&mut self, index: usize) -> Option<Customer> {
        if index >= self.customers.len() {
            return None;
        }

        let customer = self.customers.remove(index);
        self.log
            .record(format!("Customer removed from queue: {}", customer.name()));
        self.renumber();
        Some(customer)
    }

    /// The customer at the head of the queue, if any
    pub fn first(&self) -> Option<&Customer> {
        self.customers.first()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// All waiting customers, head first
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn next_sequence(&self) -> SequenceNumber {
        SequenceNumber::try_from(self.customers.len() + 1).unwrap_or(SequenceNumber::MAX)
    }

    fn renumber(&mut self) {
        for (position, customer) in (1..).zip(self.customers.iter_mut()) {
            customer.set_sequence(position);
        }
    }
}
