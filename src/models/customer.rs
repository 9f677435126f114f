use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::rental::RentalTransaction;
use super::vehicle::Vehicle;

/// A registered customer and their rental history.
///
/// The history is **append-only**: each call to [`Customer::rent_vehicle`] adds
/// exactly one transaction at the end, and entries are never modified or removed.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: u32,
    name: String,
    age: u32,
    rental_history: Vec<RentalTransaction>,
}

/// Input for registering a new customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub id: u32,
    pub name: String,
    pub age: u32,
}

impl Customer {
    pub fn new(id: u32, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            rental_history: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn rental_history(&self) -> &[RentalTransaction] {
        &self.rental_history
    }

    /// Rent `vehicle` for `days`, recording the transaction in this customer's
    /// history. The returned reference is the entry that was just appended.
    pub fn rent_vehicle(&mut self, vehicle: Arc<Vehicle>, days: u32) -> &RentalTransaction {
        let rental = RentalTransaction::new(self.id, &self.name, vehicle, days);
        self.rental_history.push(rental);
        let index = self.rental_history.len() - 1;
        &self.rental_history[index]
    }

    /// Sum of the cost of every rental in the history.
    pub fn total_spent(&self) -> f64 {
        self.rental_history.iter().map(|r| r.total_cost()).sum()
    }
}

impl From<NewCustomer> for Customer {
    fn from(input: NewCustomer) -> Self {
        Customer::new(input.id, input.name, input.age)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer: {} (ID: {})", self.name, self.id)
    }
}
