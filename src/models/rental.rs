use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::vehicle::{format_decimal, Vehicle};

/// An immutable record of one rental.
///
/// The cost is computed once, when the transaction is created, from the
/// vehicle's daily price. The vehicle is shared with the registry and with any
/// other transaction that rented it; nothing marks it unavailable.
///
/// Transactions are only created through [`Customer::rent_vehicle`](super::Customer::rent_vehicle).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalTransaction {
    id: Uuid,
    customer_id: u32,
    /// Customer name as it was when the rental was made.
    customer_name: String,
    vehicle: Arc<Vehicle>,
    rental_days: u32,
    total_cost: f64,
    created_at: DateTime<Utc>,
}

impl RentalTransaction {
    pub(crate) fn new(
        customer_id: u32,
        customer_name: &str,
        vehicle: Arc<Vehicle>,
        rental_days: u32,
    ) -> Self {
        let total_cost = vehicle.calculate_rental_cost(rental_days);
        Self {
            id: Uuid::new_v4(),
            customer_id,
            customer_name: customer_name.to_string(),
            vehicle,
            rental_days,
            total_cost,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_id(&self) -> u32 {
        self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// e.g. `Alice rented Honda Civic (Car) - 5 seats for 3 days. Total cost: $90.0`
    pub fn summary(&self) -> String {
        format!(
            "{} rented {} for {} days. Total cost: ${}",
            self.customer_name,
            self.vehicle,
            self.rental_days,
            format_decimal(self.total_cost)
        )
    }
}

impl fmt::Display for RentalTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
