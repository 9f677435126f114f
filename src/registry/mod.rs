use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::models::*;

/// Registry errors.
///
/// The two not-found variants keep the exact wording of the console messages
/// callers have always seen, so `to_string()` can be printed as-is.
#[derive(Debug, Error, PartialEq)]
pub enum RentalError {
    #[error("Customer not found!")]
    CustomerNotFound(u32),

    #[error("Vehicle type not available!")]
    VehicleTypeNotAvailable(String),

    #[error("Customer with ID {0} is already registered")]
    DuplicateCustomer(u32),

    #[error("Invalid daily price {price} for {vehicle}")]
    InvalidPrice { vehicle: String, price: f64 },
}

/// In-memory registry of every known customer and vehicle.
///
/// Customers are keyed by id. Vehicles keep their registration order, which is
/// also the tie-break order when several vehicles share a type: the first
/// registered match wins. Renting never removes or marks a vehicle.
#[derive(Debug, Default)]
pub struct RentalSystem {
    customers: BTreeMap<u32, Customer>,
    vehicles: Vec<Arc<Vehicle>>,
}

impl RentalSystem {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Customer operations
    // ============================================================

    /// Register a customer. Ids are unique; a second registration with the same
    /// id is rejected and the existing customer is left untouched.
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), RentalError> {
        let id = customer.id();
        if self.customers.contains_key(&id) {
            tracing::warn!(customer_id = id, "Rejected duplicate customer registration");
            return Err(RentalError::DuplicateCustomer(id));
        }

        tracing::debug!(customer_id = id, name = customer.name(), "Registered customer");
        self.customers.insert(id, customer);
        Ok(())
    }

    pub fn customer(&self, id: u32) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// All customers, ordered by id.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    // ============================================================
    // Vehicle operations
    // ============================================================

    /// Register a vehicle at the end of the inventory. Duplicates are allowed.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<Arc<Vehicle>, RentalError> {
        if !vehicle.price_per_day.is_finite() || vehicle.price_per_day < 0.0 {
            return Err(RentalError::InvalidPrice {
                vehicle: vehicle.describe(),
                price: vehicle.price_per_day,
            });
        }

        tracing::debug!(vehicle = %vehicle, "Registered vehicle");
        let vehicle = Arc::new(vehicle);
        self.vehicles.push(Arc::clone(&vehicle));
        Ok(vehicle)
    }

    pub fn vehicles(&self) -> &[Arc<Vehicle>] {
        &self.vehicles
    }

    /// Description of every vehicle, in registration order.
    pub fn list_vehicles(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.describe()).collect()
    }

    /// First registered vehicle whose type tag matches `vehicle_type`, ignoring case.
    pub fn find_vehicle(&self, vehicle_type: &str) -> Option<&Arc<Vehicle>> {
        first_of_type(&self.vehicles, vehicle_type)
    }

    // ============================================================
    // Rental operations
    // ============================================================

    /// Rent the first vehicle of `vehicle_type` to customer `customer_id`.
    ///
    /// The customer is resolved before the vehicle, so an unknown customer is
    /// reported even when the vehicle type is also unavailable. On success the
    /// transaction is appended to the customer's history and returned.
    pub fn process_rental(
        &mut self,
        customer_id: u32,
        vehicle_type: &str,
        days: u32,
    ) -> Result<&RentalTransaction, RentalError> {
        let Some(customer) = self.customers.get_mut(&customer_id) else {
            tracing::warn!(customer_id, "Customer not found");
            return Err(RentalError::CustomerNotFound(customer_id));
        };

        // Takes the field directly so the customer borrow above stays valid.
        let Some(vehicle) = first_of_type(&self.vehicles, vehicle_type) else {
            tracing::warn!(customer_id, vehicle_type, "Vehicle type not available");
            return Err(RentalError::VehicleTypeNotAvailable(vehicle_type.to_string()));
        };

        let rental = customer.rent_vehicle(Arc::clone(vehicle), days);
        tracing::info!(
            rental_id = %rental.id(),
            customer_id,
            vehicle = %rental.vehicle(),
            days,
            total_cost = rental.total_cost(),
            "Processed rental"
        );
        Ok(rental)
    }
}

fn first_of_type<'a>(
    vehicles: &'a [Arc<Vehicle>],
    vehicle_type: &str,
) -> Option<&'a Arc<Vehicle>> {
    vehicles.iter().find(|v| v.matches_type(vehicle_type))
}
