//! In-memory vehicle rental registry.
//!
//! Vehicles and customers are registered into a [`RentalSystem`]; a rental
//! request names a customer id, a vehicle type and a day count, and produces a
//! [`RentalTransaction`] appended to the customer's history.

pub mod fleet;
pub mod models;
pub mod registry;
pub mod report;

pub use fleet::FleetConfig;
pub use models::*;
pub use registry::{RentalError, RentalSystem};
