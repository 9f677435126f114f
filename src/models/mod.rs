//! Domain models for the rental registry.
//!
//! # Core Concepts
//!
//! - [`Vehicle`]: A rentable item with a daily price. The variant-specific data
//!   lives in [`VehicleKind`] and the type tag used for matching is [`VehicleType`].
//! - [`Customer`]: Identity plus an append-only rental history.
//! - [`RentalTransaction`]: Immutable record of one rental, with its cost computed
//!   when it is created.

mod customer;
mod rental;
mod vehicle;

pub use customer::*;
pub use rental::*;
pub use vehicle::*;
