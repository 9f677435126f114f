use std::fmt;

use serde::{Deserialize, Serialize};

/// A rentable vehicle.
///
/// All vehicles share a brand, a model and a flat daily price. The
/// variant-specific payload (seats, cargo capacity, bike category) lives in
/// [`VehicleKind`]. Vehicles are immutable once registered and may appear in any
/// number of rental transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub model: String,
    pub brand: String,
    /// Flat price charged per rental day. Never negative for a registered vehicle.
    pub price_per_day: f64,
    pub kind: VehicleKind,
}

/// Variant-specific vehicle data, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VehicleKind {
    Car { seating_capacity: u32 },
    Truck { cargo_capacity_kg: f64 },
    Bike { bike_type: String },
}

/// The type tag used to match rental requests against registered vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Car,
    Truck,
    Bike,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Truck => "Truck",
            Self::Bike => "Bike",
        }
    }

    /// Case-insensitive parse of a type tag ("car", "CAR" and "Car" all match).
    /// Only ASCII case is folded; the tags themselves are ASCII.
    pub fn from_str(s: &str) -> Option<Self> {
        [Self::Car, Self::Truck, Self::Bike]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Vehicle {
    pub fn car(
        model: impl Into<String>,
        brand: impl Into<String>,
        price_per_day: f64,
        seating_capacity: u32,
    ) -> Self {
        Self::new(model, brand, price_per_day, VehicleKind::Car { seating_capacity })
    }

    pub fn truck(
        model: impl Into<String>,
        brand: impl Into<String>,
        price_per_day: f64,
        cargo_capacity_kg: f64,
    ) -> Self {
        Self::new(model, brand, price_per_day, VehicleKind::Truck { cargo_capacity_kg })
    }

    pub fn bike(
        model: impl Into<String>,
        brand: impl Into<String>,
        price_per_day: f64,
        bike_type: impl Into<String>,
    ) -> Self {
        Self::new(
            model,
            brand,
            price_per_day,
            VehicleKind::Bike {
                bike_type: bike_type.into(),
            },
        )
    }

    pub fn new(
        model: impl Into<String>,
        brand: impl Into<String>,
        price_per_day: f64,
        kind: VehicleKind,
    ) -> Self {
        Self {
            model: model.into(),
            brand: brand.into(),
            price_per_day,
            kind,
        }
    }

    pub fn vehicle_type(&self) -> VehicleType {
        match self.kind {
            VehicleKind::Car { .. } => VehicleType::Car,
            VehicleKind::Truck { .. } => VehicleType::Truck,
            VehicleKind::Bike { .. } => VehicleType::Bike,
        }
    }

    /// Whether this vehicle's type tag equals `requested`, ignoring ASCII case.
    /// Non-ASCII look-alikes such as the Kelvin sign (U+212A) never match.
    pub fn matches_type(&self, requested: &str) -> bool {
        self.vehicle_type().as_str().eq_ignore_ascii_case(requested)
    }

    /// Flat pricing: `price_per_day * days` for every variant.
    pub fn calculate_rental_cost(&self, days: u32) -> f64 {
        self.price_per_day * f64::from(days)
    }

    /// Brand, model and type, followed by the variant-specific detail.
    ///
    /// ```text
    /// Honda Civic (Car) - 5 seats
    /// Ford F-150 (Truck) - 1000.0 kg cargo capacity
    /// Trek Marlin (Bike) - Mountain bike
    /// ```
    pub fn describe(&self) -> String {
        let detail = match &self.kind {
            VehicleKind::Car { seating_capacity } => format!("{} seats", seating_capacity),
            VehicleKind::Truck { cargo_capacity_kg } => {
                format!("{} kg cargo capacity", format_decimal(*cargo_capacity_kg))
            }
            VehicleKind::Bike { bike_type } => format!("{} bike", bike_type),
        };
        format!(
            "{} {} ({}) - {}",
            self.brand,
            self.model,
            self.vehicle_type(),
            detail
        )
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Decimal rendering that always keeps a fractional digit ("90.0", not "90")
/// and never switches to exponent notation.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
