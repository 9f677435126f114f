//! Initial fleet: the vehicles and customers a registry starts with.
//!
//! The fleet is read from a JSON file. The file is chosen in this order:
//! - an explicit path (e.g. the `--fleet` CLI option)
//! - the `RENTAL_FLEET` environment variable
//! - `fleet.json` in the user's config directory, if it exists
//!
//! Without any of these the built-in seed from [`FleetConfig::builtin`] is used.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::models::{Customer, NewCustomer, Vehicle};
use crate::registry::RentalSystem;

const APP_NAME: &str = "vehicle-rental";
const FLEET_FILE: &str = "fleet.json";
const FLEET_ENV: &str = "RENTAL_FLEET";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Vehicles in registration order.
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub customers: Vec<NewCustomer>,
}

impl FleetConfig {
    /// The fleet used when no fleet file is configured.
    pub fn builtin() -> Self {
        Self {
            vehicles: vec![
                Vehicle::car("Civic", "Honda", 30.0, 5),
                Vehicle::car("Model 3", "Tesla", 75.0, 5),
                Vehicle::truck("F-150", "Ford", 80.0, 1000.0),
                Vehicle::bike("Marlin", "Trek", 15.0, "Mountain"),
            ],
            customers: vec![
                NewCustomer {
                    id: 1,
                    name: "Alice".to_string(),
                    age: 30,
                },
                NewCustomer {
                    id: 2,
                    name: "Bob".to_string(),
                    age: 45,
                },
            ],
        }
    }

    /// Load a fleet from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fleet file {}", path.display()))?;

        let fleet = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse fleet file {}", path.display()))?;

        Ok(fleet)
    }

    /// Write the fleet as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create fleet directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize fleet")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write fleet file {}", path.display()))?;

        Ok(())
    }

    /// Write the built-in fleet to `path` as a starting point for editing.
    /// An existing file is only replaced when `force` is set.
    pub fn write_builtin(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "Fleet file {} already exists (use --force to overwrite)",
                path.display()
            );
        }

        Self::builtin().save(path)?;
        tracing::info!(path = %path.display(), "Wrote built-in fleet");
        Ok(())
    }

    /// Pick the fleet source: explicit path, then `RENTAL_FLEET`, then the
    /// default path if present, else the built-in seed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(FLEET_ENV) {
            tracing::debug!(path = %path, "Loading fleet from {}", FLEET_ENV);
            return Self::load(Path::new(&path));
        }

        if let Ok(path) = Self::default_path() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "Loading fleet from config directory");
                return Self::load(&path);
            }
        }

        tracing::debug!("No fleet file configured, using built-in fleet");
        Ok(Self::builtin())
    }

    pub fn default_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        path.push(APP_NAME);
        path.push(FLEET_FILE);
        Ok(path)
    }

    /// Build a registry holding this fleet. Vehicles keep their file order.
    pub fn into_registry(self) -> Result<RentalSystem> {
        let mut system = RentalSystem::new();

        for vehicle in self.vehicles {
            system.add_vehicle(vehicle)?;
        }
        for customer in self.customers {
            system.add_customer(Customer::from(customer))?;
        }

        Ok(system)
    }
}
