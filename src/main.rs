use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vehicle_rental::{report, FleetConfig, RentalSystem};

#[derive(Parser)]
#[command(name = "rentals")]
#[command(about = "In-memory vehicle rental registry")]
struct Cli {
    /// Fleet file (JSON). Falls back to $RENTAL_FLEET, then the config directory.
    #[arg(long, global = true)]
    fleet: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every registered vehicle
    Vehicles,
    /// List every registered customer
    Customers,
    /// Rent the first available vehicle of a type
    Rent {
        /// Customer ID
        #[arg(short, long)]
        customer: u32,

        /// Vehicle type (car, truck, bike; case-insensitive)
        #[arg(short = 't', long)]
        vehicle_type: String,

        /// Number of rental days
        #[arg(short, long)]
        days: u32,
    },
    /// Run the scripted walkthrough against the fleet
    Demo,
    /// Write the built-in fleet to --fleet, or to the config directory
    InitFleet {
        /// Overwrite an existing fleet file
        #[arg(long)]
        force: bool,
    },
}

/// Logs go to stderr so stdout only carries command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "vehicle_rental=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Vehicles) => {
            let system = load_registry(cli.fleet.as_deref())?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(system.vehicles())?);
            } else {
                print!("{}", report::render_vehicle_list(&system));
            }
        }
        Some(Commands::Customers) => {
            let system = load_registry(cli.fleet.as_deref())?;
            if cli.json {
                let customers: Vec<_> = system.customers().collect();
                println!("{}", serde_json::to_string_pretty(&customers)?);
            } else {
                for customer in system.customers() {
                    println!("{}", customer);
                }
            }
        }
        Some(Commands::Rent {
            customer,
            vehicle_type,
            days,
        }) => {
            let mut system = load_registry(cli.fleet.as_deref())?;
            rent(&mut system, customer, &vehicle_type, days, cli.json)?;
        }
        Some(Commands::InitFleet { force }) => {
            let path = match cli.fleet {
                Some(path) => path,
                None => FleetConfig::default_path()?,
            };
            init_fleet(&path, force)?;
        }
        Some(Commands::Demo) | None => {
            let mut system = load_registry(cli.fleet.as_deref())?;
            run_demo(&mut system)?;
        }
    }

    Ok(())
}

fn load_registry(fleet: Option<&Path>) -> anyhow::Result<RentalSystem> {
    FleetConfig::resolve(fleet)?.into_registry()
}

fn init_fleet(path: &Path, force: bool) -> anyhow::Result<()> {
    FleetConfig::write_builtin(path, force)?;
    println!("Wrote fleet to {}", path.display());
    Ok(())
}

/// Not-found outcomes are reported on stdout and are not fatal.
fn rent(
    system: &mut RentalSystem,
    customer_id: u32,
    vehicle_type: &str,
    days: u32,
    json: bool,
) -> anyhow::Result<()> {
    match system.process_rental(customer_id, vehicle_type, days) {
        Ok(rental) if json => println!("{}", serde_json::to_string_pretty(rental)?),
        Ok(rental) => println!("{}", rental),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn run_demo(system: &mut RentalSystem) -> anyhow::Result<()> {
    println!("Available vehicles:");
    print!("{}", report::render_vehicle_list(system));
    println!();

    rent(system, 1, "car", 3, false)?;
    rent(system, 2, "TRUCK", 2, false)?;
    rent(system, 1, "bike", 1, false)?;
    rent(system, 99, "car", 3, false)?;
    rent(system, 2, "boat", 2, false)?;
    println!();

    println!("Rental history:");
    for customer in system.customers() {
        print!("{}", report::render_history(customer));
    }

    Ok(())
}
