//! Plain-text rendering of the registry for console output.

use crate::models::{format_decimal, Customer};
use crate::registry::RentalSystem;

const EMPTY_HISTORY: &str = "No rentals yet.";

/// One line per registered vehicle, in registration order.
///
/// Example output:
/// ```text
/// Honda Civic (Car) - 5 seats
/// Ford F-150 (Truck) - 1000.0 kg cargo capacity
/// ```
pub fn render_vehicle_list(system: &RentalSystem) -> String {
    let mut output = String::new();
    for line in system.list_vehicles() {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Render a customer's rental history, oldest first.
///
/// Example output:
/// ```text
/// Customer: Alice (ID: 1)
///   1. Alice rented Honda Civic (Car) - 5 seats for 3 days. Total cost: $90.0
///   Total spent: $90.0
/// ```
pub fn render_history(customer: &Customer) -> String {
    let mut output = format!("{}\n", customer);

    let history = customer.rental_history();
    if history.is_empty() {
        output.push_str("  ");
        output.push_str(EMPTY_HISTORY);
        output.push('\n');
        return output;
    }

    for (i, rental) in history.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, rental));
    }
    output.push_str(&format!(
        "  Total spent: ${}\n",
        format_decimal(customer.total_spent())
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vehicle;

    fn make_system() -> RentalSystem {
        let mut system = RentalSystem::new();
        system
            .add_vehicle(Vehicle::car("Civic", "Honda", 30.0, 5))
            .unwrap();
        system
            .add_vehicle(Vehicle::truck("F-150", "Ford", 80.0, 1000.0))
            .unwrap();
        system.add_customer(Customer::new(1, "Alice", 30)).unwrap();
        system
    }

    #[test]
    fn test_empty_vehicle_list() {
        let system = RentalSystem::new();
        assert_eq!(render_vehicle_list(&system), "");
    }

    #[test]
    fn test_vehicle_list_in_registration_order() {
        let output = render_vehicle_list(&make_system());
        assert_eq!(
            output,
            "Honda Civic (Car) - 5 seats\nFord F-150 (Truck) - 1000.0 kg cargo capacity\n"
        );
    }

    #[test]
    fn test_empty_history() {
        let customer = Customer::new(7, "Carol", 52);
        assert_eq!(
            render_history(&customer),
            "Customer: Carol (ID: 7)\n  No rentals yet.\n"
        );
    }

    #[test]
    fn test_history_with_rentals() {
        let mut system = make_system();
        system.process_rental(1, "car", 3).unwrap();
        system.process_rental(1, "truck", 1).unwrap();

        let output = render_history(system.customer(1).unwrap());
        let expected = "Customer: Alice (ID: 1)\n  \
            1. Alice rented Honda Civic (Car) - 5 seats for 3 days. Total cost: $90.0\n  \
            2. Alice rented Ford F-150 (Truck) - 1000.0 kg cargo capacity for 1 days. Total cost: $80.0\n  \
            Total spent: $170.0\n";
        assert_eq!(output, expected);
    }
}
