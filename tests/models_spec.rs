use std::sync::Arc;

use speculate2::speculate;
use vehicle_rental::*;

speculate! {
    describe "vehicle" {
        it "charges price per day times days for every variant" {
            let vehicles = vec![
                Vehicle::car("Civic", "Honda", 30.0, 5),
                Vehicle::truck("F-150", "Ford", 80.5, 1000.0),
                Vehicle::bike("Marlin", "Trek", 12.25, "Mountain"),
            ];

            for vehicle in &vehicles {
                for days in [0u32, 1, 7, 30] {
                    assert_eq!(
                        vehicle.calculate_rental_cost(days),
                        vehicle.price_per_day * days as f64
                    );
                }
            }
        }

        it "exposes its type tag" {
            assert_eq!(Vehicle::car("Civic", "Honda", 30.0, 5).vehicle_type(), VehicleType::Car);
            assert_eq!(Vehicle::truck("F-150", "Ford", 80.0, 900.0).vehicle_type(), VehicleType::Truck);
            assert_eq!(Vehicle::bike("Marlin", "Trek", 15.0, "Road").vehicle_type().as_str(), "Bike");
        }

        it "matches a requested type ignoring case" {
            let truck = Vehicle::truck("F-150", "Ford", 80.0, 900.0);
            assert!(truck.matches_type("truck"));
            assert!(truck.matches_type("TRUCK"));
            assert!(!truck.matches_type("car"));
        }

        it "deserializes from a tagged fleet entry" {
            let json = r#"{
                "model": "Transit",
                "brand": "Ford",
                "price_per_day": 95.0,
                "kind": { "type": "truck", "cargo_capacity_kg": 1500.0 }
            }"#;

            let vehicle: Vehicle = serde_json::from_str(json).expect("Failed to parse vehicle");
            assert_eq!(vehicle, Vehicle::truck("Transit", "Ford", 95.0, 1500.0));
            assert_eq!(vehicle.describe(), "Ford Transit (Truck) - 1500.0 kg cargo capacity");
        }
    }

    describe "customer" {
        before {
            let mut customer = Customer::new(1, "Alice", 30);
            let civic = Arc::new(Vehicle::car("Civic", "Honda", 30.0, 5));
        }

        it "displays name and id" {
            assert_eq!(customer.to_string(), "Customer: Alice (ID: 1)");
        }

        it "appends exactly one entry per rental and returns it" {
            let rental_id = customer.rent_vehicle(Arc::clone(&civic), 3).id();
            assert_eq!(customer.rental_history().len(), 1);
            assert_eq!(customer.rental_history()[0].id(), rental_id);

            let second_id = customer.rent_vehicle(Arc::clone(&civic), 1).id();
            assert_eq!(customer.rental_history().len(), 2);
            assert_eq!(customer.rental_history()[1].id(), second_id);
            assert_ne!(rental_id, second_id);
        }

        it "sums the cost of its history" {
            customer.rent_vehicle(Arc::clone(&civic), 3);
            customer.rent_vehicle(Arc::clone(&civic), 2);
            assert_eq!(customer.total_spent(), 150.0);
        }
    }

    describe "rental_transaction" {
        it "computes the cost when it is created" {
            let mut customer = Customer::new(2, "Bob", 45);
            let truck = Arc::new(Vehicle::truck("F-150", "Ford", 80.0, 1000.0));

            let rental = customer.rent_vehicle(truck, 2);
            assert_eq!(rental.total_cost(), 160.0);
            assert_eq!(rental.customer_name(), "Bob");
            assert_eq!(
                rental.to_string(),
                "Bob rented Ford F-150 (Truck) - 1000.0 kg cargo capacity for 2 days. Total cost: $160.0"
            );
        }

        it "shares the vehicle with the caller" {
            let mut customer = Customer::new(2, "Bob", 45);
            let bike = Arc::new(Vehicle::bike("Marlin", "Trek", 15.0, "Mountain"));

            customer.rent_vehicle(Arc::clone(&bike), 1);
            customer.rent_vehicle(Arc::clone(&bike), 4);

            assert_eq!(Arc::strong_count(&bike), 3);
        }
    }
}
