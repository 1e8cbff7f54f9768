mod common;

use common::{line, run_interactive, run_outcomes, run_script};
use toll_tax::cli::io::ReadOutcome;
use toll_tax::{AggregateCounters, TaxDisposition, VehicleCategory};

#[test]
fn single_car_paying_tax() {
    let context = run_script(&["1", "1", "AB123", "Sedan", "Toyota", "20000", "yes"]);

    assert_eq!(
        context.catalog.snapshot(),
        AggregateCounters {
            total_vehicles: 1,
            total_tax_paying_vehicles: 1,
            total_non_tax_paying_vehicles: 0,
            total_tax_collected: 2.0,
        }
    );
    let vehicle = context.catalog.vehicle(1).expect("vehicle stored");
    assert_eq!(vehicle.registration_number, "AB123");
    assert_eq!(vehicle.category, VehicleCategory::Car);
}

#[test]
fn bike_declines_then_heavy_vehicle_pays() {
    let context = run_script(&[
        "add", "2", "BK1", "Street", "Honda", "900.50", "no",
        "add", "3", "HV42", "Hauler", "Volvo", "150000", "YES",
    ]);

    assert_eq!(
        context.catalog.snapshot(),
        AggregateCounters {
            total_vehicles: 2,
            total_tax_paying_vehicles: 1,
            total_non_tax_paying_vehicles: 1,
            total_tax_collected: 4.0,
        }
    );
    assert_eq!(
        context.catalog.vehicle(1).and_then(|v| v.disposition),
        Some(TaxDisposition::PassedWithoutPaying)
    );
}

#[test]
fn mixed_categories_all_paying() {
    let context = run_script(&[
        "add car", "C1", "Sedan", "Toyota", "1", "yes",
        "add bike", "B1", "Scooter", "Vespa", "1", "yes",
        "add heavy", "H1", "Truck", "Scania", "1", "yes",
    ]);

    let snapshot = context.catalog.snapshot();
    assert_eq!(snapshot.total_tax_collected, 7.0);
    assert_eq!(snapshot.total_tax_paying_vehicles, 3);
}

#[test]
fn invalid_fields_are_reprompted() {
    let context = run_script(&[
        "1", "1", "AB-123", "AB123", "Model 3", "Model", "Toy0ta", "Toyota", "cheap", "100",
        "maybe", "no",
    ]);

    let vehicle = context.catalog.vehicle(1).expect("vehicle stored");
    assert_eq!(vehicle.model, "Model");
    assert_eq!(vehicle.brand, "Toyota");
    assert_eq!(vehicle.base_price, 100.0);
    assert_eq!(context.catalog.snapshot().total_non_tax_paying_vehicles, 1);
}

#[test]
fn invalid_vehicle_type_returns_to_menu() {
    let context = run_script(&["1", "7", "2", "add truck"]);

    assert!(context.catalog.is_empty());
    assert_eq!(context.last_command.as_deref(), Some("add truck"));
}

#[test]
fn unknown_commands_keep_the_shell_running() {
    let context = run_script(&[
        "9", "totl", "summary --json", "add bike", "Z9", "Cub", "Honda", "0", "no",
    ]);

    assert_eq!(context.catalog.len(), 1);
}

#[test]
fn exit_stops_reading_input() {
    let context = run_script(&["6", "1", "1", "AB1", "Sedan", "Toyota", "1", "yes"]);

    assert!(context.catalog.is_empty());
    assert!(!context.running);
}

#[test]
fn input_ending_mid_wizard_discards_the_vehicle() {
    let context = run_script(&["1", "1", "AB123", "Sedan"]);

    assert!(context.catalog.is_empty());
}

#[test]
fn interrupt_at_pay_question_asks_again() {
    let context = run_outcomes(vec![
        line("1"),
        line("1"),
        line("AB123"),
        line("Sedan"),
        line("Toyota"),
        line("1"),
        ReadOutcome::Interrupted,
        line("yes"),
        line("total"),
    ]);

    assert_eq!(context.catalog.pending().count(), 0);
    assert_eq!(context.catalog.snapshot().total_tax_paying_vehicles, 1);
    assert_eq!(context.last_command.as_deref(), Some("total"));
}

#[test]
fn interactive_continue_question_reprompts_then_stops_on_no() {
    let context = run_interactive(&[
        "2", "maybe", "y", "1", "1", "AB123", "Sedan", "Toyota", "5", "yes", "N", "total",
    ]);

    assert!(!context.running);
    assert_eq!(context.catalog.len(), 1);
    assert_eq!(context.catalog.snapshot().total_tax_paying_vehicles, 1);
    assert_eq!(context.last_command.as_deref(), Some("1"));
}

#[test]
fn interactive_end_of_input_at_continue_question_exits() {
    let context = run_interactive(&["2"]);

    assert!(!context.running);
    assert_eq!(context.last_command.as_deref(), Some("2"));
}
