//! Vehicle registration wizard and listing.

use tracing::info;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::prompts;
use crate::cli::registry::CommandEntry;
use toll_core::CoreError;
use toll_domain::{Vehicle, VehicleCategory};

const PAY_PROMPT: &str = "Do you want to pay tax for this vehicle? (yes/no): ";
const PAY_RETRY: &str = "Invalid input. Please type 'yes' to pay tax or 'no' to skip tax.";
const PAY_REQUIRED: &str = "The vehicle is registered. Please record its tax decision.";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add a new vehicle and record its tax decision",
            "add [car|bike|heavy]",
            cmd_add,
        )
        .with_alias("1"),
        CommandEntry::new("list", "List registered vehicles", "list", cmd_list),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let selection = match args.first() {
        Some(raw) => parse_category(raw),
        None => {
            io::print_info("Let's add a new vehicle!");
            io::print_info("Choose the type of vehicle to add:");
            for (index, category) in VehicleCategory::ALL.iter().enumerate() {
                io::print_info(format!("{}. {}", index + 1, category));
            }
            let choice = prompts::read_raw(context.input.as_mut(), "Vehicle type: ")?;
            VehicleCategory::from_menu_choice(&choice).map_err(CoreError::from)
        }
    };
    let category = match selection {
        Ok(category) => category,
        Err(err) => {
            tracing::debug!(error = %err, "vehicle type rejected");
            io::print_error("Invalid vehicle type. Returning to main menu.");
            return Ok(());
        }
    };

    let input = context.input.as_mut();
    let registration_number = prompts::read_alphanumeric(input, "registration number")?;
    let model = prompts::read_letters(input, "model")?;
    let brand = prompts::read_letters(input, "brand")?;
    let base_price = prompts::read_decimal(input, "Enter Base Price: ")?;

    let id = context
        .catalog
        .register_vehicle(registration_number, model, brand, base_price, category)
        .id;
    info!(id, %category, "vehicle added");
    io::print_success(format!("Vehicle #{} registered as {}.", id, category));

    if read_pay_decision(context)? {
        let amount = context.catalog.pay_tax(id)?;
        io::print_success("Tax paid successfully.");
        io::print_info(format!("Charged {}.", context.config.format_amount(amount)));
    } else {
        context.catalog.pass_without_paying(id)?;
        io::print_warning("Vehicle passed without paying tax.");
    }
    Ok(())
}

fn parse_category(raw: &str) -> Result<VehicleCategory, CoreError> {
    Ok(raw.parse::<VehicleCategory>()?)
}

/// Asks until the operator answers; an interrupt cannot leave a registered vehicle undecided.
fn read_pay_decision(context: &mut ShellContext) -> Result<bool, CommandError> {
    loop {
        match prompts::read_choice(
            context.input.as_mut(),
            PAY_PROMPT,
            &["yes", "no"],
            PAY_RETRY,
        ) {
            Ok(answer) => return Ok(answer == "yes"),
            Err(CommandError::Cancelled) => io::print_warning(PAY_REQUIRED),
            Err(err) => return Err(err),
        }
    }
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let vehicles = context.catalog.vehicles();
    if vehicles.is_empty() {
        io::print_info("No vehicles registered yet.");
        return Ok(());
    }

    output::section("Registered vehicles");
    io::print_info(format!(
        "{:<4} {:<12} {:<14} {:<14} {:<14} {:>12}  {}",
        "ID", "Reg No", "Brand", "Model", "Category", "Base Price", "Tax"
    ));
    for vehicle in vehicles {
        io::print_info(format_row(vehicle, &context.config.currency_symbol));
    }
    Ok(())
}

fn format_row(vehicle: &Vehicle, currency_symbol: &str) -> String {
    let tax = match vehicle.disposition {
        Some(disposition) => disposition.to_string(),
        None => "Pending".to_string(),
    };
    format!(
        "{:<4} {:<12} {:<14} {:<14} {:<14} {:>12}  {}",
        vehicle.id,
        vehicle.registration_number,
        vehicle.brand,
        vehicle.model,
        vehicle.category,
        format!("{}{:.2}", currency_symbol, vehicle.base_price),
        tax
    )
}
