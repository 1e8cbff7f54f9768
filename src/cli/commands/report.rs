//! Read-only views over the aggregate counters.

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("total", "View total vehicles", "total", cmd_total).with_alias("2"),
        CommandEntry::new(
            "paying",
            "View total tax paying vehicles",
            "paying",
            cmd_paying,
        )
        .with_alias("3"),
        CommandEntry::new(
            "non-paying",
            "View total non-tax paying vehicles",
            "non-paying",
            cmd_non_paying,
        )
        .with_alias("4"),
        CommandEntry::new(
            "collected",
            "View total tax collected",
            "collected",
            cmd_collected,
        )
        .with_alias("5"),
        CommandEntry::new(
            "summary",
            "Show every counter at once",
            "summary [--json]",
            cmd_summary,
        ),
    ]
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.catalog.snapshot();
    io::print_info(format!("Total Vehicles: {}", snapshot.total_vehicles));
    Ok(())
}

fn cmd_paying(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.catalog.snapshot();
    io::print_info(format!(
        "Total Tax Paying Vehicles: {}",
        snapshot.total_tax_paying_vehicles
    ));
    Ok(())
}

fn cmd_non_paying(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.catalog.snapshot();
    io::print_info(format!(
        "Total Non-Tax Paying Vehicles: {}",
        snapshot.total_non_tax_paying_vehicles
    ));
    Ok(())
}

fn cmd_collected(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = context.catalog.snapshot();
    io::print_info(format!(
        "Total Tax Collected: {}",
        context.config.format_amount(snapshot.total_tax_collected)
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let snapshot = context.catalog.snapshot();
    match args.first().copied() {
        Some("--json") => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "Unknown option `{}`. Usage: summary [--json]",
            other
        ))),
        None => {
            output::section("Summary");
            io::print_info(format!("Total Vehicles: {}", snapshot.total_vehicles));
            io::print_info(format!(
                "Total Tax Paying Vehicles: {}",
                snapshot.total_tax_paying_vehicles
            ));
            io::print_info(format!(
                "Total Non-Tax Paying Vehicles: {}",
                snapshot.total_non_tax_paying_vehicles
            ));
            io::print_info(format!(
                "Awaiting Decision: {}",
                snapshot.pending_vehicles()
            ));
            io::print_info(format!(
                "Total Tax Collected: {}",
                context.config.format_amount(snapshot.total_tax_collected)
            ));
            Ok(())
        }
    }
}
