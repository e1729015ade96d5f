use clap::Parser;
use std::process;
use vehicle_csv_import::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, stopping...");
                Err(vehicle_csv_import::ImportError::processing_interrupted(
                    "Validation interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(summary) if summary.all_passed() => process::exit(0),
        Ok(_) => process::exit(1),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Vehicle CSV Import - EV marketplace bulk upload checker");
    println!("=======================================================");
    println!();
    println!("Validate vendor inventory CSV files with the same rules the");
    println!("marketplace upload applies, before uploading them.");
    println!();
    println!("USAGE:");
    println!("    vehicle-csv-import <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate    Parse CSV files and report errors and warnings by row");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Check a single file:");
    println!("    vehicle-csv-import validate inventario.csv");
    println!();
    println!("    # Check every file in a folder and emit JSON:");
    println!("    vehicle-csv-import validate 'lotes/*.csv' --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    vehicle-csv-import <COMMAND> --help");
}
