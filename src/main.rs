use clap::Parser;
use shopmetrics::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Shopmetrics - TikTok Shop Report Processor");
    println!("==========================================");
    println!();
    println!("Normalize exported TikTok Shop performance spreadsheets and derive");
    println!("aggregate metrics and chart-ready series from them.");
    println!();
    println!("USAGE:");
    println!("    shopmetrics <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Ingest report workbooks and compute summary statistics");
    println!("    series      Derive chart-ready series from a single report workbook");
    println!("    inspect     Show sheet names, dimensions, and leading rows of a workbook");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Ingest all three report kinds and print the summary:");
    println!("    shopmetrics process \"Overview Report_20240101.xlsx\" \\");
    println!("                        \"Product Card Traffic_20240101.xlsx\" \\");
    println!("                        \"Products Card List_20240101.xlsx\"");
    println!();
    println!("    # Also write normalized copies as total.xlsx / producttotal.xlsx / products.xlsx:");
    println!("    shopmetrics process *.xlsx --export --output ./normalized");
    println!();
    println!("    # Emit conversion-rate series for charting:");
    println!("    shopmetrics series \"Product Card Traffic_20240101.xlsx\" --pretty");
    println!();
    println!("For detailed help on any command, use:");
    println!("    shopmetrics <COMMAND> --help");
}
