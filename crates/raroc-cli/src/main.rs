mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::pricing::{PaymentArgs, ScheduleArgs, SummaryArgs};
use commands::ratings::RatingsArgs;

/// RAROC commercial term-loan pricing calculations
#[derive(Parser)]
#[command(
    name = "raroc",
    version,
    about = "RAROC commercial term-loan cash-flow calculations",
    long_about = "A CLI for pricing commercial term loans with decimal precision. \
                  Builds level-pay amortization schedules with funds-transfer-pricing \
                  cost, fee lines, and present values, and reduces them to \
                  portfolio-style totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed monthly principal-and-interest payment
    Payment(PaymentArgs),
    /// Month-by-month amortization and cash-flow schedule
    Schedule(ScheduleArgs),
    /// Nominal and present-value totals over the schedule
    Summary(SummaryArgs),
    /// PD / LGD rating scale lookups
    Ratings(RatingsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::pricing::run_payment(args),
        Commands::Schedule(args) => commands::pricing::run_schedule(args),
        Commands::Summary(args) => commands::pricing::run_summary(args),
        Commands::Ratings(args) => commands::ratings::run_ratings(args),
        Commands::Version => {
            println!("raroc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
