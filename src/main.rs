//! Insurance Termination CLI
//!
//! Prints the earliest possible termination date of a non-life insurance
//! contract concluded by a consumer.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use insurance_termination::calendar::parse_date;
use insurance_termination::{TerminationCalculator, TerminationRequest};

#[derive(Parser, Debug)]
#[command(name = "insurance_termination")]
#[command(
    about = "Earliest possible termination date of a non-life insurance contract",
    long_about = "Provides the earliest possible termination date of a non-life insurance contract \
                  based on the starting date of the contract, the earliest possible starting date of \
                  the notice period (today if not specified), and the earliest expected termination \
                  date of the contract. It applies only to non-life insurance contracts concluded by \
                  consumers that started or were renewed after April 4, 2014."
)]
struct Cli {
    /// Date the contract with the insurer first took effect (YYYY-MM-DD)
    #[arg(value_name = "CONTRACT_START", value_parser = parse_date)]
    contract_start: NaiveDate,

    /// Earliest termination date wanted by the policyholder (YYYY-MM-DD)
    #[arg(short = 't', long, value_name = "DATE", value_parser = parse_date)]
    earliest_expected_termination: Option<NaiveDate>,

    /// First date at which notice can be given for termination (YYYY-MM-DD, default: today)
    #[arg(short = 'r', long, value_name = "DATE", value_parser = parse_date)]
    reference_date: Option<NaiveDate>,

    /// Emit the full assessment as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(error) = real_main() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();

    let request = TerminationRequest {
        contract_id: None,
        contract_start: cli.contract_start,
        earliest_expected_termination: cli.earliest_expected_termination,
        reference_date: cli.reference_date,
    };

    let assessment = TerminationCalculator::new().assess(&request)?;

    if cli.json {
        let payload = serde_json::to_string_pretty(&assessment)
            .context("failed to serialize termination assessment")?;
        println!("{payload}");
    } else {
        println!(
            "Earliest possible termination date: {}.",
            assessment.termination_date
        );
    }

    Ok(())
}
