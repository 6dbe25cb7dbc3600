//! Assess every contract in a CSV file
//!
//! Usage: run_batch contracts.csv -o terminations.csv [--today 2025-11-01]

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use insurance_termination::calendar::parse_date;
use insurance_termination::contract::load_requests;
use insurance_termination::{
    Clock, FixedClock, SystemClock, TerminationCalculator, TerminationRequest,
};
use log::info;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch")]
#[command(about = "Assess the earliest termination date of every contract in a CSV file", long_about = None)]
struct Cli {
    /// CSV with columns ContractId,ContractStart,EarliestExpectedTermination,ReferenceDate
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "terminations.csv")]
    output: PathBuf,

    /// Date used as today for rows without a reference date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    today: Option<NaiveDate>,
}

/// One output line; assessment columns are empty when the row failed
#[derive(Debug, serde::Serialize)]
struct OutputRow {
    #[serde(rename = "ContractId")]
    contract_id: Option<String>,
    #[serde(rename = "ContractStart")]
    contract_start: NaiveDate,
    #[serde(rename = "EarliestExpectedTermination")]
    earliest_expected_termination: Option<NaiveDate>,
    #[serde(rename = "ReferenceDate")]
    reference_date: Option<NaiveDate>,
    #[serde(rename = "Regime")]
    regime: Option<&'static str>,
    #[serde(rename = "LatestRenewal")]
    latest_renewal: Option<NaiveDate>,
    #[serde(rename = "TerminationDate")]
    termination_date: Option<NaiveDate>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

fn assess_all<C: Clock>(
    calculator: &TerminationCalculator<C>,
    requests: &[TerminationRequest],
) -> Vec<OutputRow> {
    requests
        .par_iter()
        .map(|request| match calculator.assess(request) {
            Ok(assessment) => OutputRow {
                contract_id: assessment.contract_id,
                contract_start: assessment.contract_start,
                earliest_expected_termination: Some(assessment.earliest_expected_termination),
                reference_date: Some(assessment.reference_date),
                regime: Some(assessment.regime.as_str()),
                latest_renewal: Some(assessment.latest_renewal),
                termination_date: Some(assessment.termination_date),
                error: None,
            },
            Err(e) => OutputRow {
                contract_id: request.contract_id.clone(),
                contract_start: request.contract_start,
                earliest_expected_termination: request.earliest_expected_termination,
                reference_date: request.reference_date,
                regime: None,
                latest_renewal: None,
                termination_date: None,
                error: Some(format!("{}: {}", e.kind().as_str(), e)),
            },
        })
        .collect()
}

fn write_rows(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
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
    let start = Instant::now();

    let requests = load_requests(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    info!("Loaded {} contracts in {:?}", requests.len(), start.elapsed());

    // Pin "today" once so every row of the run sees the same date
    let today = cli.today.unwrap_or_else(|| SystemClock.today());
    let calculator = TerminationCalculator::with_clock(FixedClock(today));
    let rows = assess_all(&calculator, &requests);

    let failures = rows.iter().filter(|row| row.error.is_some()).count();
    write_rows(&cli.output, &rows)?;

    println!(
        "Assessed {} contracts ({} failed) in {:?}, written to {}",
        rows.len(),
        failures,
        start.elapsed(),
        cli.output.display()
    );
    Ok(())
}
