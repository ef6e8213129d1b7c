//! Project rent, buy 5% and buy 20% side by side
//!
//! Prints a summary table, per-year CSV, or JSON to stdout

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use rent_vs_buy::{
    projection::{HouseValueStart, YearRange},
    summarize, Assumptions, InputData, ProjectionConfig, ProjectionEngine, ProjectionResult,
    Scenario, Summary,
};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliHouseValueStart {
    FullCost,
    Zero,
}

impl From<CliHouseValueStart> for HouseValueStart {
    fn from(value: CliHouseValueStart) -> Self {
        match value {
            CliHouseValueStart::FullCost => HouseValueStart::FullCost,
            CliHouseValueStart::Zero => HouseValueStart::Zero,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliYearRange {
    Exclusive,
    Inclusive,
}

impl From<CliYearRange> for YearRange {
    fn from(value: CliYearRange) -> Self {
        match value {
            CliYearRange::Exclusive => YearRange::Exclusive,
            CliYearRange::Inclusive => YearRange::Inclusive,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(about = "Compare renting against buying with 5% or 20% down")]
struct Cli {
    #[arg(long, default_value_t = 138_000.0, help = "Cash on hand today")]
    starting_cash: f64,
    #[arg(long, default_value_t = 4_000.0, help = "Take-home income per month")]
    monthly_income: f64,
    #[arg(long, default_value_t = 2_000.0, help = "Current monthly rent")]
    current_rent: f64,
    #[arg(long, default_value_t = 700_000.0, help = "Purchase price of the home")]
    expected_house_cost: f64,
    #[arg(long, default_value_t = 30, help = "Projection horizon and mortgage term in years")]
    years: u32,
    #[arg(long, help = "Annual mortgage rate as a decimal, e.g. 0.065")]
    home_interest_rate: Option<f64>,
    #[arg(long, help = "Monthly property taxes, insurance and fees for owners")]
    monthly_taxes_and_fees: Option<f64>,
    #[arg(long, value_enum, default_value_t = CliHouseValueStart::FullCost)]
    house_value_start: CliHouseValueStart,
    #[arg(long, value_enum, default_value_t = CliYearRange::Exclusive)]
    year_range: CliYearRange,
    #[arg(long, default_value_t = 30, help = "Years over which the home counts as paid off")]
    equity_proxy_years: u32,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

/// One CSV line: a scenario-year
#[derive(Serialize)]
struct CsvRow {
    scenario: Scenario,
    year: u32,
    cash_balance: f64,
    house_value: f64,
    housing_cost: f64,
    annual_housing_spend: f64,
    monthly_income: f64,
    annual_net_investment: f64,
    net_worth: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a InputData,
    projections: &'a [ProjectionResult],
    summary: &'a Summary,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input = InputData {
        starting_cash: cli.starting_cash,
        monthly_income: cli.monthly_income,
        current_rent: cli.current_rent,
        expected_house_cost: cli.expected_house_cost,
        years: cli.years,
        home_interest_rate: cli.home_interest_rate,
        monthly_taxes_and_fees: cli.monthly_taxes_and_fees,
    };
    let config = ProjectionConfig {
        house_value_start: cli.house_value_start.into(),
        year_range: cli.year_range.into(),
        equity_proxy_years: cli.equity_proxy_years,
    };
    let engine = ProjectionEngine::new(Assumptions::standard(), config);

    let start = Instant::now();

    // Scenarios share nothing mutable, so order of evaluation does not matter
    let results: Vec<ProjectionResult> = Scenario::ALL
        .par_iter()
        .map(|&scenario| engine.project(&input, scenario))
        .collect::<Result<Vec<_>, _>>()
        .context("projection rejected the inputs")?;

    let summary = summarize(&results)?;
    log::info!("Projected {} scenarios in {:?}", results.len(), start.elapsed());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Table => write_table(&mut out, &input, &summary)?,
        OutputFormat::Csv => write_csv(&mut out, &results)?,
        OutputFormat::Json => {
            let report = JsonReport {
                input: &input,
                projections: &results,
                summary: &summary,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, input: &InputData, summary: &Summary) -> Result<()> {
    writeln!(out, "Rent vs Buy over {} years", input.years)?;
    writeln!(
        out,
        "{:<16} {:>18} {:>18} {:>18} {:>18}",
        "Scenario", "Final Cash", "Home Value", "Net Worth", "Behind Best"
    )?;
    for row in &summary.rows {
        writeln!(
            out,
            "{:<16} {:>18} {:>18} {:>18} {:>18}",
            row.scenario.label(),
            format_currency(row.final_cash),
            format_currency(row.final_home_value),
            format_currency(row.final_net_worth),
            format_currency(row.difference),
        )?;
    }

    let best: Vec<&str> = summary.best.iter().map(|s| s.label()).collect();
    if summary.is_tie() {
        writeln!(out, "\nTied best: {}", best.join(", "))?;
    } else {
        writeln!(out, "\nBest: {}", best.join(", "))?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, results: &[ProjectionResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for result in results {
        for snap in &result.snapshots {
            writer.serialize(CsvRow {
                scenario: result.scenario,
                year: snap.year,
                cash_balance: snap.cash_balance,
                house_value: snap.house_value,
                housing_cost: snap.housing_cost,
                annual_housing_spend: snap.annual_housing_spend,
                monthly_income: snap.monthly_income,
                annual_net_investment: snap.annual_net_investment,
                net_worth: snap.net_worth,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// $1,234,567.89 style, negatives as -$1,234.00
fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
