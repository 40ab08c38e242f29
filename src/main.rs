use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use log::info;

use salary_scope::data::loader;
use salary_scope::{
    compute_correlation_summary, compute_growth, compute_real_salary, InflationSeries,
    SalaryTable, Selection,
};

// ---------------------------------------------------------------------------
// Thin text front-end over the analytics core
// ---------------------------------------------------------------------------
//
// All numbers printed here come straight out of the library; this binary
// only parses arguments and formats tables.

struct Args {
    salaries: PathBuf,
    inflation: PathBuf,
    start_year: i32,
    end_year: i32,
    sectors: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let usage = "usage: salary-scope <salaries.{csv,json}> <inflation.{csv,json}> <start-year> <end-year> [sector...]";

    let (Some(salaries), Some(inflation), Some(start), Some(end)) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        bail!("{usage}");
    };

    Ok(Args {
        salaries: PathBuf::from(salaries),
        inflation: PathBuf::from(inflation),
        start_year: start.parse().with_context(|| format!("bad start year '{start}'"))?,
        end_year: end.parse().with_context(|| format!("bad end year '{end}'"))?,
        sectors: args.collect(),
    })
}

fn run(args: &Args) -> Result<()> {
    let salaries: SalaryTable =
        loader::load_salary_table(&args.salaries).context("loading salary table")?;
    let inflation: InflationSeries =
        loader::load_inflation_series(&args.inflation).context("loading inflation series")?;
    info!(
        "loaded {} sectors over {}..={}",
        salaries.sector_ids().len(),
        salaries.min_year(),
        salaries.max_year()
    );

    let selection = Selection::new(&salaries, &args.sectors, args.start_year, args.end_year)?;

    let growth = compute_growth(&salaries, &selection)?;
    let real = compute_real_salary(&salaries, &inflation, &selection)?;
    let summary = compute_correlation_summary(&growth, &inflation, &selection)?;

    println!(
        "Period {}..={}, sectors: {}",
        selection.start_year(),
        selection.end_year(),
        selection.sectors().join(", ")
    );

    println!("\nAnnual inflation, %:");
    for year in selection.start_year()..=selection.end_year() {
        if let Some(rate) = inflation.rate(year) {
            println!("  {year}  {rate:6.2}");
        }
    }

    println!("\nGrowth vs. prior-year inflation (ranked by mean growth):");
    println!("  {:<30} {:>12} {:>14}", "sector", "correlation", "mean growth %");
    for row in summary.rows() {
        println!(
            "  {:<30} {:>12.4} {:>14.2}",
            row.sector, row.correlation, row.mean_growth_pct
        );
    }

    println!(
        "\nReal salaries in {}-year purchasing power:",
        selection.end_year() + 1
    );
    print!("  {:<30}", "sector");
    for year in real.first_year()..=real.last_year() {
        print!(" {year:>9}");
    }
    println!();
    for (sector, values) in real.iter() {
        print!("  {sector:<30}");
        for value in values {
            print!(" {value:>9.1}");
        }
        println!();
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Validation and computation failures are per-request messages,
            // not panics.
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
