use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{InflationSeries, SalaryTable};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the salary table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – wide layout, one row per sector:
///   `sector,2000,2001,…` then `average,22948.0,25570.3,…`
/// * `.json` – `{ "first_year": 2000, "sectors": [{ "id": "average", "salaries": [...] }] }`
pub fn load_salary_table(path: &Path) -> Result<SalaryTable> {
    match extension(path).as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening salary CSV")?;
            parse_salary_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading salary JSON")?;
            parse_salary_json(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Load the inflation series from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – long layout: `year,inflation` then `2000,20.1` …
/// * `.json` – `{ "first_year": 2000, "rates": [...] }`
pub fn load_inflation_series(path: &Path) -> Result<InflationSeries> {
    match extension(path).as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening inflation CSV")?;
            parse_inflation_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading inflation JSON")?;
            parse_inflation_json(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// CSV parsers
// ---------------------------------------------------------------------------

/// Wide salary CSV: first header cell names the sector column, every
/// following header cell is a year. Years must be contiguous and ascending.
pub fn parse_salary_csv<R: Read>(input: R) -> Result<SalaryTable> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    if headers.len() < 2 {
        bail!("salary CSV needs a sector column and at least one year column");
    }
    let years: Vec<i32> = headers
        .iter()
        .skip(1)
        .map(|h| {
            h.trim()
                .parse::<i32>()
                .with_context(|| format!("year column '{h}' is not an integer"))
        })
        .collect::<Result<_>>()?;
    let first_year = contiguous_start(&years).context("salary CSV year columns")?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("salary CSV row {row_no}"))?;
        let sector = record
            .get(0)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .with_context(|| format!("salary CSV row {row_no}: empty sector id"))?
            .to_string();

        let values: Vec<f64> = record
            .iter()
            .skip(1)
            .enumerate()
            .map(|(j, cell)| {
                cell.trim().parse::<f64>().with_context(|| {
                    format!("salary CSV row {row_no}, year {}: '{cell}' is not a number",
                        first_year + j as i32)
                })
            })
            .collect::<Result<_>>()?;

        rows.push((sector, values));
    }

    SalaryTable::new(first_year, rows).context("building salary table")
}

/// Long inflation CSV: `year,inflation` pairs, years contiguous ascending.
pub fn parse_inflation_csv<R: Read>(input: R) -> Result<InflationSeries> {
    let mut reader = csv::Reader::from_reader(input);

    let mut years = Vec::new();
    let mut rates = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("inflation CSV row {row_no}"))?;
        let year: i32 = record
            .get(0)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("inflation CSV row {row_no}: bad year"))?;
        let rate: f64 = record
            .get(1)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("inflation CSV row {row_no}: bad rate"))?;
        years.push(year);
        rates.push(rate);
    }

    let first_year = contiguous_start(&years).context("inflation CSV year rows")?;
    InflationSeries::new(first_year, rates).context("building inflation series")
}

/// Years must form one ascending run with no gaps; returns the first year.
fn contiguous_start(years: &[i32]) -> Result<i32> {
    let first = *years.first().context("no years present")?;
    for (i, &year) in years.iter().enumerate() {
        if year != first + i as i32 {
            bail!("years are not contiguous: expected {}, got {year}", first + i as i32);
        }
    }
    Ok(first)
}

// ---------------------------------------------------------------------------
// JSON parsers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SalaryJson {
    first_year: i32,
    sectors: Vec<SectorJson>,
}

#[derive(Debug, Deserialize)]
struct SectorJson {
    id: String,
    salaries: Vec<f64>,
}

pub fn parse_salary_json(text: &str) -> Result<SalaryTable> {
    let parsed: SalaryJson = serde_json::from_str(text).context("parsing salary JSON")?;
    let rows = parsed
        .sectors
        .into_iter()
        .map(|s| (s.id, s.salaries))
        .collect();
    SalaryTable::new(parsed.first_year, rows).context("building salary table")
}

#[derive(Debug, Deserialize)]
struct InflationJson {
    first_year: i32,
    rates: Vec<f64>,
}

pub fn parse_inflation_json(text: &str) -> Result<InflationSeries> {
    let parsed: InflationJson = serde_json::from_str(text).context("parsing inflation JSON")?;
    InflationSeries::new(parsed.first_year, parsed.rates).context("building inflation series")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_salary_csv_round_trips() {
        let csv = "\
sector,2000,2001,2002
average,100.0,110.0,121.0
mining,200,210,220
";
        let table = parse_salary_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.min_year(), 2000);
        assert_eq!(table.max_year(), 2002);
        assert_eq!(table.sector_ids(), &["average", "mining"]);
        assert_eq!(table.salary("mining", 2002), Some(220.0));
    }

    #[test]
    fn salary_csv_rejects_year_gaps() {
        let csv = "sector,2000,2002\naverage,1,2\n";
        let err = parse_salary_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("year columns"));
    }

    #[test]
    fn salary_csv_reports_bad_cells_with_position() {
        let csv = "sector,2000,2001\naverage,100,abc\n";
        let err = format!("{:#}", parse_salary_csv(csv.as_bytes()).unwrap_err());
        assert!(err.contains("year 2001"));
        assert!(err.contains("abc"));
    }

    #[test]
    fn long_inflation_csv_round_trips() {
        let csv = "year,inflation\n2000,20.1\n2001,18.8\n2002,15.06\n";
        let series = parse_inflation_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.min_year(), 2000);
        assert_eq!(series.rate(2002), Some(15.06));
    }

    #[test]
    fn inflation_csv_rejects_unordered_years() {
        let csv = "year,inflation\n2001,18.8\n2000,20.1\n";
        assert!(parse_inflation_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn json_formats_round_trip() {
        let salary = r#"{
            "first_year": 2000,
            "sectors": [
                { "id": "average", "salaries": [100.0, 110.0] },
                { "id": "mining", "salaries": [200.0, 210.0] }
            ]
        }"#;
        let table = parse_salary_json(salary).unwrap();
        assert_eq!(table.salary("average", 2001), Some(110.0));

        let inflation = r#"{ "first_year": 2000, "rates": [20.1, 18.8] }"#;
        let series = parse_inflation_json(inflation).unwrap();
        assert_eq!(series.rate(2000), Some(20.1));
    }

    #[test]
    fn missing_average_row_is_reported() {
        let csv = "sector,2000,2001\nmining,200,210\n";
        let err = format!("{:#}", parse_salary_csv(csv.as_bytes()).unwrap_err());
        assert!(err.contains("average"));
    }
}
