use log::debug;

use crate::data::model::SalaryTable;
use crate::error::ComputationError;
use crate::selection::Selection;

// ---------------------------------------------------------------------------
// GrowthTable – year-over-year percent change per sector
// ---------------------------------------------------------------------------

/// Year-over-year percent salary growth per selected sector. The year axis
/// is `[start + 1, end]`: the first selected year has no predecessor inside
/// the window, so the table holds exactly `end − start` points per sector.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthTable {
    first_year: i32,
    sectors: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl GrowthTable {
    /// First year with a growth value, `selection.start_year() + 1`.
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last year with a growth value (inclusive).
    pub fn last_year(&self) -> i32 {
        self.first_year + self.rows[0].len() as i32 - 1
    }

    /// Sector ids in selection order (average first).
    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }

    /// Growth percent of `sector` in `year` vs. `year − 1`.
    pub fn growth(&self, sector: &str, year: i32) -> Option<f64> {
        let row = &self.rows[self.sectors.iter().position(|s| s == sector)?];
        let offset = year.checked_sub(self.first_year)?;
        if (0..row.len() as i32).contains(&offset) {
            Some(row[offset as usize])
        } else {
            None
        }
    }

    /// Iterate `(sector id, growth values)` rows in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.sectors
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }
}

// ---------------------------------------------------------------------------
// compute_growth
// ---------------------------------------------------------------------------

/// Derive the [`GrowthTable`] for a selection:
/// `growth(y) = (salary(y) − salary(y−1)) / salary(y−1) × 100`
/// for every year `y` in `(start, end]`.
///
/// A zero salary in any predecessor year makes growth undefined and fails
/// the whole computation; no default is ever substituted.
pub fn compute_growth(
    salaries: &SalaryTable,
    selection: &Selection,
) -> Result<GrowthTable, ComputationError> {
    let (start, end) = (selection.start_year(), selection.end_year());
    let mut rows = Vec::with_capacity(selection.sectors().len());

    for sector in selection.sectors() {
        let mut row = Vec::with_capacity((end - start) as usize);
        for year in start + 1..=end {
            let prev = lookup(salaries, sector, year - 1)?;
            let cur = lookup(salaries, sector, year)?;
            if prev == 0.0 {
                return Err(ComputationError::ZeroBaseSalary {
                    sector: sector.clone(),
                    year: year - 1,
                });
            }
            row.push((cur - prev) / prev * 100.0);
        }
        rows.push(row);
    }

    debug!(
        "growth: {} sectors over {}..={}",
        rows.len(),
        start + 1,
        end
    );

    Ok(GrowthTable {
        first_year: start + 1,
        sectors: selection.sectors().to_vec(),
        rows,
    })
}

fn lookup(salaries: &SalaryTable, sector: &str, year: i32) -> Result<f64, ComputationError> {
    salaries
        .salary(sector, year)
        .ok_or_else(|| ComputationError::MissingSalary {
            sector: sector.to_string(),
            year,
        })
}
