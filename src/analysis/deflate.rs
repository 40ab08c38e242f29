use log::debug;

use crate::data::model::{InflationSeries, SalaryTable};
use crate::error::ComputationError;
use crate::selection::Selection;

// ---------------------------------------------------------------------------
// RealSalaryTable – purchasing power anchored at end + 1
// ---------------------------------------------------------------------------

/// Real (inflation-deflated) salaries per selected sector over the selected
/// window `[start, end]`, restated in `(end + 1)` purchasing power.
#[derive(Debug, Clone, PartialEq)]
pub struct RealSalaryTable {
    first_year: i32,
    sectors: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl RealSalaryTable {
    /// First year of the window (inclusive).
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last year of the window (inclusive).
    pub fn last_year(&self) -> i32 {
        self.first_year + self.rows[0].len() as i32 - 1
    }

    /// Sector ids in selection order (average first).
    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }

    /// Real salary of `sector` in `year`.
    pub fn real_salary(&self, sector: &str, year: i32) -> Option<f64> {
        let row = &self.rows[self.sectors.iter().position(|s| s == sector)?];
        let offset = year.checked_sub(self.first_year)?;
        if (0..row.len() as i32).contains(&offset) {
            Some(row[offset as usize])
        } else {
            None
        }
    }

    /// Iterate `(sector id, real salaries)` rows in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.sectors
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }
}

// ---------------------------------------------------------------------------
// Compounding factors
// ---------------------------------------------------------------------------

/// Compounding factors for `[start, end]`, anchored one year past the end:
/// `factor(end + 1) = 1`, and walking backwards
/// `factor(y) = factor(y + 1) × (1 + inflation(y) / 100)`.
///
/// `inflation(y)` is the rate stepping year-`y` currency into year-`y + 1`
/// currency, so `factor(end)` alone restates `end` in `end + 1` terms. Only
/// rates for `[start, end]` are read; the anchor year itself never is, which
/// is what makes `end == max_year` legal.
pub fn compounding_factors(
    inflation: &InflationSeries,
    selection: &Selection,
) -> Result<Vec<f64>, ComputationError> {
    let (start, end) = (selection.start_year(), selection.end_year());
    let mut factors = vec![1.0; selection.n_years()];
    let mut acc = 1.0;

    for year in (start..=end).rev() {
        let rate = inflation
            .rate(year)
            .ok_or(ComputationError::MissingInflation { year })?;
        acc *= 1.0 + rate / 100.0;
        factors[(year - start) as usize] = acc;
    }
    Ok(factors)
}

// ---------------------------------------------------------------------------
// compute_real_salary
// ---------------------------------------------------------------------------

/// Deflate the selected nominal salaries into [`RealSalaryTable`] values:
/// `real(sector, y) = nominal(sector, y) × factor(y)`.
pub fn compute_real_salary(
    salaries: &SalaryTable,
    inflation: &InflationSeries,
    selection: &Selection,
) -> Result<RealSalaryTable, ComputationError> {
    let (start, end) = (selection.start_year(), selection.end_year());
    let factors = compounding_factors(inflation, selection)?;

    let mut rows = Vec::with_capacity(selection.sectors().len());
    for sector in selection.sectors() {
        let mut row = Vec::with_capacity(selection.n_years());
        for year in start..=end {
            let nominal =
                salaries
                    .salary(sector, year)
                    .ok_or_else(|| ComputationError::MissingSalary {
                        sector: sector.clone(),
                        year,
                    })?;
            row.push(nominal * factors[(year - start) as usize]);
        }
        rows.push(row);
    }

    debug!(
        "deflated {} sectors over {start}..={end}, anchor {}",
        rows.len(),
        end + 1
    );

    Ok(RealSalaryTable {
        first_year: start,
        sectors: selection.sectors().to_vec(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AVERAGE_SECTOR;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn fixtures() -> (SalaryTable, InflationSeries) {
        let salaries = SalaryTable::new(
            2000,
            vec![(AVERAGE_SECTOR.to_string(), vec![100.0, 110.0, 121.0])],
        )
        .unwrap();
        let inflation = InflationSeries::new(2000, vec![10.0, 10.0, 10.0]).unwrap();
        (salaries, inflation)
    }

    #[test]
    fn factors_compound_backwards_from_the_anchor() {
        let (salaries, inflation) = fixtures();
        let sel = Selection::new(&salaries, &[], 2000, 2002).unwrap();
        let factors = compounding_factors(&inflation, &sel).unwrap();

        // anchor 2003: factor(2002) = 1.10, then ×1.1 per step backwards
        assert!(close(factors[2], 1.10));
        assert!(close(factors[1], 1.21));
        assert!(close(factors[0], 1.331));
    }

    #[test]
    fn minimal_window_ties_out() {
        let salaries = SalaryTable::new(
            2000,
            vec![(AVERAGE_SECTOR.to_string(), vec![100.0, 110.0])],
        )
        .unwrap();
        let inflation = InflationSeries::new(2000, vec![5.0, 8.0]).unwrap();
        let sel = Selection::new(&salaries, &[], 2000, 2001).unwrap();
        let factors = compounding_factors(&inflation, &sel).unwrap();

        // factor(end) = 1 + inflation(end)/100; factor(start) compounds both
        assert!(close(factors[1], 1.08));
        assert!(close(factors[0], 1.08 * 1.05));
    }

    #[test]
    fn real_salaries_scale_nominals_per_year() {
        let (salaries, inflation) = fixtures();
        let sel = Selection::new(&salaries, &[], 2000, 2002).unwrap();
        let real = compute_real_salary(&salaries, &inflation, &sel).unwrap();

        assert_eq!(real.first_year(), 2000);
        assert_eq!(real.last_year(), 2002);
        assert!(close(real.real_salary("average", 2000).unwrap(), 133.1));
        assert!(close(real.real_salary("average", 2001).unwrap(), 110.0 * 1.21));
        assert!(close(real.real_salary("average", 2002).unwrap(), 121.0 * 1.10));
    }

    #[test]
    fn end_year_may_sit_on_the_axis_edge() {
        // anchor end+1 lies past the known axis; only rates up to end are read
        let (salaries, inflation) = fixtures();
        let sel = Selection::new(&salaries, &[], 2001, 2002).unwrap();
        assert!(compute_real_salary(&salaries, &inflation, &sel).is_ok());
    }

    #[test]
    fn missing_inflation_rate_fails_the_computation() {
        let (salaries, _) = fixtures();
        let short = InflationSeries::new(2000, vec![10.0, 10.0]).unwrap();
        let sel = Selection::new(&salaries, &[], 2000, 2002).unwrap();
        let err = compute_real_salary(&salaries, &short, &sel).unwrap_err();
        assert!(matches!(err, ComputationError::MissingInflation { year: 2002 }));
    }
}
