use std::collections::BTreeMap;

use crate::error::ValidationError;

/// Reserved sector id for the cross-sector average row. Always present in a
/// valid [`SalaryTable`] and always part of every selection.
pub const AVERAGE_SECTOR: &str = "average";

// ---------------------------------------------------------------------------
// SalaryTable – nominal salaries, sectors × contiguous years
// ---------------------------------------------------------------------------

/// Nominal salaries for a set of sectors over one contiguous, inclusive year
/// axis. `rows[i][j]` is the salary of `sector_ids[i]` in `first_year + j`.
///
/// Invariants, enforced at construction:
/// * at least one sector and one year,
/// * sector ids unique, insertion order preserved,
/// * every row covers the full year axis (no gaps, no ragged rows),
/// * the reserved [`AVERAGE_SECTOR`] row is present.
///
/// The table is read-only after construction; computations borrow it and
/// return fresh values.
#[derive(Debug, Clone)]
pub struct SalaryTable {
    first_year: i32,
    sector_ids: Vec<String>,
    rows: Vec<Vec<f64>>,
    index: BTreeMap<String, usize>,
}

impl SalaryTable {
    /// Build a table from `(sector id, salaries)` rows, each row aligned to
    /// the axis starting at `first_year`.
    pub fn new(first_year: i32, rows: Vec<(String, Vec<f64>)>) -> Result<Self, ValidationError> {
        let n_years = match rows.first() {
            Some((_, values)) if values.is_empty() => return Err(ValidationError::EmptyYearAxis),
            Some((_, values)) => values.len(),
            None => return Err(ValidationError::EmptyTable),
        };

        let mut sector_ids = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());
        let mut index = BTreeMap::new();

        for (sector, row) in rows {
            if row.len() != n_years {
                return Err(ValidationError::RaggedRow {
                    sector,
                    expected: n_years,
                    got: row.len(),
                });
            }
            if index.insert(sector.clone(), sector_ids.len()).is_some() {
                return Err(ValidationError::DuplicateSector(sector));
            }
            sector_ids.push(sector);
            values.push(row);
        }

        if !index.contains_key(AVERAGE_SECTOR) {
            return Err(ValidationError::MissingAverageSector(
                AVERAGE_SECTOR.to_string(),
            ));
        }

        Ok(SalaryTable {
            first_year,
            sector_ids,
            rows: values,
            index,
        })
    }

    /// First year of the axis.
    pub fn min_year(&self) -> i32 {
        self.first_year
    }

    /// Last year of the axis (inclusive).
    pub fn max_year(&self) -> i32 {
        self.first_year + self.rows[0].len() as i32 - 1
    }

    /// Number of years on the axis.
    pub fn n_years(&self) -> usize {
        self.rows[0].len()
    }

    /// Sector ids in insertion order.
    pub fn sector_ids(&self) -> &[String] {
        &self.sector_ids
    }

    /// Whether the table has a row for `sector`.
    pub fn contains_sector(&self, sector: &str) -> bool {
        self.index.contains_key(sector)
    }

    /// Nominal salary of `sector` in `year`, `None` if either is unknown.
    pub fn salary(&self, sector: &str, year: i32) -> Option<f64> {
        let row = &self.rows[*self.index.get(sector)?];
        let offset = year.checked_sub(self.first_year)?;
        if (0..row.len() as i32).contains(&offset) {
            Some(row[offset as usize])
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// InflationSeries – one percent rate per year
// ---------------------------------------------------------------------------

/// Annual inflation, one percent rate per year on a contiguous inclusive
/// axis. `rate(y)` is the rate that inflates year-`y` currency into
/// year-`y + 1` currency.
#[derive(Debug, Clone)]
pub struct InflationSeries {
    first_year: i32,
    rates: Vec<f64>,
}

impl InflationSeries {
    pub fn new(first_year: i32, rates: Vec<f64>) -> Result<Self, ValidationError> {
        if rates.is_empty() {
            return Err(ValidationError::EmptyYearAxis);
        }
        Ok(InflationSeries { first_year, rates })
    }

    pub fn min_year(&self) -> i32 {
        self.first_year
    }

    pub fn max_year(&self) -> i32 {
        self.first_year + self.rates.len() as i32 - 1
    }

    /// Inflation percent for `year`, `None` when outside the axis.
    pub fn rate(&self, year: i32) -> Option<f64> {
        let offset = year.checked_sub(self.first_year)?;
        if (0..self.rates.len() as i32).contains(&offset) {
            Some(self.rates[offset as usize])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avg(values: &[f64]) -> (String, Vec<f64>) {
        (AVERAGE_SECTOR.to_string(), values.to_vec())
    }

    #[test]
    fn table_indexes_by_sector_and_year() {
        let table = SalaryTable::new(
            2000,
            vec![
                avg(&[100.0, 110.0, 121.0]),
                ("mining".to_string(), vec![200.0, 220.0, 230.0]),
            ],
        )
        .unwrap();

        assert_eq!(table.min_year(), 2000);
        assert_eq!(table.max_year(), 2002);
        assert_eq!(table.n_years(), 3);
        assert_eq!(table.sector_ids(), &["average", "mining"]);
        assert!(table.contains_sector("mining"));
        assert_eq!(table.salary("mining", 2001), Some(220.0));
        assert_eq!(table.salary("mining", 1999), None);
        assert_eq!(table.salary("retail", 2001), None);
    }

    #[test]
    fn table_rejects_structural_defects() {
        assert!(matches!(
            SalaryTable::new(2000, vec![]).unwrap_err(),
            ValidationError::EmptyTable
        ));

        let ragged = SalaryTable::new(
            2000,
            vec![avg(&[100.0, 110.0]), ("mining".to_string(), vec![200.0])],
        );
        assert!(matches!(
            ragged.unwrap_err(),
            ValidationError::RaggedRow { ref sector, expected: 2, got: 1 } if sector == "mining"
        ));

        let dup = SalaryTable::new(2000, vec![avg(&[1.0]), avg(&[2.0])]);
        assert!(matches!(
            dup.unwrap_err(),
            ValidationError::DuplicateSector(ref s) if s == AVERAGE_SECTOR
        ));

        let no_avg = SalaryTable::new(2000, vec![("mining".to_string(), vec![1.0])]);
        assert!(matches!(
            no_avg.unwrap_err(),
            ValidationError::MissingAverageSector(_)
        ));
    }

    #[test]
    fn inflation_lookup_stays_on_axis() {
        let series = InflationSeries::new(2000, vec![10.0, 8.5, 4.0]).unwrap();
        assert_eq!(series.min_year(), 2000);
        assert_eq!(series.max_year(), 2002);
        assert_eq!(series.rate(2001), Some(8.5));
        assert_eq!(series.rate(2003), None);
        assert_eq!(series.rate(1999), None);
        assert!(InflationSeries::new(2000, vec![]).is_err());
    }
}
