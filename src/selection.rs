use crate::data::model::{SalaryTable, AVERAGE_SECTOR};
use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Selection – a validated query: which sectors, which period
// ---------------------------------------------------------------------------

/// A validated user query against the loaded tables: a sector subset and an
/// inclusive year period. Built only through [`Selection::new`], so every
/// instance holds:
///
/// * the [`AVERAGE_SECTOR`] first, then the user's picks in pick order,
///   deduplicated, all present in the salary table,
/// * `start_year < end_year`, both on the salary table's year axis.
///
/// Out-of-range input is rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    sectors: Vec<String>,
    start_year: i32,
    end_year: i32,
}

impl Selection {
    /// Validate raw user input against the table. `picked` may be empty
    /// (the average sector alone is analysed) and may or may not mention
    /// the average sector itself.
    pub fn new(
        salaries: &SalaryTable,
        picked: &[String],
        start_year: i32,
        end_year: i32,
    ) -> Result<Self, ValidationError> {
        let (min, max) = (salaries.min_year(), salaries.max_year());

        if !(min..max).contains(&start_year) {
            return Err(ValidationError::YearOutOfRange {
                year: start_year,
                min,
                max,
            });
        }
        if !(min..=max).contains(&end_year) {
            return Err(ValidationError::YearOutOfRange {
                year: end_year,
                min,
                max,
            });
        }
        if end_year <= start_year {
            return Err(ValidationError::DegeneratePeriod {
                start: start_year,
                end: end_year,
            });
        }

        let mut sectors = vec![AVERAGE_SECTOR.to_string()];
        for sector in picked {
            if !salaries.contains_sector(sector) {
                return Err(ValidationError::UnknownSector(sector.clone()));
            }
            if !sectors.contains(sector) {
                sectors.push(sector.clone());
            }
        }

        Ok(Selection {
            sectors,
            start_year,
            end_year,
        })
    }

    /// Selected sector ids, average first.
    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }

    /// First year of the period (inclusive).
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last year of the period (inclusive).
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Number of years in the period, `end − start + 1`.
    pub fn n_years(&self) -> usize {
        (self.end_year - self.start_year + 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SalaryTable {
        SalaryTable::new(
            2000,
            vec![
                (AVERAGE_SECTOR.to_string(), vec![100.0, 110.0, 121.0, 130.0]),
                ("mining".to_string(), vec![200.0, 210.0, 220.0, 230.0]),
                ("education".to_string(), vec![80.0, 85.0, 90.0, 95.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn average_sector_always_included_and_first() {
        let t = table();
        let sel = Selection::new(&t, &["mining".to_string()], 2000, 2003).unwrap();
        assert_eq!(sel.sectors(), &["average", "mining"]);

        // explicit mention of the average sector does not duplicate it
        let sel = Selection::new(
            &t,
            &[AVERAGE_SECTOR.to_string(), "mining".to_string(), "mining".to_string()],
            2000,
            2003,
        )
        .unwrap();
        assert_eq!(sel.sectors(), &["average", "mining"]);

        let sel = Selection::new(&t, &[], 2000, 2003).unwrap();
        assert_eq!(sel.sectors(), &["average"]);
    }

    #[test]
    fn pick_order_is_preserved() {
        let t = table();
        let sel = Selection::new(
            &t,
            &["education".to_string(), "mining".to_string()],
            2001,
            2003,
        )
        .unwrap();
        assert_eq!(sel.sectors(), &["average", "education", "mining"]);
    }

    #[test]
    fn unknown_sector_is_rejected() {
        let t = table();
        let err = Selection::new(&t, &["finance".to_string()], 2000, 2003).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSector(ref s) if s == "finance"));
    }

    #[test]
    fn year_bounds_are_enforced() {
        let t = table(); // axis 2000..=2003

        // minimal two-year window is valid
        let sel = Selection::new(&t, &[], 2002, 2003).unwrap();
        assert_eq!(sel.n_years(), 2);

        // start == end rejected
        assert!(matches!(
            Selection::new(&t, &[], 2001, 2001).unwrap_err(),
            ValidationError::DegeneratePeriod { start: 2001, end: 2001 }
        ));
        // start == max_year can never open a window
        assert!(matches!(
            Selection::new(&t, &[], 2003, 2003).unwrap_err(),
            ValidationError::YearOutOfRange { year: 2003, .. }
        ));
        // off-axis years rejected, not clamped
        assert!(matches!(
            Selection::new(&t, &[], 1999, 2003).unwrap_err(),
            ValidationError::YearOutOfRange { year: 1999, .. }
        ));
        assert!(matches!(
            Selection::new(&t, &[], 2000, 2004).unwrap_err(),
            ValidationError::YearOutOfRange { year: 2004, .. }
        ));
        // inverted period reported as out-of-order, not out-of-range
        assert!(matches!(
            Selection::new(&t, &[], 2002, 2001).unwrap_err(),
            ValidationError::DegeneratePeriod { .. }
        ));
    }
}
