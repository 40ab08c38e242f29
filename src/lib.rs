//! Salary-vs-inflation analytics core.
//!
//! Two read-only tables are loaded once per process — nominal salaries per
//! economic sector per year, and one inflation rate per year — and every
//! user selection (sector subset + inclusive year period) triggers a fresh,
//! pure recomputation of:
//!
//! * year-over-year percent salary growth per sector,
//! * real salaries restated in `(end year + 1)` purchasing power,
//! * a per-sector Pearson correlation of growth against prior-year
//!   inflation, ranked by mean growth.
//!
//! Rendering of the results (charts, narration) is a separate concern; this
//! crate only hands computed tables back to whatever front-end asked.

pub mod analysis;
pub mod data;
pub mod error;
pub mod selection;

pub use analysis::{
    compute_correlation_summary, compute_growth, compute_real_salary, CorrelationRow,
    CorrelationSummary, GrowthTable, RealSalaryTable,
};
pub use data::model::{InflationSeries, SalaryTable, AVERAGE_SECTOR};
pub use error::{ComputationError, ValidationError};
pub use selection::Selection;
