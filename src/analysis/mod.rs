/// Analytical core: three pure functions over the loaded tables.
///
/// ```text
///   Selection ──▶ ┌──────────┐
///                 │  growth   │  year-over-year % change   → GrowthTable
///                 └──────────┘
///   Selection ──▶ ┌──────────┐
///                 │ deflate   │  compound to end+1 anchor  → RealSalaryTable
///                 └──────────┘
///   GrowthTable ▶ ┌──────────┐
///                 │ correlate │  Pearson vs. shifted infl. → CorrelationSummary
///                 └──────────┘
/// ```
///
/// Every function borrows its inputs and returns a fresh value; nothing is
/// cached or mutated, so repeated calls with the same inputs are identical
/// and the functions are safe to call from parallel requests.

pub mod correlate;
pub mod deflate;
pub mod growth;

pub use correlate::{compute_correlation_summary, CorrelationRow, CorrelationSummary};
pub use deflate::{compounding_factors, compute_real_salary, RealSalaryTable};
pub use growth::{compute_growth, GrowthTable};
