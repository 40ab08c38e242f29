/// Data layer: the two read-only input tables and their file adapters.
///
/// Architecture:
/// ```text
///  salaries.csv/.json   inflation.csv/.json
///        │                     │
///        ▼                     ▼
///   ┌──────────┐          ┌──────────┐
///   │  loader   │  parse  │  loader   │
///   └──────────┘          └──────────┘
///        │                     │
///        ▼                     ▼
///   ┌──────────┐          ┌───────────────┐
///   │SalaryTable│          │InflationSeries│
///   └──────────┘          └───────────────┘
/// ```
///
/// Both tables are validated at construction and never mutated afterwards;
/// the analysis layer only borrows them.

pub mod loader;
pub mod model;
