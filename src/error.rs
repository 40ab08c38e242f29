use thiserror::Error;

// ---------------------------------------------------------------------------
// ValidationError – malformed input data or selection
// ---------------------------------------------------------------------------

/// Rejected before any computation runs: the tables or the user selection
/// violate a structural rule. Surfaced to the caller as-is; the analysis
/// functions are never invoked with an invalid [`crate::Selection`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("salary table has no sectors")]
    EmptyTable,

    #[error("salary table has no year columns")]
    EmptyYearAxis,

    #[error("duplicate sector id '{0}'")]
    DuplicateSector(String),

    #[error("sector '{sector}' covers {got} years, expected {expected}")]
    RaggedRow {
        sector: String,
        expected: usize,
        got: usize,
    },

    #[error("reserved aggregate sector '{0}' is missing from the table")]
    MissingAverageSector(String),

    #[error("unknown sector id '{0}'")]
    UnknownSector(String),

    #[error("year {year} is outside the known axis {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("period must span at least two years, got start {start} and end {end}")]
    DegeneratePeriod { start: i32, end: i32 },
}

// ---------------------------------------------------------------------------
// ComputationError – degenerate input discovered mid-computation
// ---------------------------------------------------------------------------

/// Degenerate numeric input inside an otherwise valid selection. Local to
/// one request: the shared tables stay untouched and a retry with the same
/// inputs would reproduce the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("sector '{sector}' has zero salary in {year}; growth vs. {year} is undefined")]
    ZeroBaseSalary { sector: String, year: i32 },

    #[error("no salary for sector '{sector}' in year {year}")]
    MissingSalary { sector: String, year: i32 },

    #[error("no inflation rate for year {year}")]
    MissingInflation { year: i32 },

    #[error("correlation needs at least 2 growth points, got {0}")]
    TooFewPoints(usize),
}
