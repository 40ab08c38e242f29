use log::debug;
use serde::Serialize;

use crate::data::model::InflationSeries;
use crate::error::ComputationError;
use crate::selection::Selection;

use super::growth::GrowthTable;

// ---------------------------------------------------------------------------
// CorrelationSummary – ranked growth-vs-inflation table
// ---------------------------------------------------------------------------

/// One summary row per selected sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationRow {
    pub sector: String,
    /// Pearson coefficient between the sector's growth and prior-year
    /// inflation, in `[-1, 1]`; NaN when the growth series has zero
    /// variance.
    pub correlation: f64,
    /// Arithmetic mean of the sector's growth series, percent.
    pub mean_growth_pct: f64,
}

/// Rows sorted descending by mean growth; sectors with equal mean growth
/// keep their selection order (stable sort).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CorrelationSummary {
    rows: Vec<CorrelationRow>,
}

impl CorrelationSummary {
    pub fn rows(&self) -> &[CorrelationRow] {
        &self.rows
    }
}

// ---------------------------------------------------------------------------
// compute_correlation_summary
// ---------------------------------------------------------------------------

/// Rank the selected sectors by mean growth and correlate each growth series
/// against prior-year inflation.
///
/// Growth covers `[start + 1, end]`; it is paired with inflation shifted
/// back one year, `[start, end − 1]`, so `growth(y)` meets `inflation(y−1)`.
/// Both sequences have `end − start` points. Fewer than 2 points leave the
/// coefficient undefined and fail with [`ComputationError::TooFewPoints`];
/// a zero-variance series with enough points yields NaN instead, which is a
/// reportable result, not an error.
pub fn compute_correlation_summary(
    growth: &GrowthTable,
    inflation: &InflationSeries,
    selection: &Selection,
) -> Result<CorrelationSummary, ComputationError> {
    let (start, end) = (selection.start_year(), selection.end_year());
    let n_points = (end - start) as usize;
    if n_points < 2 {
        return Err(ComputationError::TooFewPoints(n_points));
    }

    // inflation(y − 1) for every growth year y
    let mut shifted = Vec::with_capacity(n_points);
    for year in start..end {
        let rate = inflation
            .rate(year)
            .ok_or(ComputationError::MissingInflation { year })?;
        shifted.push(rate);
    }

    let mut rows: Vec<CorrelationRow> = growth
        .iter()
        .map(|(sector, series)| CorrelationRow {
            sector: sector.to_string(),
            correlation: pearson(series, &shifted),
            mean_growth_pct: mean(series),
        })
        .collect();

    rows.sort_by(|a, b| b.mean_growth_pct.total_cmp(&a.mean_growth_pct));

    debug!("ranked {} sectors on {n_points} growth points", rows.len());
    Ok(CorrelationSummary { rows })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson linear correlation of two equal-length samples. 0/0 when either
/// sample has zero variance, i.e. NaN.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let mx = mean(xs);
    let my = mean(ys);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}
