use nalgebra::{DMatrix, DVector};

use crate::common::bass_error::{BassError, Result};
use crate::config::bass_config::BassConfig;
use crate::data::data_series::DataSeries;
use crate::math::linalg::solve_least_squares;
use crate::regression::regression_result::{RegressionResult, RegressionRow};

/// Rows needed to determine intercept, linear and quadratic coefficients
pub const MIN_REGRESSION_ROWS: usize = 3;

/// Fits the lag-1 quadratic regression behind the Bass OLS estimator
#[derive(Debug, Clone)]
pub struct RegressionEngine {
    rank_tolerance: f64,
    scale_columns: bool,
}

impl Default for RegressionEngine {
    fn default() -> Self {
        Self::new(&BassConfig::default())
    }
}

impl RegressionEngine {
    pub fn new(config: &BassConfig) -> Self {
        Self {
            rank_tolerance: config.rank_tolerance,
            scale_columns: config.scale_columns,
        }
    }

    /// Lagged rows `(adoptions[i], C[i-1], C[i-1]^2)` for `i = 1..N-1`
    pub fn build_rows(series: &DataSeries) -> Vec<RegressionRow> {
        series
            .adoptions()
            .iter()
            .skip(1)
            .zip(series.cumulative())
            .map(|(&adoption, &lag)| RegressionRow {
                adoption,
                lag_cumulative: lag,
                lag_cumulative_sq: lag * lag,
            })
            .collect()
    }

    /// Least-squares fit of the lagged rows of `series`
    pub fn fit(&self, series: &DataSeries) -> Result<RegressionResult> {
        let rows = Self::build_rows(series);
        if rows.len() < MIN_REGRESSION_ROWS {
            return Err(BassError::InsufficientData {
                required: MIN_REGRESSION_ROWS,
                actual: rows.len(),
            });
        }

        let design = DMatrix::from_fn(rows.len(), 3, |i, j| match j {
            0 => 1.0,
            1 => rows[i].lag_cumulative,
            _ => rows[i].lag_cumulative_sq,
        });
        let response = DVector::from_iterator(rows.len(), rows.iter().map(|r| r.adoption));

        let beta = solve_least_squares(&design, &response, self.rank_tolerance, self.scale_columns)?;

        let mut result = RegressionResult {
            intercept: beta[0],
            coef_cum: beta[1],
            coef_cum_sq: beta[2],
            observations: rows.len(),
            sse: None,
            r_squared: None,
        };
        let (sse, r_squared) = goodness_of_fit(&result, &rows);
        result.sse = Some(sse);
        result.r_squared = Some(r_squared);

        tracing::debug!(
            intercept = result.intercept,
            coef_cum = result.coef_cum,
            coef_cum_sq = result.coef_cum_sq,
            observations = result.observations,
            r_squared,
            "regression fitted"
        );
        Ok(result)
    }
}

fn goodness_of_fit(result: &RegressionResult, rows: &[RegressionRow]) -> (f64, f64) {
    let mean = rows.iter().map(|r| r.adoption).sum::<f64>() / rows.len() as f64;
    let sse: f64 = rows
        .iter()
        .map(|r| (r.adoption - result.predict(r.lag_cumulative)).powi(2))
        .sum();
    let sst: f64 = rows.iter().map(|r| (r.adoption - mean).powi(2)).sum();
    let r_squared = if sst == 0.0 { 1.0 } else { 1.0 - sse / sst };
    (sse, r_squared)
}
