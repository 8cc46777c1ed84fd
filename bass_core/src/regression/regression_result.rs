use serde::{Deserialize, Serialize};

/// One lagged observation: `adoptions[i]` against `cumulative[i-1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionRow {
    pub adoption: f64,
    pub lag_cumulative: f64,
    pub lag_cumulative_sq: f64,
}

/// OLS coefficients of `S[t] = a + b C[t-1] + c C[t-1]^2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// `a`, equal to `p m` under the Bass model
    pub intercept: f64,
    /// `b`, equal to `q - p`
    pub coef_cum: f64,
    /// `c`, equal to `-q / m`
    pub coef_cum_sq: f64,
    /// Number of regression rows
    pub observations: usize,
    /// Residual sum of squares
    pub sse: Option<f64>,
    /// Coefficient of determination; `1.0` when the response has no variance
    pub r_squared: Option<f64>,
}

impl RegressionResult {
    /// Result carrying only coefficients, for callers that estimated them elsewhere
    pub fn from_coefficients(intercept: f64, coef_cum: f64, coef_cum_sq: f64) -> Self {
        Self {
            intercept,
            coef_cum,
            coef_cum_sq,
            observations: 0,
            sse: None,
            r_squared: None,
        }
    }

    /// Discriminant of `c m^2 + b m + a = 0`
    pub fn discriminant(&self) -> f64 {
        self.coef_cum * self.coef_cum - 4.0 * self.coef_cum_sq * self.intercept
    }

    /// Fitted response for a lagged cumulative value
    pub fn predict(&self, lag_cumulative: f64) -> f64 {
        self.intercept + self.coef_cum * lag_cumulative + self.coef_cum_sq * lag_cumulative.powi(2)
    }
}
