use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::bass_curve::{peak_density, peak_time};
use crate::regression::regression_result::RegressionResult;
use crate::solver::bass_parameters::BassParameters;

/// Report of a solved model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub parameters: BassParameters,
    pub regression: RegressionResult,
    /// Period of highest adoption rate, when the rate peaks after launch
    pub peak_time: Option<f64>,
    /// Adopters per period at the peak
    pub peak_adoption_rate: Option<f64>,
}

impl ModelSummary {
    pub fn new(parameters: &BassParameters, regression: &RegressionResult) -> Self {
        let BassParameters { m, p, q } = *parameters;
        Self {
            parameters: *parameters,
            regression: *regression,
            peak_time: peak_time(p, q),
            peak_adoption_rate: peak_density(p, q).map(|d| m * d),
        }
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bass diffusion model (OLS)")?;
        writeln!(f, "  market potential m : {:.4}", self.parameters.m)?;
        writeln!(f, "  innovation p       : {:.6}", self.parameters.p)?;
        writeln!(f, "  imitation q        : {:.6}", self.parameters.q)?;
        writeln!(f, "  observations       : {}", self.regression.observations)?;
        if let Some(r2) = self.regression.r_squared {
            writeln!(f, "  R^2                : {:.6}", r2)?;
        }
        match (self.peak_time, self.peak_adoption_rate) {
            (Some(t), Some(rate)) => write!(f, "  peak               : t={:.2} rate={:.4}", t, rate),
            _ => write!(f, "  peak               : at launch"),
        }
    }
}
