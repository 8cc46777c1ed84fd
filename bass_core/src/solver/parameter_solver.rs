use crate::common::{
    bass_error::{BassError, Result},
    enums::RootPolicy,
};
use crate::config::bass_config::BassConfig;
use crate::regression::regression_result::RegressionResult;
use crate::solver::bass_parameters::BassParameters;

/// Inverts regression coefficients into Bass parameters.
///
/// Under the Bass model `a = p m`, `b = q - p` and `c = -q / m`, so `m` is a
/// root of `c m^2 + b m + a = 0`. Then `p = a / m` and `q = -c m`.
#[derive(Debug, Clone, Default)]
pub struct ParameterSolver {
    root_policy: RootPolicy,
}

impl ParameterSolver {
    pub fn new(config: &BassConfig) -> Self {
        Self {
            root_policy: config.root_policy,
        }
    }

    pub fn with_root_policy(root_policy: RootPolicy) -> Self {
        Self { root_policy }
    }

    /// Roots of the market-potential equation. A single root when the
    /// quadratic term vanishes, none when both leading terms do.
    pub fn market_potential_roots(result: &RegressionResult) -> Result<Vec<f64>> {
        let (a, b, c) = (result.intercept, result.coef_cum, result.coef_cum_sq);

        if c == 0.0 {
            return Ok(if b == 0.0 { Vec::new() } else { vec![-a / b] });
        }

        let discriminant = result.discriminant();
        if discriminant < 0.0 || discriminant.is_nan() {
            return Err(BassError::NoRealSolution { discriminant });
        }

        let sqrt_d = discriminant.sqrt();
        Ok(vec![(-b + sqrt_d) / (2.0 * c), (-b - sqrt_d) / (2.0 * c)])
    }

    pub fn solve(&self, result: &RegressionResult) -> Result<BassParameters> {
        let roots = Self::market_potential_roots(result)?;
        let positive: Vec<f64> = roots
            .iter()
            .copied()
            .filter(|m| m.is_finite() && *m > 0.0)
            .collect();

        let m = match positive.as_slice() {
            [] => return Err(BassError::NoValidMarketPotential { roots }),
            [m] => *m,
            [m1, m2, ..] => self.root_policy.pick(*m1, *m2),
        };

        let params = BassParameters {
            m,
            p: result.intercept / m,
            q: -result.coef_cum_sq * m,
        };

        if params.is_plausible() {
            tracing::debug!(m = params.m, p = params.p, q = params.q, "bass parameters solved");
        } else {
            tracing::warn!(
                m = params.m,
                p = params.p,
                q = params.q,
                "bass parameters have implausible signs"
            );
        }
        Ok(params)
    }
}
