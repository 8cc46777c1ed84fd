use std::fmt;

use serde::{Deserialize, Serialize};

/// Fitted Bass model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BassParameters {
    /// Market potential, the number of eventual adopters
    pub m: f64,
    /// Coefficient of innovation
    pub p: f64,
    /// Coefficient of imitation
    pub q: f64,
}

impl BassParameters {
    pub fn new(m: f64, p: f64, q: f64) -> Self {
        Self { m, p, q }
    }

    /// `(m, p, q)`
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.m, self.p, self.q)
    }

    /// Whether the parameters have the signs the diffusion story assumes
    pub fn is_plausible(&self) -> bool {
        self.m > 0.0 && self.p > 0.0 && self.q >= 0.0
    }
}

impl From<BassParameters> for (f64, f64, f64) {
    fn from(params: BassParameters) -> Self {
        params.as_tuple()
    }
}

impl fmt::Display for BassParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={:.4} p={:.6} q={:.6}", self.m, self.p, self.q)
    }
}
