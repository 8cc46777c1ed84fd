use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::common::{
    bass_error::{BassError, Result},
    enums::RootPolicy,
};
use crate::config::config_with_check::ConfigWithCheck;

/// Estimation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BassConfig {
    /// Relative size below which a diagonal entry of R marks the design as rank deficient
    pub rank_tolerance: f64,

    /// Scale design columns to unit norm before the QR solve
    pub scale_columns: bool,

    /// Root selection when both roots of the market-potential quadratic are positive
    pub root_policy: RootPolicy,

    /// Data file layout
    pub loader: LoaderConfig,
}

impl Default for BassConfig {
    fn default() -> Self {
        Self {
            rank_tolerance: 1e-10,
            scale_columns: true,
            root_policy: RootPolicy::Larger,
            loader: LoaderConfig::default(),
        }
    }
}

impl BassConfig {
    /// Build a config from a loose key/value map; unknown keys are rejected
    pub fn new(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let default = Self::default();

        let loader = LoaderConfig {
            value_column: conf
                .get("value_column")?
                .unwrap_or(default.loader.value_column),
            skip_header: conf
                .get("skip_header")?
                .unwrap_or(default.loader.skip_header),
        };

        let config = Self {
            rank_tolerance: conf
                .get("rank_tolerance")?
                .unwrap_or(default.rank_tolerance),
            scale_columns: conf
                .get("scale_columns")?
                .unwrap_or(default.scale_columns),
            root_policy: conf.get("root_policy")?.unwrap_or(default.root_policy),
            loader,
        };

        conf.check()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rank_tolerance.is_finite() || self.rank_tolerance <= 0.0 {
            return Err(BassError::Config(format!(
                "rank_tolerance must be positive and finite, got {}",
                self.rank_tolerance
            )));
        }
        Ok(())
    }
}

/// Data file layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Zero-based index of the adoption column
    pub value_column: usize,

    /// Skip a leading row whose value column is not numeric
    pub skip_header: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            value_column: 1,
            skip_header: true,
        }
    }
}
