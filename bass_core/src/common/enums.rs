use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Source file layout, inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DataFormat {
    #[strum(serialize = "csv")]
    Csv,
    #[strum(to_string = "txt", serialize = "tsv", serialize = "dat")]
    Delimited,
    #[strum(to_string = "xlsx", serialize = "xls")]
    Spreadsheet,
}

/// Which positive root of the market-potential quadratic becomes `m`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RootPolicy {
    #[default]
    #[strum(serialize = "larger")]
    Larger,
    #[strum(serialize = "smaller")]
    Smaller,
}

impl RootPolicy {
    pub fn pick(&self, a: f64, b: f64) -> f64 {
        match self {
            RootPolicy::Larger => a.max(b),
            RootPolicy::Smaller => a.min(b),
        }
    }
}

/// Lifecycle of a model instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum ModelState {
    #[strum(serialize = "DATA_LOADED")]
    DataLoaded,
    #[strum(serialize = "FITTED")]
    Fitted,
    #[strum(serialize = "PARAMETERS_SOLVED")]
    ParametersSolved,
    #[strum(serialize = "FORECASTED")]
    Forecasted,
}

impl ModelState {
    pub fn has_regression(&self) -> bool {
        *self >= ModelState::Fitted
    }

    pub fn has_parameters(&self) -> bool {
        *self >= ModelState::ParametersSolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_data_format_from_extension() {
        assert_eq!(DataFormat::from_str("csv").unwrap(), DataFormat::Csv);
        assert_eq!(DataFormat::from_str("TSV").unwrap(), DataFormat::Delimited);
        assert_eq!(DataFormat::from_str("txt").unwrap(), DataFormat::Delimited);
        assert_eq!(DataFormat::from_str("xlsx").unwrap(), DataFormat::Spreadsheet);
        assert!(DataFormat::from_str("json").is_err());
    }

    #[test]
    fn test_root_policy_pick() {
        assert_eq!(RootPolicy::Larger.pick(3.0, 7.0), 7.0);
        assert_eq!(RootPolicy::Smaller.pick(3.0, 7.0), 3.0);
        assert_eq!(RootPolicy::default(), RootPolicy::Larger);
    }

    #[test]
    fn test_model_state_order() {
        assert!(!ModelState::DataLoaded.has_regression());
        assert!(ModelState::Fitted.has_regression());
        assert!(!ModelState::Fitted.has_parameters());
        assert!(ModelState::Forecasted.has_parameters());
        assert_eq!(ModelState::ParametersSolved.to_string(), "PARAMETERS_SOLVED");
    }
}
