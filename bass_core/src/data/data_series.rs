use serde::Serialize;

use crate::common::{
    bass_error::{BassError, Result},
    utils::{cumulative_sum, is_non_decreasing},
};

/// Adoption counts per period together with their running total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSeries {
    periods: Vec<u32>,
    adoptions: Vec<f64>,
    cumulative: Vec<f64>,
}

impl DataSeries {
    /// Build a series over periods `1..=N` from per-period adoption counts
    pub fn new(adoptions: Vec<f64>) -> Result<Self> {
        if adoptions.is_empty() {
            return Err(BassError::MalformedData("empty adoption series".to_string()));
        }
        if let Some((idx, v)) = adoptions
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(BassError::MalformedData(format!(
                "adoption at period {} must be finite and non-negative, got {}",
                idx + 1,
                v
            )));
        }

        let cumulative = cumulative_sum(&adoptions);
        debug_assert!(is_non_decreasing(&cumulative));
        let periods = (1..=adoptions.len() as u32).collect();

        Ok(Self {
            periods,
            adoptions,
            cumulative,
        })
    }

    pub fn periods(&self) -> &[u32] {
        &self.periods
    }

    pub fn adoptions(&self) -> &[f64] {
        &self.adoptions
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.adoptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adoptions.is_empty()
    }

    /// Total adopters observed so far
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_series() {
        let series = DataSeries::new(vec![10.0, 15.0, 20.0, 25.0, 30.0]).unwrap();
        assert_eq!(series.periods(), &[1, 2, 3, 4, 5]);
        assert_eq!(series.cumulative(), &[10.0, 25.0, 45.0, 70.0, 100.0]);
        assert_eq!(series.len(), 5);
        assert_eq!(series.total(), 100.0);
    }

    #[test]
    fn test_zero_adoptions_allowed() {
        let series = DataSeries::new(vec![0.0, 0.0, 3.0]).unwrap();
        assert_eq!(series.cumulative(), &[0.0, 0.0, 3.0]);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            DataSeries::new(Vec::new()),
            Err(BassError::MalformedData(_))
        ));
    }

    #[test]
    fn test_negative_rejected() {
        let err = DataSeries::new(vec![1.0, -2.0]).unwrap_err();
        assert!(err.to_string().contains("period 2"));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(DataSeries::new(vec![1.0, f64::NAN]).is_err());
    }
}
