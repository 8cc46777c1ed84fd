use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::bass_error::Result;

/// Model output over a time range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub periods: Vec<u32>,
    /// Adopters per period, `m f(t)`
    pub adoption_rate: Vec<f64>,
    /// Cumulative adopters, `m F(t)`
    pub cumulative_forecast: Vec<f64>,
    /// Market potential the series was generated with
    pub market_potential: f64,
}

/// One exported forecast row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub period: u32,
    pub adoption_rate: f64,
    pub cumulative_forecast: f64,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// `(period, adoption_rate)` pairs for a line chart
    pub fn points(&self) -> Vec<(u32, f64)> {
        self.periods
            .iter()
            .copied()
            .zip(self.adoption_rate.iter().copied())
            .collect()
    }

    /// `(period, cumulative_forecast)` pairs for a CDF chart
    pub fn cumulative_points(&self) -> Vec<(u32, f64)> {
        self.periods
            .iter()
            .copied()
            .zip(self.cumulative_forecast.iter().copied())
            .collect()
    }

    /// Cumulative share of the market, `F(t)`
    pub fn adoption_share(&self) -> Vec<f64> {
        self.cumulative_forecast
            .iter()
            .map(|c| c / self.market_potential)
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = ForecastRow> + '_ {
        self.periods
            .iter()
            .zip(&self.adoption_rate)
            .zip(&self.cumulative_forecast)
            .map(|((&period, &adoption_rate), &cumulative_forecast)| ForecastRow {
                period,
                adoption_rate,
                cumulative_forecast,
            })
    }

    /// Write the series as csv with a `period,adoption_rate,cumulative_forecast` header
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        for row in self.rows() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
