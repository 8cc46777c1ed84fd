use crate::forecast::forecast_series::ForecastSeries;
use crate::math::bass_curve::{adoption_density, cumulative_fraction};
use crate::solver::bass_parameters::BassParameters;

/// Evaluates a fitted Bass curve over a time range
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastGenerator;

impl ForecastGenerator {
    /// Adoption rate and cumulative adopters at each `t` in `time_range`.
    ///
    /// The range may cover the observed periods, extend past them, or start at
    /// the epoch `t = 0`. The output is freshly allocated on every call.
    pub fn generate(params: &BassParameters, time_range: &[u32]) -> ForecastSeries {
        let BassParameters { m, p, q } = *params;
        let (adoption_rate, cumulative_forecast) = time_range
            .iter()
            .map(|&t| {
                let t = f64::from(t);
                (m * adoption_density(p, q, t), m * cumulative_fraction(p, q, t))
            })
            .unzip();

        ForecastSeries {
            periods: time_range.to_vec(),
            adoption_rate,
            cumulative_forecast,
            market_potential: m,
        }
    }

    /// Consecutive periods `start..=end`
    pub fn horizon(start: u32, end: u32) -> Vec<u32> {
        (start..=end).collect()
    }
}
