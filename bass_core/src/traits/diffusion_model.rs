use crate::common::bass_error::Result;
use crate::forecast::forecast_series::ForecastSeries;
use crate::regression::regression_result::RegressionResult;
use crate::solver::bass_parameters::BassParameters;

/// A diffusion model that is fitted to data, solved for its parameters and
/// then used to forecast
pub trait DiffusionModel {
    /// Fit the model to its data, discarding any earlier fit
    fn fit(&mut self) -> Result<RegressionResult>;

    /// Derive `(m, p, q)` from the current fit
    fn calculate_parameters(&mut self) -> Result<BassParameters>;

    /// Forecast over `time_range` from the solved parameters
    fn predict(&mut self, time_range: &[u32]) -> Result<ForecastSeries>;
}
