use std::path::Path;

use crate::common::{
    bass_error::{BassError, Result},
    enums::ModelState,
};
use crate::config::bass_config::BassConfig;
use crate::data::{data_loader::load_series, data_series::DataSeries};
use crate::forecast::{forecast_generator::ForecastGenerator, forecast_series::ForecastSeries};
use crate::model::model_summary::ModelSummary;
use crate::regression::{regression_engine::RegressionEngine, regression_result::RegressionResult};
use crate::solver::{bass_parameters::BassParameters, parameter_solver::ParameterSolver};
use crate::traits::diffusion_model::DiffusionModel;

/// Bass diffusion model estimated by ordinary least squares.
///
/// Owns its [`DataSeries`] and the outputs of the last fit and solve. Stages
/// run in order `fit -> calculate_parameters -> predict`; asking for a stage
/// whose input is missing fails with [`BassError::NotFitted`].
#[derive(Debug, Clone)]
pub struct BassOlsModel {
    series: DataSeries,
    engine: RegressionEngine,
    solver: ParameterSolver,
    state: ModelState,
    regression: Option<RegressionResult>,
    params: Option<BassParameters>,
}

impl BassOlsModel {
    pub fn new(series: DataSeries) -> Self {
        Self::with_config(series, &BassConfig::default())
    }

    pub fn with_config(series: DataSeries, config: &BassConfig) -> Self {
        Self {
            series,
            engine: RegressionEngine::new(config),
            solver: ParameterSolver::new(config),
            state: ModelState::DataLoaded,
            regression: None,
            params: None,
        }
    }

    /// Load the series from a data file, then build the model
    pub fn from_path(path: impl AsRef<Path>, config: &BassConfig) -> Result<Self> {
        config.validate()?;
        let series = load_series(path.as_ref(), &config.loader)?;
        Ok(Self::with_config(series, config))
    }

    pub fn series(&self) -> &DataSeries {
        &self.series
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    pub fn regression(&self) -> Option<&RegressionResult> {
        self.regression.as_ref()
    }

    pub fn parameters(&self) -> Option<&BassParameters> {
        self.params.as_ref()
    }

    /// Forecast over the observed periods
    pub fn predict_in_sample(&mut self) -> Result<ForecastSeries> {
        let periods = self.series.periods().to_vec();
        self.predict(&periods)
    }

    /// Parameters, fit statistics and peak of the solved model
    pub fn summarize(&self) -> Result<ModelSummary> {
        let regression = self.fitted_regression("summarize")?;
        let params = self.solved_parameters("summarize")?;
        Ok(ModelSummary::new(&params, &regression))
    }

    fn fitted_regression(&self, stage: &str) -> Result<RegressionResult> {
        match self.regression {
            Some(regression) if self.state.has_regression() => Ok(regression),
            _ => Err(BassError::NotFitted(format!("{} called before fit", stage))),
        }
    }

    fn solved_parameters(&self, stage: &str) -> Result<BassParameters> {
        match self.params {
            Some(params) if self.state.has_parameters() => Ok(params),
            _ => Err(BassError::NotFitted(format!(
                "{} called before calculate_parameters",
                stage
            ))),
        }
    }
}

impl DiffusionModel for BassOlsModel {
    fn fit(&mut self) -> Result<RegressionResult> {
        self.regression = None;
        self.params = None;
        self.state = ModelState::DataLoaded;

        let result = self.engine.fit(&self.series)?;
        self.regression = Some(result);
        self.state = ModelState::Fitted;
        Ok(result)
    }

    fn calculate_parameters(&mut self) -> Result<BassParameters> {
        let regression = self.fitted_regression("calculate_parameters")?;

        self.params = None;
        self.state = ModelState::Fitted;

        let params = self.solver.solve(&regression)?;
        self.params = Some(params);
        self.state = ModelState::ParametersSolved;
        Ok(params)
    }

    fn predict(&mut self, time_range: &[u32]) -> Result<ForecastSeries> {
        let params = self.solved_parameters("predict")?;

        let forecast = ForecastGenerator::generate(&params, time_range);
        self.state = ModelState::Forecasted;
        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> BassOlsModel {
        BassOlsModel::new(DataSeries::new(vec![10.0, 15.0, 20.0, 25.0, 30.0]).unwrap())
    }

    #[test]
    fn test_lifecycle() {
        let mut model = model();
        assert_eq!(model.state(), ModelState::DataLoaded);

        model.fit().unwrap();
        assert_eq!(model.state(), ModelState::Fitted);

        let params = model.calculate_parameters().unwrap();
        assert_eq!(model.state(), ModelState::ParametersSolved);
        assert_relative_eq!(params.m, 267.25728754652187, max_relative = 1e-9);
        assert_relative_eq!(params.p, 0.04300954375880126, max_relative = 1e-9);
        assert_relative_eq!(params.q, 0.41584018409392987, max_relative = 1e-9);

        let forecast = model.predict_in_sample().unwrap();
        assert_eq!(model.state(), ModelState::Forecasted);
        assert_eq!(forecast.periods, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_predict_before_solve_fails() {
        let mut model = model();
        assert!(matches!(model.predict(&[1, 2]), Err(BassError::NotFitted(_))));
        model.fit().unwrap();
        assert!(matches!(model.predict(&[1, 2]), Err(BassError::NotFitted(_))));
        assert_eq!(model.state(), ModelState::Fitted);
    }

    #[test]
    fn test_solve_before_fit_fails() {
        let mut model = model();
        assert!(matches!(
            model.calculate_parameters(),
            Err(BassError::NotFitted(_))
        ));
        assert_eq!(model.state(), ModelState::DataLoaded);
    }

    #[test]
    fn test_refit_discards_parameters() {
        let mut model = model();
        model.fit().unwrap();
        model.calculate_parameters().unwrap();
        model.fit().unwrap();
        assert_eq!(model.state(), ModelState::Fitted);
        assert!(model.parameters().is_none());
        assert!(model.regression().is_some());
        assert!(model.predict(&[1]).is_err());
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let mut model = model();
        model.fit().unwrap();
        let first = model.calculate_parameters().unwrap();
        let second = model.calculate_parameters().unwrap();
        assert_eq!(first, second);
        assert_eq!(model.state(), ModelState::ParametersSolved);
    }

    #[test]
    fn test_failed_fit_leaves_no_stale_state() {
        let mut model = BassOlsModel::new(DataSeries::new(vec![1.0, 2.0]).unwrap());
        assert!(matches!(model.fit(), Err(BassError::InsufficientData { .. })));
        assert_eq!(model.state(), ModelState::DataLoaded);
        assert!(model.regression().is_none());
    }

    #[test]
    fn test_summarize_requires_parameters() {
        let mut model = model();
        assert!(model.summarize().is_err());
        model.fit().unwrap();
        model.calculate_parameters().unwrap();
        let summary = model.summarize().unwrap();
        assert_eq!(summary.parameters, *model.parameters().unwrap());
    }

    #[test]
    fn test_stage_errors_name_missing_stage() {
        let mut model = model();
        let err = model.calculate_parameters().unwrap_err();
        assert_eq!(
            err.to_string(),
            "model not fitted: calculate_parameters called before fit"
        );

        model.fit().unwrap();
        let err = model.summarize().unwrap_err();
        assert_eq!(
            err.to_string(),
            "model not fitted: summarize called before calculate_parameters"
        );

        model.calculate_parameters().unwrap();
        model.predict(&[1, 2, 3]).unwrap();
        assert!(model.state().has_parameters());
        assert!(model.summarize().is_ok());
    }
}
