//! Bass diffusion model estimation and forecasting.
//!
//! The pipeline runs `DataSeries -> RegressionEngine::fit ->
//! ParameterSolver::solve -> ForecastGenerator::generate`; [`BassOlsModel`]
//! threads the stages and tracks which ones have run.

pub mod common;
pub mod config;
pub mod data;
pub mod forecast;
pub mod math;
pub mod model;
pub mod regression;
pub mod solver;
pub mod traits;

pub use common::bass_error::{BassError, ErrCode, Result};
pub use config::bass_config::{BassConfig, LoaderConfig};
pub use data::data_series::DataSeries;
pub use forecast::{forecast_generator::ForecastGenerator, forecast_series::ForecastSeries};
pub use math::bass_curve::calculate_bass_model;
pub use model::{bass_ols_model::BassOlsModel, model_summary::ModelSummary};
pub use regression::{regression_engine::RegressionEngine, regression_result::RegressionResult};
pub use solver::{bass_parameters::BassParameters, parameter_solver::ParameterSolver};
pub use traits::diffusion_model::DiffusionModel;
