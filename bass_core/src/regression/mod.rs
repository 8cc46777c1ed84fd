pub mod regression_engine;
pub mod regression_result;
