pub mod forecast_generator;
pub mod forecast_series;
