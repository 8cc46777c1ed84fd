pub mod data_loader;
pub mod data_series;
