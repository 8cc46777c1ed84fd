pub mod bass_ols_model;
pub mod model_summary;
