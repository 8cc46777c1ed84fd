pub mod bass_config;
pub mod config_with_check;
