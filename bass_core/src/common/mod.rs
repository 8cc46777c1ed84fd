pub mod bass_error;
pub mod enums;
pub mod utils;
