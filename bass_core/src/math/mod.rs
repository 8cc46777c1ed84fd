pub mod bass_curve;
pub mod linalg;
