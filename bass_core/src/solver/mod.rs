pub mod bass_parameters;
pub mod parameter_solver;
