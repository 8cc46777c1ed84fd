pub mod diffusion_model;
