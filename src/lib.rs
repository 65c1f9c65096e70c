pub mod float_matrix;
pub mod sample_systems;
