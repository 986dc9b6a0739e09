pub mod artifact;
pub mod colour;
pub mod encode_request;
pub mod error_correction;
pub mod module_matrix;
pub mod parameters;
