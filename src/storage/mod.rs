pub mod errors;
pub mod write_artifact;
