pub mod artifact_frame;
