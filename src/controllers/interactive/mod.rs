//! Interactive controller for live QR code previews.
//!
//! This module provides the application layer between the parameter store
//! and the presentation layer: every parameters snapshot becomes an encode
//! request, and only the newest request's result is published.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `Parameters` snapshots pushed by the `ParameterStore`
//! - **Output**: `PreviewPresenterPort` for receiving published artifacts
//! - **Collaborator**: `QrEncoderPort`, the opaque encoder

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::{RecomputationController, Submission};
pub use data::artifact_frame::ArtifactFrame;
pub use errors::encode::EncodeError;
pub use events::preview::PreviewEvent;
pub use ports::encoder::QrEncoderPort;
pub use ports::presenter::PreviewPresenterPort;
