//! Port definitions for the interactive controller.
//!
//! Contains the traits the controller talks through: the encoder it drives
//! and the presenter it publishes to.

pub mod encoder;
pub mod presenter;
