//! GUI input adapter for interactive QR code editing.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for the preview framebuffer, and egui for the parameter controls.

pub mod app;
pub mod command;
