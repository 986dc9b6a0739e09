//! Input adapters for the QR studio.
//!
//! This module contains adapters that receive user input and translate it
//! into parameter store edits.

pub mod gui;
