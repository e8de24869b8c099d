//! MovieQR terminal client.
//!
//! Two screens share one fetch/poll state machine:
//! - the QR screen polls the backend for a fresh QR code,
//! - the gallery screen lists the movies of one collection.

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod ui;
