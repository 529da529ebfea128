//! Weather lookup widget for the terminal
//!
//! The library exposes the widget's modules for testing.

pub mod action;
pub mod client;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;
