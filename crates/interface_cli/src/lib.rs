//! Interactive Console
//!
//! Wires the clinic and billing services behind a numbered terminal menu.
//! The binary (`meditrack`) loads configuration from the environment,
//! optionally restores saved CSV data, seeds a small sample roster on a
//! fresh start, and hands control to the menu loop.

pub mod app;
pub mod config;
pub mod menu;
pub mod sample;

pub use app::ClinicApp;
pub use config::CliConfig;
