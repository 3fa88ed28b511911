//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinical-themed interface for:
//! - Dashboard with model status
//! - Symptom entry
//! - Screening results

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::ClinicTheme;
