//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the one
//! use case of the application: running a symptom screening.

mod screening;

pub use screening::ScreeningService;
