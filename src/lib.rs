//! # adenoscan
//!
//! Terminal screening tool for adenovirus infection risk.
//!
//! Eight Yes/No symptom answers are encoded into a fixed-order feature
//! vector, classified by a pre-trained decision tree loaded once at process
//! start, and mapped to a two-level risk verdict.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (symptom answers, feature vectors, verdicts)
//! - `ports`: Trait definitions for the externally supplied classifier
//! - `adapters`: Concrete implementations (exported decision tree)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Screening, SymptomAnswer, SymptomReport, Verdict};

/// Result type for adenoscan operations
pub type Result<T> = std::result::Result<T, AdenoscanError>;

/// Main error type for adenoscan
#[derive(Debug, thiserror::Error)]
pub enum AdenoscanError {
    #[error("Model loading failed: {0}")]
    Model(#[from] adapters::ModelError),

    #[error("Prediction failed: {0}")]
    Predict(#[from] ports::PredictError),

    #[error("Classifier contract violated: {0}")]
    Verdict(#[from] domain::VerdictError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
