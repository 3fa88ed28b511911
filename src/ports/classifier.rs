//! Classifier port: Trait for the pre-trained symptom classifier.
//!
//! This trait abstracts the concrete model artifact from the application
//! logic, so the screening pipeline can be exercised with a substitute
//! classifier in tests.

use crate::domain::FeatureVector;

/// Trait for binary symptom classifiers.
///
/// Implementations are pure functions of their fixed internal parameters:
/// the same vector in yields the same label out. The artifact behind an
/// implementation is loaded once at process start and never mutated, so a
/// single handle is safe to share across the process lifetime.
pub trait Classifier: Send + Sync {
    /// Predict the binary label for an encoded symptom vector.
    ///
    /// # Errors
    /// Returns `PredictError::FeatureIndex` if the model references a
    /// feature the vector does not have. That is a defect in the artifact
    /// or the encoding contract, not a recoverable input condition.
    fn predict(&self, features: &FeatureVector) -> Result<u8, PredictError>;
}

/// Errors raised while evaluating a classifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The model referenced a feature index outside the encoded vector.
    /// Fails the operation loudly instead of truncating or padding.
    #[error("model references feature index {index}, vector has {len} entries")]
    FeatureIndex { index: usize, len: usize },
}
