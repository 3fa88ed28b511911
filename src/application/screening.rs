//! Screening service: Orchestrates the encode -> predict -> map cycle.
//!
//! Each screening is an independent, synchronous computation over its own
//! input vector. There is no state between cycles and nothing to retry:
//! every step is deterministic, so the only remediation for a failure is
//! fixing the artifact or the encoding contract.

use std::sync::Arc;

use crate::domain::{Screening, SymptomReport};
use crate::ports::Classifier;
use crate::AdenoscanError;

/// Service for running symptom screenings.
///
/// Holds the single immutable classifier handle constructed at process
/// start. The classifier is never mutated after load, so the handle is
/// shared without locking.
pub struct ScreeningService<C: Classifier> {
    classifier: Arc<C>,
}

impl<C: Classifier> ScreeningService<C> {
    /// Create a new screening service.
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    /// Run one screening cycle on a symptom report.
    ///
    /// Performs the full pipeline:
    /// 1. Encode answers into the trained feature order
    /// 2. Classify the vector
    /// 3. Map the label to a verdict
    ///
    /// # Errors
    /// Returns error if the classifier violates its contract. Encoding
    /// itself is total and cannot fail.
    pub fn run_screening(&self, report: &SymptomReport) -> Result<Screening, AdenoscanError> {
        tracing::debug!("Encoding symptom answers...");
        let features = report.encode();

        tracing::debug!("Classifying feature vector {:?}", features.as_slice());
        let label = self.classifier.predict(&features)?;

        let screening = Screening::from_label(label)?;

        tracing::info!(
            "Screening complete: label={}, verdict={}",
            screening.label,
            screening.verdict
        );

        Ok(screening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeatureVector, SymptomAnswer, Verdict, FEATURE_COUNT};
    use crate::ports::PredictError;

    /// Substitute classifier returning a fixed label.
    struct StubClassifier {
        label: u8,
    }

    impl Classifier for StubClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<u8, PredictError> {
            Ok(self.label)
        }
    }

    fn service(label: u8) -> ScreeningService<StubClassifier> {
        ScreeningService::new(Arc::new(StubClassifier { label }))
    }

    #[test]
    fn test_all_no_is_low_risk() {
        let screening = service(0)
            .run_screening(&SymptomReport::default())
            .expect("Screening should run");

        assert_eq!(screening.verdict, Verdict::LowRisk);
        assert_eq!(screening.label, 0);
    }

    #[test]
    fn test_all_yes_is_high_risk() {
        let report = SymptomReport::from_answers([SymptomAnswer::Yes; FEATURE_COUNT]);
        let screening = service(1)
            .run_screening(&report)
            .expect("Screening should run");

        assert_eq!(screening.verdict, Verdict::HighRisk);
        assert_eq!(screening.label, 1);
    }

    #[test]
    fn test_classifier_sees_the_documented_order() {
        /// Substitute classifier asserting on the vector it receives.
        struct FeverCheckClassifier;

        impl Classifier for FeverCheckClassifier {
            fn predict(&self, features: &FeatureVector) -> Result<u8, PredictError> {
                // Fever is the fourth feature; everything else stays 0.
                assert_eq!(features.as_slice(), &[0, 0, 0, 1, 0, 0, 0, 0]);
                Ok(0)
            }
        }

        let report = SymptomReport {
            fever: SymptomAnswer::Yes,
            ..SymptomReport::default()
        };

        ScreeningService::new(Arc::new(FeverCheckClassifier))
            .run_screening(&report)
            .expect("Screening should run");
    }

    #[test]
    fn test_undefined_label_is_surfaced() {
        let err = service(2)
            .run_screening(&SymptomReport::default())
            .expect_err("Label 2 must not produce a verdict");

        assert!(matches!(err, AdenoscanError::Verdict(_)));
    }

    #[test]
    fn test_contract_violation_is_surfaced() {
        /// Substitute classifier that reports a broken artifact.
        struct BrokenClassifier;

        impl Classifier for BrokenClassifier {
            fn predict(&self, features: &FeatureVector) -> Result<u8, PredictError> {
                Err(PredictError::FeatureIndex {
                    index: 12,
                    len: features.len(),
                })
            }
        }

        let err = ScreeningService::new(Arc::new(BrokenClassifier))
            .run_screening(&SymptomReport::default())
            .expect_err("Contract violations must abort the screening");

        assert!(matches!(err, AdenoscanError::Predict(_)));
    }
}
