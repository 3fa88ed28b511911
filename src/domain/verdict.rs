//! Screening verdict types.
//!
//! Represents the output of the adenovirus risk prediction.

use serde::{Deserialize, Serialize};

/// Risk verdict derived from the classifier's binary label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Label 0: low likelihood of infection
    LowRisk,
    /// Label 1: high likelihood of infection
    HighRisk,
}

/// Error for classifier labels outside the defined {0, 1} range.
///
/// An undefined label means the artifact and the encoding contract disagree.
/// It must never be mapped to either verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerdictError {
    #[error("classifier returned undefined label {0}, expected 0 or 1")]
    UndefinedLabel(u8),
}

impl Verdict {
    /// Map the classifier's binary label to a verdict: 1 is high risk,
    /// 0 is low risk.
    ///
    /// # Errors
    /// Returns `VerdictError::UndefinedLabel` for any other label.
    pub fn from_label(label: u8) -> Result<Self, VerdictError> {
        match label {
            0 => Ok(Self::LowRisk),
            1 => Ok(Self::HighRisk),
            other => Err(VerdictError::UndefinedLabel(other)),
        }
    }

    /// Headline shown on the result screen.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self {
            Self::LowRisk => "Low likelihood of Adenovirus infection",
            Self::HighRisk => "High likelihood of Adenovirus infection detected",
        }
    }

    /// Follow-up advice shown under the headline.
    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::LowRisk => {
                "Stay healthy, but if symptoms persist, consult a doctor for confirmation."
            }
            Self::HighRisk => "Please consult a healthcare professional immediately.",
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::LowRisk => (16, 185, 129),  // Emerald (#10B981)
            Self::HighRisk => (244, 63, 94),  // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowRisk => write!(f, "LOW RISK"),
            Self::HighRisk => write!(f, "HIGH RISK"),
        }
    }
}

/// Result of one screening cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screening {
    /// Raw label returned by the classifier (0 or 1)
    pub label: u8,

    /// Verdict derived from the label
    pub verdict: Verdict,

    /// Timestamp of the screening
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Screening {
    /// Create a screening from a classifier label.
    ///
    /// # Errors
    /// Returns `VerdictError::UndefinedLabel` for labels outside {0, 1}.
    pub fn from_label(label: u8) -> Result<Self, VerdictError> {
        Ok(Self {
            label,
            verdict: Verdict::from_label(label)?,
            created_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_from_label() {
        assert_eq!(Verdict::from_label(0), Ok(Verdict::LowRisk));
        assert_eq!(Verdict::from_label(1), Ok(Verdict::HighRisk));
    }

    #[test]
    fn test_undefined_labels_are_errors() {
        for label in [2u8, 3, 127, 255] {
            assert_eq!(
                Verdict::from_label(label),
                Err(VerdictError::UndefinedLabel(label)),
                "label {label} must not map to a verdict"
            );
        }
    }

    #[test]
    fn test_screening_creation() {
        let screening = Screening::from_label(1).expect("Label 1 is defined");
        assert_eq!(screening.verdict, Verdict::HighRisk);
        assert_eq!(screening.label, 1);

        assert!(Screening::from_label(4).is_err());
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::HighRisk.to_string(), "HIGH RISK");
        assert_eq!(Verdict::LowRisk.to_string(), "LOW RISK");
    }
}
