//! Symptom answer types for adenovirus risk prediction.
//!
//! Feature order matches the exported decision tree artifact and must never
//! change independently of it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of symptom features consumed by the classifier.
pub const FEATURE_COUNT: usize = 8;

/// Feature names in training order:
/// breathing_problem, pink_eye, pneumonia, fever, acute_gastroenteritis,
/// dry_cough, sore_throat, bladder_infection
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "breathing_problem",
    "pink_eye",
    "pneumonia",
    "fever",
    "acute_gastroenteritis",
    "dry_cough",
    "sore_throat",
    "bladder_infection",
];

/// A single Yes/No symptom answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymptomAnswer {
    /// Symptom absent (feature value 0)
    #[default]
    No,
    /// Symptom present (feature value 1)
    Yes,
}

impl SymptomAnswer {
    /// Numeric encoding used by the classifier: Yes = 1, No = 0.
    #[must_use]
    pub fn as_feature(self) -> u8 {
        match self {
            Self::Yes => 1,
            Self::No => 0,
        }
    }

    /// The opposite answer (form toggle).
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

impl std::fmt::Display for SymptomAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// Error for answer literals other than exactly "Yes" or "No".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid symptom answer {0:?}, expected \"Yes\" or \"No\"")]
pub struct ParseAnswerError(pub String);

impl FromStr for SymptomAnswer {
    type Err = ParseAnswerError;

    /// Case-sensitive match against the two allowed literals.
    ///
    /// The selection widgets restrict the domain, so any other literal is a
    /// programming error at the caller. It is rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            other => Err(ParseAnswerError(other.to_string())),
        }
    }
}

/// One screening's worth of symptom answers, as entered in the form.
///
/// Created fresh per interaction and discarded after the prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub breathing_problem: SymptomAnswer,
    pub pink_eye: SymptomAnswer,
    pub pneumonia: SymptomAnswer,
    pub fever: SymptomAnswer,
    pub acute_gastroenteritis: SymptomAnswer,
    pub dry_cough: SymptomAnswer,
    pub sore_throat: SymptomAnswer,
    pub bladder_infection: SymptomAnswer,
}

impl SymptomReport {
    /// Build a report from answers given in feature order.
    #[must_use]
    pub fn from_answers(answers: [SymptomAnswer; FEATURE_COUNT]) -> Self {
        let [breathing_problem, pink_eye, pneumonia, fever, acute_gastroenteritis, dry_cough, sore_throat, bladder_infection] =
            answers;
        Self {
            breathing_problem,
            pink_eye,
            pneumonia,
            fever,
            acute_gastroenteritis,
            dry_cough,
            sore_throat,
            bladder_infection,
        }
    }

    /// Encode answers into the feature vector the classifier was trained on.
    ///
    /// Pure and total: every report maps to exactly one vector, in the order
    /// documented by [`FEATURE_NAMES`].
    #[must_use]
    pub fn encode(&self) -> FeatureVector {
        FeatureVector([
            self.breathing_problem.as_feature(),
            self.pink_eye.as_feature(),
            self.pneumonia.as_feature(),
            self.fever.as_feature(),
            self.acute_gastroenteritis.as_feature(),
            self.dry_cough.as_feature(),
            self.sore_throat.as_feature(),
            self.bladder_infection.as_feature(),
        ])
    }
}

/// Fixed-order {0,1} feature vector consumed by the classifier.
///
/// Length and value range are guaranteed by construction: the only producer
/// is [`SymptomReport::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector([u8; FEATURE_COUNT]);

impl FeatureVector {
    /// Feature values in training order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Value at a model-supplied feature index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Number of entries (always [`FEATURE_COUNT`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_from_bits(bits: u8) -> SymptomReport {
        let mut answers = [SymptomAnswer::No; FEATURE_COUNT];
        for (i, answer) in answers.iter_mut().enumerate() {
            if bits >> i & 1 == 1 {
                *answer = SymptomAnswer::Yes;
            }
        }
        SymptomReport::from_answers(answers)
    }

    #[test]
    fn test_encode_covers_all_combinations_bijectively() {
        let mut seen = std::collections::HashSet::new();
        for bits in 0u16..256 {
            let bits = bits as u8;
            let vector = report_from_bits(bits).encode();

            assert_eq!(vector.len(), FEATURE_COUNT);
            for (i, value) in vector.as_slice().iter().enumerate() {
                assert_eq!(*value, bits >> i & 1, "feature {i} for bits {bits:#010b}");
            }
            seen.insert(vector.as_slice().to_vec());
        }
        assert_eq!(seen.len(), 256, "encoding must be a bijection");
    }

    #[test]
    fn test_encode_is_pure() {
        let report = report_from_bits(0b1010_0110);
        assert_eq!(report.encode(), report.encode());
    }

    #[test]
    fn test_fever_is_fourth_feature() {
        let report = SymptomReport {
            fever: SymptomAnswer::Yes,
            ..SymptomReport::default()
        };
        assert_eq!(report.encode().as_slice(), &[0, 0, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_default_report_is_all_no() {
        assert_eq!(SymptomReport::default().encode().as_slice(), &[0; 8]);
    }

    #[test]
    fn test_answer_literals_are_strict() {
        assert_eq!("Yes".parse(), Ok(SymptomAnswer::Yes));
        assert_eq!("No".parse(), Ok(SymptomAnswer::No));

        for bad in ["yes", "NO", "Y", "", " Yes", "No "] {
            assert!(bad.parse::<SymptomAnswer>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_answer_feature_values() {
        assert_eq!(SymptomAnswer::Yes.as_feature(), 1);
        assert_eq!(SymptomAnswer::No.as_feature(), 0);
        assert_eq!(SymptomAnswer::No.toggled(), SymptomAnswer::Yes);
    }
}
