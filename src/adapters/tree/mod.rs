//! Decision tree adapter: Implementation of `Classifier` backed by the
//! exported tree artifact.
//!
//! The artifact is produced by the training pipeline as JSON and treated as
//! an opaque, immutable input here: it is loaded and validated exactly once
//! at startup, and every later prediction is a pure walk over the same tree.
//!
//! # Validation
//!
//! A model that does not match the expected input shape must never serve
//! predictions. `load` therefore checks, before the adapter is handed out:
//!
//! - the declared feature names match the encoder's order exactly
//! - the declared classes are the binary {0, 1} labels
//! - every split references an in-bounds feature with a finite threshold
//! - every leaf carries a declared class label

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use crate::ports::{Classifier, PredictError};

/// Artifact schema version this adapter understands.
const SUPPORTED_VERSION: u32 = 1;

/// Default artifact file name when `load` is pointed at a directory.
const ARTIFACT_FILE: &str = "adenovirus_tree.json";

/// Decision tree exported by the training pipeline.
///
/// This matches the JSON structure written by the model export step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedTreeModel {
    pub version: u32,
    pub feature_names: Vec<String>,
    pub classes: Vec<u8>,
    pub root: TreeNode,
}

/// A node in the exported decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Internal decision node: `feature <= threshold` goes left, else right.
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    /// Leaf node with the predicted class label and the number of training
    /// samples that reached it.
    Leaf { label: u8, samples: u32 },
}

impl TreeNode {
    /// Depth of the tree rooted at this node (leaves have depth 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Errors raised while loading the model artifact.
///
/// All of these are fatal startup conditions: a process that cannot load a
/// valid model must not serve predictions.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model artifact format: {0}")]
    Format(#[from] serde_json::Error),

    #[error("unsupported model version {0} (expected {SUPPORTED_VERSION})")]
    Version(u32),

    #[error("model shape incompatible with encoder: {0}")]
    Shape(String),
}

/// Classifier backed by the exported decision tree.
#[derive(Debug)]
pub struct DecisionTreeModel {
    root: TreeNode,
}

impl DecisionTreeModel {
    /// Load and validate the artifact at `path`.
    ///
    /// `path` may be the artifact file itself or a directory containing
    /// `adenovirus_tree.json`.
    ///
    /// # Errors
    /// Returns error if the artifact is missing, corrupt, or incompatible
    /// with the encoder's feature order.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model_path = if path.is_dir() {
            path.join(ARTIFACT_FILE)
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&model_path)?;
        let model = Self::from_json(&content)?;

        tracing::info!(
            "Loaded decision tree model from {:?} ({} features, depth {})",
            model_path,
            FEATURE_COUNT,
            model.root.depth()
        );

        Ok(model)
    }

    /// Parse and validate an artifact from its JSON text.
    ///
    /// # Errors
    /// Returns error if parsing fails or the declared shape does not match
    /// the encoder contract.
    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        let artifact: ExportedTreeModel = serde_json::from_str(content)?;

        if artifact.version != SUPPORTED_VERSION {
            return Err(ModelError::Version(artifact.version));
        }

        let n = artifact.feature_names.len();
        if n != FEATURE_COUNT {
            return Err(ModelError::Shape(format!(
                "expected {FEATURE_COUNT} features, artifact declares {n}"
            )));
        }
        for (i, (declared, expected)) in
            artifact.feature_names.iter().zip(FEATURE_NAMES).enumerate()
        {
            if declared != expected {
                return Err(ModelError::Shape(format!(
                    "feature {i} is {declared:?}, encoder produces {expected:?}"
                )));
            }
        }

        if artifact.classes != [0, 1] {
            return Err(ModelError::Shape(format!(
                "expected binary classes [0, 1], artifact declares {:?}",
                artifact.classes
            )));
        }

        validate_node(&artifact.root, &artifact.classes)?;

        Ok(Self {
            root: artifact.root,
        })
    }
}

fn validate_node(node: &TreeNode, classes: &[u8]) -> Result<(), ModelError> {
    match node {
        TreeNode::Split {
            feature,
            threshold,
            left,
            right,
        } => {
            if *feature >= FEATURE_COUNT {
                return Err(ModelError::Shape(format!(
                    "split references feature index {feature}, only {FEATURE_COUNT} exist"
                )));
            }
            if !threshold.is_finite() {
                return Err(ModelError::Shape(format!(
                    "split on feature {feature} has non-finite threshold"
                )));
            }
            validate_node(left, classes)?;
            validate_node(right, classes)
        }
        TreeNode::Leaf { label, .. } => {
            if !classes.contains(label) {
                return Err(ModelError::Shape(format!(
                    "leaf label {label} is not a declared class"
                )));
            }
            Ok(())
        }
    }
}

impl Classifier for DecisionTreeModel {
    fn predict(&self, features: &FeatureVector) -> Result<u8, PredictError> {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    // Validated at load time; defended here so a defect fails
                    // the operation instead of producing a guessed label.
                    let value = features.get(*feature).ok_or(PredictError::FeatureIndex {
                        index: *feature,
                        len: features.len(),
                    })?;

                    node = if f64::from(value) <= *threshold {
                        left
                    } else {
                        right
                    };
                }
                TreeNode::Leaf { label, .. } => return Ok(*label),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SymptomAnswer, SymptomReport};

    fn feature_names_json() -> String {
        serde_json::to_string(&FEATURE_NAMES).expect("Names serialize")
    }

    /// Minimal valid artifact: splits on fever (index 3) only.
    fn fever_only_artifact() -> String {
        format!(
            r#"{{
                "version": 1,
                "feature_names": {},
                "classes": [0, 1],
                "root": {{"Split": {{
                    "feature": 3,
                    "threshold": 0.5,
                    "left": {{"Leaf": {{"label": 0, "samples": 120}}}},
                    "right": {{"Leaf": {{"label": 1, "samples": 80}}}}
                }}}}
            }}"#,
            feature_names_json()
        )
    }

    fn all_yes() -> SymptomReport {
        SymptomReport::from_answers([SymptomAnswer::Yes; FEATURE_COUNT])
    }

    #[test]
    fn test_predict_walks_the_tree() {
        let model = DecisionTreeModel::from_json(&fever_only_artifact()).expect("Valid artifact");

        let low = SymptomReport::default().encode();
        assert_eq!(model.predict(&low), Ok(0));

        let high = SymptomReport {
            fever: SymptomAnswer::Yes,
            ..SymptomReport::default()
        }
        .encode();
        assert_eq!(model.predict(&high), Ok(1));
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let err = DecisionTreeModel::load(Path::new("no/such/dir/model.json"))
            .expect_err("Missing artifact must not load");
        assert!(matches!(err, ModelError::Io(_)));
    }

    #[test]
    fn test_corrupt_artifact_is_rejected() {
        let err = DecisionTreeModel::from_json("{not json").expect_err("Corrupt JSON");
        assert!(matches!(err, ModelError::Format(_)));
    }

    #[test]
    fn test_unsupported_version_is_rejected() {
        let artifact = fever_only_artifact().replace("\"version\": 1", "\"version\": 2");
        let err = DecisionTreeModel::from_json(&artifact).expect_err("Version 2 unsupported");
        assert!(matches!(err, ModelError::Version(2)));
    }

    #[test]
    fn test_wrong_feature_count_is_rejected() {
        let artifact = fever_only_artifact().replace(
            &feature_names_json(),
            r#"["breathing_problem", "pink_eye"]"#,
        );
        let err = DecisionTreeModel::from_json(&artifact).expect_err("Two features is not eight");
        assert!(matches!(err, ModelError::Shape(_)));
    }

    #[test]
    fn test_reordered_feature_names_are_rejected() {
        // Same names, fever and pneumonia swapped: trained order must match.
        let artifact = fever_only_artifact().replace(
            &feature_names_json(),
            r#"["breathing_problem","pink_eye","fever","pneumonia","acute_gastroenteritis","dry_cough","sore_throat","bladder_infection"]"#,
        );
        let err = DecisionTreeModel::from_json(&artifact).expect_err("Order mismatch");
        assert!(matches!(err, ModelError::Shape(_)));
    }

    #[test]
    fn test_non_binary_classes_are_rejected() {
        let artifact = fever_only_artifact().replace("\"classes\": [0, 1]", "\"classes\": [0, 1, 2]");
        let err = DecisionTreeModel::from_json(&artifact).expect_err("Three classes");
        assert!(matches!(err, ModelError::Shape(_)));
    }

    #[test]
    fn test_out_of_bounds_split_is_rejected() {
        let artifact = fever_only_artifact().replace("\"feature\": 3", "\"feature\": 9");
        let err = DecisionTreeModel::from_json(&artifact).expect_err("Feature 9 of 8");
        assert!(matches!(err, ModelError::Shape(_)));
    }

    #[test]
    fn test_undeclared_leaf_label_is_rejected() {
        let artifact = fever_only_artifact().replace("\"label\": 1", "\"label\": 7");
        let err = DecisionTreeModel::from_json(&artifact).expect_err("Label 7 undeclared");
        assert!(matches!(err, ModelError::Shape(_)));
    }

    #[test]
    fn test_shipped_artifact_loads_and_classifies() {
        let model = DecisionTreeModel::load(Path::new("models")).expect("Shipped artifact loads");

        assert_eq!(model.predict(&SymptomReport::default().encode()), Ok(0));
        assert_eq!(model.predict(&all_yes().encode()), Ok(1));
    }
}
