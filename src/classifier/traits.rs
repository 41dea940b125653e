// Binary classifier trait — the decision gate's only view of the model.
//
// The classifier-gated strategy never inspects features or model internals;
// it hands the feature function's output to classify() and branches on the
// boolean. Which Features variant a feature function produces is a private
// agreement between it and the classifier implementation.

use std::collections::HashMap;

use crate::error::ClassificationError;

/// Feature representation handed to a classifier. Opaque to the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum Features {
    /// Raw text, for models that do their own tokenization (the ONNX backend)
    Text(String),
    /// Named word-presence features, for lexicon-style classifiers
    Presence(HashMap<String, bool>),
    /// Dense vector for models expecting precomputed features
    Dense(Vec<f32>),
}

/// Feature-extraction function injected per classifier-gated variant.
/// Maps raw post text to whatever representation the paired classifier
/// expects.
pub type FeatureFn = Box<dyn Fn(&str) -> Features + Send + Sync>;

/// The identity feature function: hand the raw text straight to a model
/// that tokenizes internally.
pub fn text_features(text: &str) -> Features {
    Features::Text(text.to_string())
}

/// A pretrained binary decision model. Loaded once at variant construction,
/// read-only afterwards, and safe for concurrent use.
pub trait BinaryClassifier: Send + Sync {
    /// Classify a feature representation into accept (true) / reject (false).
    fn classify(&self, features: &Features) -> Result<bool, ClassificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_features_wraps_input() {
        assert_eq!(
            text_features("cats rule"),
            Features::Text("cats rule".to_string())
        );
    }
}
