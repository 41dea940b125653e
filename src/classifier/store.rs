// Classifier storage — resolve a model directory into a ready classifier.
//
// A stored classifier is three files in one directory:
//   model_quantized.onnx  — the pretrained weights
//   tokenizer.json        — its tokenizer
//   classifier.json       — sidecar metadata: the caption score this
//                           classifier awards on accept, and the decision
//                           threshold
//
// load_classifier() deserializes the triple once, at variant construction.
// Training and export of the model are out of scope — the files arrive via
// `memeforge download-model` or are dropped in place by hand.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClassificationError;

use super::onnx::OnnxClassifier;

/// Sidecar metadata stored next to the model files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierMeta {
    /// Score awarded to a caption this classifier accepts.
    pub score: f64,
    /// Positive-class probability required to accept (default 0.5).
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl Default for ClassifierMeta {
    fn default() -> Self {
        Self {
            score: 5.0,
            threshold: default_threshold(),
        }
    }
}

/// Returns the default directory for storing classifier files.
/// Uses the platform data directory: ~/.local/share/memeforge/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("memeforge")
        .join("models")
}

/// Check whether both required model files exist.
pub fn model_files_present(dir: &Path) -> bool {
    dir.join("model_quantized.onnx").exists() && dir.join("tokenizer.json").exists()
}

/// Load the classifier and its configured score from `dir`.
///
/// A missing `classifier.json` falls back to the default metadata; missing
/// model files are an error.
pub fn load_classifier(dir: &Path) -> Result<(OnnxClassifier, f64), ClassificationError> {
    let meta = load_meta(dir)?;
    let classifier = OnnxClassifier::load(dir, meta.threshold)?;

    debug!(
        score = meta.score,
        threshold = meta.threshold,
        dir = %dir.display(),
        "Loaded classifier"
    );

    Ok((classifier, meta.score))
}

fn load_meta(dir: &Path) -> Result<ClassifierMeta, ClassificationError> {
    let meta_path = dir.join("classifier.json");
    if !meta_path.exists() {
        return Ok(ClassifierMeta::default());
    }
    let raw = std::fs::read_to_string(&meta_path).map_err(|e| {
        ClassificationError::ModelLoad(format!("failed to read {}: {e}", meta_path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        ClassificationError::ModelLoad(format!("invalid {}: {e}", meta_path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_dir_is_under_memeforge() {
        let dir = default_model_dir();
        let path_str = dir.to_string_lossy();
        assert!(
            path_str.contains("memeforge") && path_str.contains("models"),
            "Expected path containing memeforge/models, got: {path_str}"
        );
    }

    #[test]
    fn test_model_files_present_false_when_empty() {
        let dir = std::env::temp_dir().join("memeforge-test-nonexistent");
        assert!(!model_files_present(&dir));
    }

    #[test]
    fn test_load_meta_defaults_when_missing() {
        let dir = std::env::temp_dir().join("memeforge-test-no-meta");
        std::fs::create_dir_all(&dir).unwrap();
        let meta = load_meta(&dir).unwrap();
        assert!((meta.threshold - 0.5).abs() < 1e-10);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_meta_reads_sidecar() {
        let dir = std::env::temp_dir().join("memeforge-test-meta");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("classifier.json"),
            r#"{"score": 8.5, "threshold": 0.7}"#,
        )
        .unwrap();

        let meta = load_meta(&dir).unwrap();
        assert!((meta.score - 8.5).abs() < 1e-10);
        assert!((meta.threshold - 0.7).abs() < 1e-10);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_meta_threshold_defaults_in_partial_sidecar() {
        let dir = std::env::temp_dir().join("memeforge-test-meta-partial");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("classifier.json"), r#"{"score": 3.0}"#).unwrap();

        let meta = load_meta(&dir).unwrap();
        assert!((meta.score - 3.0).abs() < 1e-10);
        assert!((meta.threshold - 0.5).abs() < 1e-10);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
