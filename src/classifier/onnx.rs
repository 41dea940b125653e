// Local ONNX caption classifier.
//
// Runs a quantized DistilBERT sentiment head (SST-2 fine-tune) entirely on
// the local CPU — no API calls, no rate limits. The gate accepts a post
// when the positive-class probability clears the configured threshold:
// upbeat posts caption well verbatim, dour ones don't.
//
// Model: Xenova/distilbert-base-uncased-finetuned-sst-2-english (~67MB)
// Output: 2 logits (negative, positive) turned into probabilities via softmax.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use crate::error::ClassificationError;

use super::traits::{BinaryClassifier, Features};

/// Index of the positive class in the model's 2-logit output.
const POSITIVE_LOGIT: usize = 1;

/// ONNX-backed binary classifier. The session sits behind a Mutex only
/// because `ort::Session::run` takes `&mut self`; the model itself is
/// read-only after load.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    /// Positive-class probability at or above which the classifier accepts.
    threshold: f64,
}

impl OnnxClassifier {
    /// Load the ONNX model and tokenizer from the given directory.
    ///
    /// Expects `model_quantized.onnx` and `tokenizer.json` to exist in
    /// `model_dir`. Call `download::download_model()` first if they don't.
    pub fn load(model_dir: &Path, threshold: f64) -> Result<Self, ClassificationError> {
        let model_path = model_dir.join("model_quantized.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");

        if !model_path.exists() {
            return Err(ClassificationError::ModelLoad(format!(
                "model file not found: {} (run `memeforge download-model` first)",
                model_path.display()
            )));
        }
        if !tokenizer_path.exists() {
            return Err(ClassificationError::ModelLoad(format!(
                "tokenizer file not found: {} (run `memeforge download-model` first)",
                tokenizer_path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| ClassificationError::ModelLoad(e.to_string()))?
            .commit_from_file(&model_path)
            .map_err(|e| {
                ClassificationError::ModelLoad(format!(
                    "failed to load ONNX model from {}: {e}",
                    model_path.display()
                ))
            })?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassificationError::ModelLoad(e.to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            threshold,
        })
    }

    fn classify_text(&self, text: &str) -> Result<bool, ClassificationError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ClassificationError::Tokenization(e.to_string()))?;

        let ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();
        let shape = [1i64, ids.len() as i64];

        let input_ids = Tensor::from_array((shape, ids))
            .map_err(|e| ClassificationError::Inference(e.to_string()))?;
        let attention_mask = Tensor::from_array((shape, mask))
            .map_err(|e| ClassificationError::Inference(e.to_string()))?;

        let logits = {
            let mut session = self
                .session
                .lock()
                .map_err(|e| ClassificationError::Inference(format!("session lock poisoned: {e}")))?;

            let outputs = session
                .run(ort::inputs! {
                    "input_ids" => input_ids,
                    "attention_mask" => attention_mask
                })
                .map_err(|e| ClassificationError::Inference(e.to_string()))?;

            // Output shape: [1, 2] — raw logits (negative, positive)
            let (_shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| ClassificationError::Inference(e.to_string()))?;
            data.to_vec()
        };

        if logits.len() < 2 {
            return Err(ClassificationError::Inference(format!(
                "expected 2 logits, got {}",
                logits.len()
            )));
        }

        let positive = softmax_binary(logits[0] as f64, logits[1] as f64)[POSITIVE_LOGIT];
        let accept = positive >= self.threshold;

        debug!(
            positive = positive,
            threshold = self.threshold,
            accept = accept,
            text_preview = %crate::output::truncate_chars(text, 50),
            "Classified text"
        );

        Ok(accept)
    }
}

impl BinaryClassifier for OnnxClassifier {
    fn classify(&self, features: &Features) -> Result<bool, ClassificationError> {
        match features {
            Features::Text(text) => self.classify_text(text),
            Features::Presence(_) => Err(ClassificationError::UnsupportedFeatures(
                "ONNX backend expects Features::Text, got Features::Presence",
            )),
            Features::Dense(_) => Err(ClassificationError::UnsupportedFeatures(
                "ONNX backend expects Features::Text, got Features::Dense",
            )),
        }
    }
}

/// Softmax over a 2-logit output: returns [p_negative, p_positive].
fn softmax_binary(a: f64, b: f64) -> [f64; 2] {
    let max = a.max(b);
    let ea = (a - max).exp();
    let eb = (b - max).exp();
    let sum = ea + eb;
    [ea / sum, eb / sum]
}
