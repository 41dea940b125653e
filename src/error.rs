// Error taxonomy for the generation engine.
//
// The library keeps typed errors so callers can tell a failed tagging
// backend apart from a failed classifier. The binary wraps these in
// anyhow at the edge. "No candidate" is never an error — strategies
// report it as Caption::none().

use thiserror::Error;

/// The linguistic backend failed to process input.
///
/// These propagate unchanged out of `generate` — the engine performs no
/// retries or local recovery.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("tagging service request failed: {0}")]
    ServiceUnavailable(String),

    #[error("tagging service returned an unusable response: {0}")]
    BadResponse(String),

    #[error("input could not be analyzed: {0}")]
    UnprocessableInput(String),
}

/// The classifier or its feature pipeline failed.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("classifier does not support this feature representation: {0}")]
    UnsupportedFeatures(&'static str),

    #[error("feature tokenization failed: {0}")]
    Tokenization(String),

    #[error("classifier inference failed: {0}")]
    Inference(String),

    #[error("classifier model could not be loaded: {0}")]
    ModelLoad(String),
}

/// Union error returned by `MemeVariant::generate`.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),
}
