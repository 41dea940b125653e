use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Which tagging backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum TaggerBackend {
    /// Built-in lexicon/suffix tagger (default) — no service needed
    Rule,
    /// External HTTP tagging service — requires TAGGER_URL
    Remote,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Scores are
/// per-strategy knobs: they decide which variant wins downstream, so they
/// are configuration rather than code.
pub struct Config {
    /// Which tagging backend to use (default: Rule)
    pub tagger_backend: TaggerBackend,
    /// HTTP tagging service endpoint (required for the Remote backend)
    pub tagger_url: String,
    /// Directory containing the classifier model files
    pub model_dir: PathBuf,
    /// Score for the passthrough (doge) variant
    pub doge_score: f64,
    /// Score for the "X all the Y" variant
    pub x_all_the_y_score: f64,
    /// Score for the "One does not simply" variant
    pub one_does_not_simply_score: f64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only the Remote tagger backend requires an
    /// extra variable (validated by `require_remote_tagger`).
    pub fn load() -> Result<Self> {
        let tagger_backend = match env::var("MEMEFORGE_TAGGER").as_deref() {
            Ok("remote") => TaggerBackend::Remote,
            // "rule" or unset both default to the built-in tagger
            _ => TaggerBackend::Rule,
        };

        let model_dir = env::var("MEMEFORGE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::classifier::store::default_model_dir());

        Ok(Self {
            tagger_backend,
            tagger_url: env::var("TAGGER_URL").unwrap_or_default(),
            model_dir,
            doge_score: score_var("MEMEFORGE_DOGE_SCORE", 1.0)?,
            x_all_the_y_score: score_var("MEMEFORGE_X_ALL_THE_Y_SCORE", 4.0)?,
            one_does_not_simply_score: score_var("MEMEFORGE_ONE_DOES_NOT_SIMPLY_SCORE", 6.0)?,
        })
    }

    /// Check that the remote tagging service is configured.
    /// Call this before building a Remote-backend tagger.
    pub fn require_remote_tagger(&self) -> Result<()> {
        if self.tagger_backend == TaggerBackend::Remote && self.tagger_url.is_empty() {
            anyhow::bail!(
                "TAGGER_URL not set. The remote tagging backend needs an endpoint.\n\
                 Add it to your .env file, or unset MEMEFORGE_TAGGER to use the built-in tagger."
            );
        }
        Ok(())
    }

    /// Check that the classifier model files are in place.
    /// Call this before constructing the classifier-gated variant.
    pub fn require_classifier(&self) -> Result<()> {
        if !crate::classifier::store::model_files_present(&self.model_dir) {
            anyhow::bail!(
                "Classifier model files not found in {}\n\
                 Run `memeforge download-model` to download them.",
                self.model_dir.display()
            );
        }
        Ok(())
    }
}

/// Read a score override from the environment, falling back to `default`.
/// Strategy scores must be positive: a zero score would collide with the
/// no-candidate sentinel.
fn score_var(name: &str, default: f64) -> Result<f64> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => {
            let value: f64 = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("{name} must be a number, got {raw:?}"))?;
            if value <= 0.0 {
                anyhow::bail!("{name} must be positive, got {value}");
            }
            Ok(value)
        }
    }
}
