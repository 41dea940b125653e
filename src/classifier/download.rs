// Model download helper for the ONNX caption classifier.
//
// Fetches a quantized DistilBERT SST-2 sentiment model (~67MB) from
// HuggingFace and writes a default classifier.json sidecar next to it.
// Files are stored in a platform-appropriate directory
// (~/.local/share/memeforge/models/ on Linux) so they persist across runs.
//
// This is CLI tooling — the generation core itself never touches the
// network or the filesystem.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::store::ClassifierMeta;

/// HuggingFace repo for the classifier model.
const CLASSIFIER_HF_URL: &str =
    "https://huggingface.co/Xenova/distilbert-base-uncased-finetuned-sst-2-english/resolve/main";

const MODEL_FILE: &str = "model_quantized.onnx";
const MODEL_REMOTE_PATH: &str = "onnx/model_quantized.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";
const META_FILE: &str = "classifier.json";

/// Download the classifier model files into `dir`.
///
/// Shows a progress bar for the large model file. Skips files that already
/// exist. Creates directories as needed.
pub fn download_model(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;

    println!("\nCaption classifier (distilbert sst-2):");

    let tokenizer_path = dir.join(TOKENIZER_FILE);
    if tokenizer_path.exists() {
        info!("Classifier tokenizer already exists, skipping");
        println!("  {} (already exists)", TOKENIZER_FILE);
    } else {
        println!("  Downloading {}...", TOKENIZER_FILE);
        download_file(
            &format!("{}/{}", CLASSIFIER_HF_URL, TOKENIZER_FILE),
            &tokenizer_path,
            false,
        )?;
    }

    let model_path = dir.join(MODEL_FILE);
    if model_path.exists() {
        info!("Classifier model already exists, skipping");
        println!("  {} (already exists)", MODEL_FILE);
    } else {
        println!("  Downloading {} (~67 MB)...", MODEL_FILE);
        download_file(
            &format!("{}/{}", CLASSIFIER_HF_URL, MODEL_REMOTE_PATH),
            &model_path,
            true,
        )?;
    }

    let meta_path = dir.join(META_FILE);
    if !meta_path.exists() {
        let meta = ClassifierMeta::default();
        std::fs::write(&meta_path, serde_json::to_string_pretty(&meta)?)
            .with_context(|| format!("Failed to write {}", meta_path.display()))?;
        println!("  {} (default score/threshold written)", META_FILE);
    }

    Ok(())
}

/// Download a single file from a URL to a local path.
/// If `show_progress` is true, display a progress bar.
fn download_file(url: &str, dest: &Path, show_progress: bool) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let total_size = response.content_length();

    let pb = if show_progress {
        let pb = if let Some(size) = total_size {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .expect("valid template")
                    .progress_chars("=> "),
            );
            pb
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .expect("valid template"),
            );
            pb
        };
        Some(pb)
    } else {
        None
    };

    let bytes = response.bytes().context("Failed to read response body")?;

    if let Some(ref pb) = pb {
        pb.set_position(bytes.len() as u64);
    }

    std::fs::write(dest, &bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
