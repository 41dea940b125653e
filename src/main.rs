use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use memeforge::analysis::remote::RemoteTagger;
use memeforge::analysis::rules::RuleTagger;
use memeforge::analysis::traits::PosTagger;
use memeforge::classifier;
use memeforge::config::{Config, TaggerBackend};
use memeforge::memes::{doge::Doge, jackie_chan::JackieChan, one_does_not_simply::OneDoesNotSimply,
    x_all_the_y::XAllTheY, MemeVariant};
use memeforge::output::terminal::{display_candidates, display_tagged, CandidateRow};
use memeforge::post::Post;

/// Memeforge: meme caption generation for short social-media posts.
///
/// Runs every configured meme strategy over a post and prints the caption
/// candidates each one produces. Picking a winner (and posting it) is up
/// to whatever wraps this tool.
#[derive(Parser)]
#[command(name = "memeforge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate caption candidates for a post
    Caption {
        /// The post text to caption
        text: String,

        /// Provenance label for the post (e.g. the trending topic)
        #[arg(long, default_value = "")]
        topic: String,

        /// Skip the classifier-gated variant even if a model is present
        #[arg(long)]
        no_classifier: bool,
    },

    /// Show the token/tag sequence for a text (tagger debug view)
    Tag {
        /// The text to tokenize and tag
        text: String,
    },

    /// Download the ONNX caption classifier (~67 MB)
    DownloadModel,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("memeforge=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Caption {
            text,
            topic,
            no_classifier,
        } => {
            let config = Config::load()?;
            let tagger = build_tagger(&config)?;
            let variants = build_variants(&config, tagger, no_classifier)?;

            let post = Post::new(topic, text);
            info!(
                topic = %post.topic,
                variants = variants.len(),
                "Generating caption candidates"
            );

            let mut rows = Vec::with_capacity(variants.len());
            for variant in &variants {
                let caption = variant.generate(&post)?;
                rows.push(CandidateRow {
                    variant: variant.name().to_string(),
                    filename: variant.filename().to_string(),
                    caption,
                });
            }

            display_candidates(&post.text, &rows);
        }

        Commands::Tag { text } => {
            let config = Config::load()?;
            let tagger = build_tagger(&config)?;
            let tagged = tagger.tag(&text)?;
            display_tagged(&tagged);
        }

        Commands::DownloadModel => {
            let config = Config::load()?;
            println!("Downloading classifier model files...");
            classifier::download::download_model(&config.model_dir)?;
            println!("\nModel ready at: {}", config.model_dir.display());
        }
    }

    Ok(())
}

/// Build the tagging backend selected by configuration.
fn build_tagger(config: &Config) -> Result<Arc<dyn PosTagger>> {
    match config.tagger_backend {
        TaggerBackend::Rule => Ok(Arc::new(RuleTagger::new())),
        TaggerBackend::Remote => {
            config.require_remote_tagger()?;
            info!(url = %config.tagger_url, "Using remote tagging service");
            Ok(Arc::new(RemoteTagger::new(config.tagger_url.clone())))
        }
    }
}

/// Assemble the configured meme variants.
///
/// The classifier-gated variant joins only when its model files are present
/// (or is skipped outright with --no-classifier) — a missing model is a
/// degraded run, not a fatal one.
fn build_variants(
    config: &Config,
    tagger: Arc<dyn PosTagger>,
    no_classifier: bool,
) -> Result<Vec<MemeVariant>> {
    let mut variants = vec![
        MemeVariant::Doge(Doge::new("doge.jpg", config.doge_score)),
        MemeVariant::XAllTheY(XAllTheY::new(
            "x_all_the_y.jpg",
            config.x_all_the_y_score,
            Arc::clone(&tagger),
        )),
        MemeVariant::OneDoesNotSimply(OneDoesNotSimply::new(
            "one_does_not_simply.jpg",
            config.one_does_not_simply_score,
            Arc::clone(&tagger),
        )),
    ];

    if no_classifier {
        return Ok(variants);
    }

    if config.require_classifier().is_ok() {
        let gate = JackieChan::from_store("jackie_chan.jpg", &config.model_dir)?;
        variants.push(MemeVariant::JackieChan(gate));
    } else {
        warn!(
            "Classifier model not found in {} — skipping the jackie-chan variant. \
             Run `memeforge download-model` to enable it.",
            config.model_dir.display()
        );
    }

    Ok(variants)
}
