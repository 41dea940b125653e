// Colored terminal output for caption candidates.
//
// This module handles all terminal-specific formatting: colors, the
// candidate table, tag dumps. The main.rs display paths delegate here.

use colored::Colorize;

use crate::analysis::traits::TaggedToken;
use crate::memes::Caption;

/// One strategy's outcome for a post, ready for display.
pub struct CandidateRow {
    /// Strategy name (e.g. "x-all-the-y")
    pub variant: String,
    /// Image template the strategy captions
    pub filename: String,
    /// The generated candidate (possibly the no-candidate value)
    pub caption: Caption,
}

/// Display every strategy's candidate for a post.
pub fn display_candidates(post_text: &str, rows: &[CandidateRow]) {
    println!(
        "\n{}",
        format!("=== Candidates for: {} ===", super::truncate_chars(post_text, 60)).bold()
    );
    println!();

    println!(
        "  {:<20} {:<16} {:>6}  {}",
        "Variant".dimmed(),
        "Template".dimmed(),
        "Score".dimmed(),
        "Caption".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for row in rows {
        if row.caption.is_none() {
            println!(
                "  {:<20} {:<16} {:>6}  {}",
                row.variant,
                row.filename,
                "-",
                "(no candidate)".dimmed()
            );
        } else {
            println!(
                "  {:<20} {:<16} {:>6.1}  {}",
                row.variant,
                row.filename,
                row.caption.score,
                row.caption.text.green()
            );
        }
    }

    println!();

    let produced = rows.iter().filter(|r| !r.caption.is_none()).count();
    if produced == 0 {
        println!("  {} no strategy produced a caption", "~".yellow());
    } else {
        println!("  {} {produced} candidate(s) generated", "*".green());
    }
}

/// Display a tagged token sequence, one token per line. Debug aid for the
/// `tag` subcommand.
pub fn display_tagged(tagged: &[TaggedToken]) {
    println!();
    for token in tagged {
        let tag = if token.tag.contains("VB") {
            token.tag.red().bold()
        } else if token.tag == "NNS" {
            token.tag.yellow().bold()
        } else {
            token.tag.normal()
        };
        println!("  {:<20} {}", token.word, tag);
    }
    println!();
}
