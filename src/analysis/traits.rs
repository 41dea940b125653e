// POS tagger trait — the swap-ready abstraction over the linguistic backend.
//
// Tokenization, tagging, and lemmatization are a consumed service, not
// something the generation engine owns. The default implementation is the
// built-in rule tagger; a remote HTTP tagging service is available as an
// alternative backend. Strategies only ever see this trait.

use crate::error::AnalysisError;

/// A token paired with its part-of-speech tag.
///
/// The tag vocabulary is Penn-Treebank-like and belongs to the backend; the
/// engine only pattern-matches on it (`VB` substring for the verb family,
/// exact `NNS` for plural common nouns) and never interprets the full tagset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Part-of-speech class for lemmatization requests.
///
/// Only the verb mode is used today; the enum keeps the contract open the
/// same way the upstream lemmatizers parameterize theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosClass {
    Verb,
}

/// Trait for the linguistic backend. Implementations must preserve original
/// token order and must be safe for concurrent read-only use — a tagger is
/// constructed once and shared across variants.
pub trait PosTagger: Send + Sync {
    /// Tokenize `text` and tag every token, order preserved.
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, AnalysisError>;

    /// Normalize a word to its dictionary base form for the given POS class.
    /// Pure function of the word — no sentence context needed.
    fn lemmatize(&self, word: &str, pos: PosClass) -> Result<String, AnalysisError>;
}
