// Post — the input shape handed to the generation engine.
//
// Posts come from an external source (a feed puller, a dump file, a test).
// That source owns acquisition concerns: pagination, rate limits, stripping
// retweet prefixes and links, replacing non-BMP characters. By the time a
// Post reaches a meme variant it is plain analyzable text.

/// A scrubbed social-media post ready for caption generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// The utterance to analyze. Non-empty UTF-8.
    pub text: String,
    /// Provenance label (e.g. the trending topic the post was pulled for).
    /// Carried through for callers; generation logic never reads it.
    pub topic: String,
}

impl Post {
    pub fn new(topic: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            topic: topic.into(),
        }
    }
}
