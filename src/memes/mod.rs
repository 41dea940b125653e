// Meme variants — the caption generation strategies.
//
// Every strategy answers one question for a post: "what caption would this
// meme put on it, and how confident is it?" Strategies are a closed set,
// dispatched through the MemeVariant enum rather than a trait-object
// hierarchy — callers iterate their configured variants and collect
// candidates; picking a winner among them is not this module's job.

pub mod doge;
pub mod jackie_chan;
pub mod one_does_not_simply;
pub mod x_all_the_y;

use crate::error::GenerateError;
use crate::post::Post;

/// A caption candidate: text plus the generating strategy's confidence.
///
/// Invariant: `text` is empty if and only if `score` is zero. "Nothing
/// applicable" is always the same value, never a non-empty caption at score
/// zero or an empty one with a score attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub score: f64,
}

impl Caption {
    /// The canonical no-candidate result.
    pub fn none() -> Self {
        Self {
            text: String::new(),
            score: 0.0,
        }
    }

    /// A real candidate. `text` must be non-empty and `score` non-zero;
    /// use `none()` for the empty case.
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        let text = text.into();
        debug_assert!(
            !text.is_empty() && score != 0.0,
            "Caption::new with empty text or zero score — use Caption::none()"
        );
        Self { text, score }
    }

    /// True when this is the no-candidate result.
    pub fn is_none(&self) -> bool {
        self.text.is_empty()
    }
}

/// A configured meme strategy. Construct once, call `generate` per post.
///
/// Each variant carries its own immutable configuration payload; no state
/// mutates between calls, so repeated generation over the same post is
/// bit-identical and variants can be invoked from independent threads.
pub enum MemeVariant {
    /// Emits the post verbatim at a fixed score.
    Doge(doge::Doge),
    /// "{verb} all the {nouns}!" rewrite.
    XAllTheY(x_all_the_y::XAllTheY),
    /// "One does not simply {verb} {rest}" rewrite.
    OneDoesNotSimply(one_does_not_simply::OneDoesNotSimply),
    /// Verbatim caption gated on a pretrained binary classifier.
    JackieChan(jackie_chan::JackieChan),
}

impl MemeVariant {
    /// Produce this strategy's caption candidate for `post`.
    ///
    /// Finding nothing applicable is the `Caption::none()` result, not an
    /// error; only genuine backend failures (tagging service, classifier)
    /// surface as `Err`.
    pub fn generate(&self, post: &Post) -> Result<Caption, GenerateError> {
        match self {
            MemeVariant::Doge(m) => Ok(m.generate(post)),
            MemeVariant::XAllTheY(m) => Ok(m.generate(post)?),
            MemeVariant::OneDoesNotSimply(m) => Ok(m.generate(post)?),
            MemeVariant::JackieChan(m) => Ok(m.generate(post)?),
        }
    }

    /// The image template this variant captions. Opaque to generation logic.
    pub fn filename(&self) -> &str {
        match self {
            MemeVariant::Doge(m) => &m.filename,
            MemeVariant::XAllTheY(m) => &m.filename,
            MemeVariant::OneDoesNotSimply(m) => &m.filename,
            MemeVariant::JackieChan(m) => &m.filename,
        }
    }

    /// Human-readable strategy name for logs and terminal output.
    pub fn name(&self) -> &'static str {
        match self {
            MemeVariant::Doge(_) => "doge",
            MemeVariant::XAllTheY(_) => "x-all-the-y",
            MemeVariant::OneDoesNotSimply(_) => "one-does-not-simply",
            MemeVariant::JackieChan(_) => "jackie-chan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_none_is_empty_and_zero() {
        let none = Caption::none();
        assert!(none.is_none());
        assert_eq!(none.text, "");
        assert_eq!(none.score, 0.0);
    }

    #[test]
    fn test_caption_new_is_some() {
        let c = Caption::new("hello", 3.0);
        assert!(!c.is_none());
    }
}
