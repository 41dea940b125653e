// Doge — the passthrough strategy.
//
// The caption is always the post itself: doge memes work on any text, so
// the strategy performs no analysis and always has a candidate at its
// configured score. It serves as the floor other strategies must beat.

use crate::post::Post;

use super::Caption;

pub struct Doge {
    /// Image template identifier. Opaque here.
    pub filename: String,
    /// Score every caption from this variant receives.
    pub score: f64,
}

impl Doge {
    pub fn new(filename: impl Into<String>, score: f64) -> Self {
        Self {
            filename: filename.into(),
            score,
        }
    }

    pub fn generate(&self, post: &Post) -> Caption {
        Caption::new(post.text.clone(), self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echoes_post_text() {
        let meme = Doge::new("doge.jpg", 2.0);
        let post = Post::new("topic", "wow such caption");
        let caption = meme.generate(&post);
        assert_eq!(caption.text, "wow such caption");
        assert_eq!(caption.score, 2.0);
    }
}
