// Jackie Chan — the classifier-gated strategy.
//
// A thin decision gate around a pretrained binary model: run the injected
// feature function over the post text, ask the classifier, and either emit
// the post verbatim at the configured score or report no candidate. All
// linguistic judgement lives in the feature function / classifier pairing;
// the strategy itself owns only the two-way branch.

use std::path::Path;

use crate::classifier::store::load_classifier;
use crate::classifier::traits::{BinaryClassifier, FeatureFn, Features};
use crate::error::{ClassificationError, GenerateError};
use crate::post::Post;

use super::Caption;

pub struct JackieChan {
    pub filename: String,
    pub score: f64,
    classifier: Box<dyn BinaryClassifier>,
    feature_fn: FeatureFn,
}

impl JackieChan {
    /// Construct from an already-loaded classifier. The classifier is owned
    /// by this variant for its lifetime and never mutated after load.
    pub fn new(
        filename: impl Into<String>,
        classifier: Box<dyn BinaryClassifier>,
        score: f64,
        feature_fn: FeatureFn,
    ) -> Self {
        Self {
            filename: filename.into(),
            score,
            classifier,
            feature_fn,
        }
    }

    /// Construct by loading the classifier (and its configured score) from
    /// a model directory, with raw text as the feature representation.
    pub fn from_store(
        filename: impl Into<String>,
        model_dir: &Path,
    ) -> Result<Self, ClassificationError> {
        let (classifier, score) = load_classifier(model_dir)?;
        Ok(Self::new(
            filename,
            Box::new(classifier),
            score,
            Box::new(|text| Features::Text(text.to_string())),
        ))
    }

    pub fn generate(&self, post: &Post) -> Result<Caption, GenerateError> {
        let features = (self.feature_fn)(&post.text);
        if self.classifier.classify(&features)? {
            Ok(Caption::new(post.text.clone(), self.score))
        } else {
            Ok(Caption::none())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClassifier(bool);

    impl BinaryClassifier for FixedClassifier {
        fn classify(&self, _features: &Features) -> Result<bool, ClassificationError> {
            Ok(self.0)
        }
    }

    fn gate(decision: bool) -> JackieChan {
        JackieChan::new(
            "jackie.jpg",
            Box::new(FixedClassifier(decision)),
            7.0,
            Box::new(crate::classifier::traits::text_features),
        )
    }

    #[test]
    fn test_accept_emits_post_verbatim() {
        let post = Post::new("t", "what is this caption");
        let caption = gate(true).generate(&post).unwrap();
        assert_eq!(caption.text, "what is this caption");
        assert_eq!(caption.score, 7.0);
    }

    #[test]
    fn test_reject_is_no_candidate() {
        let post = Post::new("t", "what is this caption");
        assert!(gate(false).generate(&post).unwrap().is_none());
    }
}
