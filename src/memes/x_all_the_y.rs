// "X all the Y" — verb + plural-noun template rewrite.
//
// Finds the first usable verb and the first plural common noun after it,
// then recasts the post as the rallying cry: "clean all the things!".

use std::sync::Arc;

use crate::analysis::helpers::{
    find_plural_common_nouns, find_verbs, first_usable_verb, tag_sentence, token_index,
};
use crate::analysis::traits::{PosClass, PosTagger, TaggedToken};
use crate::error::GenerateError;
use crate::post::Post;

use super::Caption;

pub struct XAllTheY {
    pub filename: String,
    pub score: f64,
    tagger: Arc<dyn PosTagger>,
}

impl XAllTheY {
    pub fn new(filename: impl Into<String>, score: f64, tagger: Arc<dyn PosTagger>) -> Self {
        Self {
            filename: filename.into(),
            score,
            tagger,
        }
    }

    /// First plural noun whose token position is strictly after the verb.
    ///
    /// Positions resolve by surface form through `token_index`, so a noun
    /// that also appears earlier in the sentence counts at its first
    /// occurrence. That first-occurrence rule is the documented tie-break.
    fn first_noun_after<'a>(
        nouns: &[&'a TaggedToken],
        tokens: &[String],
        verb_idx: usize,
    ) -> Option<&'a str> {
        nouns
            .iter()
            .map(|t| t.word.as_str())
            .find(|word| token_index(tokens, word).is_some_and(|i| i > verb_idx))
    }

    pub fn generate(&self, post: &Post) -> Result<Caption, GenerateError> {
        let (tokens, tagged) = tag_sentence(self.tagger.as_ref(), &post.text)?;
        let verbs = find_verbs(&tagged);
        let nouns = find_plural_common_nouns(&tagged);

        if verbs.is_empty() || nouns.is_empty() {
            return Ok(Caption::none());
        }

        let Some(verb) = first_usable_verb(&verbs) else {
            return Ok(Caption::none());
        };
        let Some(verb_idx) = token_index(&tokens, verb) else {
            return Ok(Caption::none());
        };
        let Some(noun) = Self::first_noun_after(&nouns, &tokens, verb_idx) else {
            return Ok(Caption::none());
        };

        let base = self.tagger.lemmatize(verb, PosClass::Verb)?;
        Ok(Caption::new(format!("{base} all the {noun}!"), self.score))
    }
}
