// "One does not simply" — verb + sentence-remainder template rewrite.
//
// Lemmatizes the first usable verb and replays everything after it through
// the token recombiner: "One does not simply walk into Mordor."

use std::sync::Arc;

use crate::analysis::helpers::{combine_tokens, find_verbs, first_usable_verb, tag_sentence, token_index};
use crate::analysis::traits::{PosClass, PosTagger};
use crate::error::GenerateError;
use crate::post::Post;

use super::Caption;

pub struct OneDoesNotSimply {
    pub filename: String,
    pub score: f64,
    tagger: Arc<dyn PosTagger>,
}

impl OneDoesNotSimply {
    pub fn new(filename: impl Into<String>, score: f64, tagger: Arc<dyn PosTagger>) -> Self {
        Self {
            filename: filename.into(),
            score,
            tagger,
        }
    }

    pub fn generate(&self, post: &Post) -> Result<Caption, GenerateError> {
        let (tokens, tagged) = tag_sentence(self.tagger.as_ref(), &post.text)?;
        let verbs = find_verbs(&tagged);

        if verbs.is_empty() {
            return Ok(Caption::none());
        }
        let Some(verb) = first_usable_verb(&verbs) else {
            return Ok(Caption::none());
        };
        let Some(verb_idx) = token_index(&tokens, verb) else {
            return Ok(Caption::none());
        };

        let base = self.tagger.lemmatize(verb, PosClass::Verb)?;
        // The remainder's leading separator is supplied by combine_tokens;
        // no space is forced between the verb and it.
        let remainder = combine_tokens(&tokens[verb_idx + 1..]);
        Ok(Caption::new(
            format!("One does not simply {base}{remainder}"),
            self.score,
        ))
    }
}
