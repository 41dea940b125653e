// Shared text-analysis helpers.
//
// Stateless functions used by every templated strategy: tag a sentence
// through the injected backend, filter verbs and plural nouns out of the
// tagged sequence, pick the first usable verb, and recombine a token slice
// back into readable text.

use crate::error::AnalysisError;

use super::traits::{PosTagger, TaggedToken};

/// Tag `text` through the backend, returning the token sequence and its
/// parallel tagged sequence. Backend failures surface to the caller.
pub fn tag_sentence(
    tagger: &dyn PosTagger,
    text: &str,
) -> Result<(Vec<String>, Vec<TaggedToken>), AnalysisError> {
    let tagged = tagger.tag(text)?;
    let tokens = tagged.iter().map(|t| t.word.clone()).collect();
    Ok((tokens, tagged))
}

/// Every tagged token in the verb family (`VB`, `VBD`, `VBG`, `VBN`, `VBP`,
/// `VBZ` all share the `VB` prefix). Order preserved; may be empty.
pub fn find_verbs(tagged: &[TaggedToken]) -> Vec<&TaggedToken> {
    tagged.iter().filter(|t| t.tag.contains("VB")).collect()
}

/// Every plural common noun (exact `NNS` tag — proper plurals are `NNPS`
/// and deliberately excluded). Order preserved; may be empty.
pub fn find_plural_common_nouns(tagged: &[TaggedToken]) -> Vec<&TaggedToken> {
    tagged.iter().filter(|t| t.tag == "NNS").collect()
}

/// Scan verb candidates in order and return the first whose surface form is
/// longer than two characters and starts with an alphabetic character. This
/// skips auxiliary fragments ("'s", "do") and contraction leftovers ("n't").
///
/// `None` is a normal outcome, not an error — callers fall back to the
/// no-candidate result.
pub fn first_usable_verb<'a>(verbs: &[&'a TaggedToken]) -> Option<&'a str> {
    verbs
        .iter()
        .map(|t| t.word.as_str())
        .find(|w| w.chars().count() > 2 && w.chars().next().is_some_and(|c| c.is_alphabetic()))
}

/// Index of the first occurrence of `word` in the token sequence.
///
/// Position is resolved by surface form, so a word that appears twice always
/// resolves to its first occurrence — even when the caller meant a later
/// tagged occurrence. That lookup quirk is part of the contract.
pub fn token_index(tokens: &[String], word: &str) -> Option<usize> {
    tokens.iter().position(|t| t == word)
}

/// Recombine a token slice into readable text.
///
/// Rules, applied left to right with one piece of pending-separator state
/// (initially a single space):
/// - `.` `!` `?` `,` `;` each append a bare `.` with no separator and leave
///   the pending separator untouched;
/// - `@` emits nothing and sets the pending separator to `" @"` so the next
///   token reattaches as an `@mention`;
/// - any other non-empty token is appended behind the pending separator,
///   which then resets to a single space;
/// - empty tokens are skipped entirely.
///
/// The output therefore always starts with a separator when the first token
/// is a word — "One does not simply {verb}{remainder}" relies on that.
pub fn combine_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    let mut prev = " ";
    for token in tokens {
        let token = token.as_ref();
        match token {
            "." | "!" | "?" | "," | ";" => out.push('.'),
            "@" => prev = " @",
            "" => {}
            _ => {
                out.push_str(prev);
                out.push_str(token);
                prev = " ";
            }
        }
    }
    out
}
