// Built-in rule tagger — the default linguistic backend.
//
// A lexicon + suffix heuristic tagger over a Penn-Treebank-like tagset.
// It is deliberately small: the engine only ever asks two questions of a
// tag (is it in the VB family, is it exactly NNS), so the tagger's job is
// to get verbs and plural nouns right on short informal posts, not to be
// a full POS model. Accuracy on long-form prose is out of scope; swap in
// the remote backend for that.

use regex_lite::Regex;
use std::sync::OnceLock;

use crate::error::AnalysisError;

use super::traits::{PosClass, PosTagger, TaggedToken};

/// Closed-class lexicon: (lowercased word, tag).
const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("all", "DT"),
    ("some", "DT"),
    ("no", "DT"),
    ("every", "DT"),
    // pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("her", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("who", "WP"),
    ("what", "WP"),
    // possessives
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    // prepositions
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("of", "IN"),
    ("about", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("into", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("to", "TO"),
    // conjunctions
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("so", "CC"),
    ("yet", "CC"),
    ("if", "IN"),
    ("because", "IN"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    // modals
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    // be / do / have
    ("am", "VBP"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    ("done", "VBN"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    // adverbs common in posts
    ("not", "RB"),
    ("now", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("just", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("here", "RB"),
    ("there", "RB"),
    ("again", "RB"),
    ("still", "RB"),
    ("simply", "RB"),
    // contraction fragments (the tokenizer splits these off)
    ("'s", "POS"),
    ("'m", "VBP"),
    ("'re", "VBP"),
    ("'ve", "VBP"),
    ("'ll", "MD"),
    ("'d", "MD"),
    ("n't", "RB"),
];

/// Open-class verbs common in short posts. Lexicon entries for the base
/// form; inflected forms are caught by the suffix rules instead.
const VERB_LEXICON: &[&str] = &[
    "love", "like", "hate", "want", "need", "know", "think", "see", "make", "get", "go", "run",
    "jump", "eat", "play", "watch", "post", "tweet", "share", "win", "lose", "feel", "say", "tell",
    "ask", "help", "keep", "let", "find", "give", "take", "come", "put", "mean", "work", "call",
    "try", "use", "buy", "sell", "read", "write", "build", "break", "start", "stop", "throw",
    "catch", "hold", "move", "turn", "leave", "stay", "live", "die", "grab", "steal", "burn",
    "drink", "drive", "fly", "sing", "dance", "fight", "vote", "pet", "hug",
];

/// Irregular verb forms mapped to their base form.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("did", "do"),
    ("does", "do"),
    ("done", "do"),
    ("has", "have"),
    ("had", "have"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("got", "get"),
    ("gotten", "get"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("felt", "feel"),
    ("found", "find"),
    ("gave", "give"),
    ("given", "give"),
    ("told", "tell"),
    ("left", "leave"),
    ("kept", "keep"),
    ("meant", "mean"),
    ("won", "win"),
    ("lost", "lose"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("drove", "drive"),
    ("flew", "fly"),
    ("sang", "sing"),
    ("fought", "fight"),
    ("broke", "break"),
    ("broken", "break"),
    ("threw", "throw"),
    ("caught", "catch"),
    ("held", "hold"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("bought", "buy"),
    ("sold", "sell"),
    ("wrote", "write"),
    ("written", "write"),
    ("built", "build"),
    ("drank", "drink"),
    ("drunk", "drink"),
];

fn token_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // words (with embedded apostrophes and Latin-1/Latin-A accents),
    // numbers, then any single non-space symbol so @ and # become their
    // own tokens
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-zÀ-ÖØ-öø-ÿĀ-ſ']+|[0-9]+(?:[.,][0-9]+)*|[^\sA-Za-z0-9]")
            .expect("valid token pattern")
    })
}

/// The default tagging backend. Stateless and cheap to share.
#[derive(Debug, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    /// Split text into tokens. Punctuation and symbols become single-char
    /// tokens (`@bob` splits to `@` + `bob`), and contractions split at the
    /// apostrophe (`don't` -> `do` + `n't`, `I'm` -> `I` + `'m`).
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for m in token_pattern().find_iter(text) {
            let piece = m.as_str();
            if piece.contains('\'') && piece.len() > 1 {
                split_contraction(piece, &mut tokens);
            } else {
                tokens.push(piece.to_string());
            }
        }
        tokens
    }
}

/// Split a word containing an apostrophe into NLTK-style fragments.
///
/// Boundaries are found on the word itself — lowercasing can change byte
/// lengths (İ becomes a two-char sequence), so offsets from a lowercased
/// copy must never be used to slice the original.
fn split_contraction(word: &str, out: &mut Vec<String>) {
    if let Some(start) = nt_suffix_start(word) {
        if start > 0 {
            out.push(word[..start].to_string());
        }
        out.push(word[start..].to_string());
        return;
    }
    if let Some(apos) = word.rfind('\'') {
        // "'twas"-style leading apostrophes stay attached
        if apos > 0 && apos < word.len() - 1 {
            out.push(word[..apos].to_string());
            out.push(word[apos..].to_string());
            return;
        }
    }
    out.push(word.to_string());
}

/// Byte index where a trailing "n't" (any letter case) begins, if present.
fn nt_suffix_start(word: &str) -> Option<usize> {
    let mut rev = word.char_indices().rev();
    let (_, t) = rev.next()?;
    let (_, apos) = rev.next()?;
    let (n_idx, n) = rev.next()?;
    if t.eq_ignore_ascii_case(&'t') && apos == '\'' && n.eq_ignore_ascii_case(&'n') {
        Some(n_idx)
    } else {
        None
    }
}

fn lexicon_tag(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    LEXICON
        .iter()
        .find(|(w, _)| *w == lower)
        .map(|(_, tag)| *tag)
}

fn is_known_verb(word: &str) -> bool {
    let lower = word.to_lowercase();
    VERB_LEXICON.contains(&lower.as_str())
}

/// Tag a single word given the tag of the previous token (empty for the
/// sentence-initial position).
fn tag_word(word: &str, prev_tag: &str, first: bool) -> String {
    let mut chars = word.chars();
    let head = match chars.next() {
        Some(c) => c,
        None => return "NN".to_string(),
    };

    // numbers
    if head.is_ascii_digit() {
        return "CD".to_string();
    }

    // single symbols tag as themselves, Penn-style
    if !head.is_alphanumeric() && head != '\'' && chars.next().is_none() {
        return word.to_string();
    }

    if let Some(tag) = lexicon_tag(word) {
        return tag.to_string();
    }

    if is_known_verb(word) {
        // infinitives after "to" or a modal, present tense otherwise
        return if prev_tag == "TO" || prev_tag == "MD" {
            "VB".to_string()
        } else {
            "VBP".to_string()
        };
    }

    // mid-sentence capitalization reads as a proper noun
    if head.is_uppercase() && !first {
        return if word.ends_with('s') {
            "NNPS".to_string()
        } else {
            "NNP".to_string()
        };
    }

    let lower = word.to_lowercase();
    suffix_tag(&lower, prev_tag)
}

fn suffix_tag(lower: &str, prev_tag: &str) -> String {
    let n = lower.chars().count();
    if n > 4 && lower.ends_with("ing") {
        return "VBG".to_string();
    }
    if n > 3 && lower.ends_with("ed") {
        return "VBD".to_string();
    }
    if n > 3 && lower.ends_with("ly") {
        return "RB".to_string();
    }
    if ["ous", "ful", "ive", "able", "ible", "ish"]
        .iter()
        .any(|s| lower.ends_with(s))
    {
        return "JJ".to_string();
    }
    if n > 2
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return "NNS".to_string();
    }
    // an unknown word straight after a pronoun is most likely its verb
    if prev_tag == "PRP" {
        return "VBP".to_string();
    }
    "NN".to_string()
}

impl PosTagger for RuleTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::UnprocessableInput(
                "text contains no tokens".to_string(),
            ));
        }
        let tokens = self.tokenize(text);
        let mut tagged = Vec::with_capacity(tokens.len());
        let mut prev_tag = String::new();
        for (i, token) in tokens.iter().enumerate() {
            let tag = tag_word(token, &prev_tag, i == 0);
            prev_tag = tag.clone();
            tagged.push(TaggedToken::new(token.clone(), tag));
        }
        Ok(tagged)
    }

    fn lemmatize(&self, word: &str, pos: PosClass) -> Result<String, AnalysisError> {
        match pos {
            PosClass::Verb => Ok(lemmatize_verb(word)),
        }
    }
}

/// Normalize a verb to its base form: irregular table first, then suffix
/// stripping with doubled-consonant and e-restoration heuristics.
/// Lemmas come back lowercase.
pub fn lemmatize_verb(word: &str) -> String {
    let lower = word.to_lowercase();

    if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == lower) {
        return base.to_string();
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        if stem.chars().count() >= 2 {
            return restore_stem(stem);
        }
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        if stem.chars().count() >= 2 {
            return restore_stem(stem);
        }
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if ["s", "x", "z", "ch", "sh"].iter().any(|s| stem.ends_with(s)) {
            return stem.to_string();
        }
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && lower.chars().count() > 2 {
        return lower[..lower.len() - 1].to_string();
    }

    lower
}

/// Fix up a stem after stripping "ing"/"ed": undo consonant doubling
/// (runn -> run) and restore a dropped final e (lov -> love).
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();

    if n >= 2 && chars[n - 1] == chars[n - 2] && is_consonant(chars[n - 1]) {
        return chars[..n - 1].iter().collect();
    }

    // consonant-vowel-consonant endings usually dropped an e (mak -> make),
    // except after w/x/y which never double or take one
    if n >= 3
        && is_consonant(chars[n - 1])
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
        && !is_consonant(chars[n - 2])
        && is_consonant(chars[n - 3])
    {
        return format!("{stem}e");
    }

    stem.to_string()
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_mention_splits() {
        let tagger = RuleTagger::new();
        assert_eq!(
            tagger.tokenize("hey @bob !"),
            vec!["hey", "@", "bob", "!"]
        );
    }

    #[test]
    fn test_tokenize_contractions() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tokenize("don't stop"), vec!["do", "n't", "stop"]);
        assert_eq!(tagger.tokenize("I'm here"), vec!["I", "'m", "here"]);
    }

    #[test]
    fn test_tokenize_contraction_with_multibyte_uppercase() {
        // İ lowercases to a two-char sequence, so the n't boundary must be
        // located on the original word, not a lowercased copy
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tokenize("İİİİN'T"), vec!["İİİİ", "N'T"]);
    }

    #[test]
    fn test_tag_pronoun_verb_noun() {
        let tagger = RuleTagger::new();
        let tagged = tagger.tag("I love cats").unwrap();
        let tags: Vec<&str> = tagged.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["PRP", "VBP", "NNS"]);
    }

    #[test]
    fn test_tag_suffix_heuristics() {
        let tagger = RuleTagger::new();
        let tagged = tagger.tag("the dogs were barking loudly").unwrap();
        let tags: Vec<&str> = tagged.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["DT", "NNS", "VBD", "VBG", "RB"]);
    }

    #[test]
    fn test_tag_infinitive_after_to() {
        let tagger = RuleTagger::new();
        let tagged = tagger.tag("we want to win").unwrap();
        assert_eq!(tagged[3].tag, "VB");
    }

    #[test]
    fn test_tag_empty_input_is_analysis_error() {
        let tagger = RuleTagger::new();
        assert!(tagger.tag("   ").is_err());
    }

    #[test]
    fn test_tag_preserves_token_order() {
        let tagger = RuleTagger::new();
        let tagged = tagger.tag("grab all the snacks now").unwrap();
        let words: Vec<&str> = tagged.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["grab", "all", "the", "snacks", "now"]);
    }

    #[test]
    fn test_lemmatize_irregulars() {
        assert_eq!(lemmatize_verb("was"), "be");
        assert_eq!(lemmatize_verb("went"), "go");
        assert_eq!(lemmatize_verb("thought"), "think");
    }

    #[test]
    fn test_lemmatize_suffix_rules() {
        assert_eq!(lemmatize_verb("running"), "run");
        assert_eq!(lemmatize_verb("loved"), "love");
        assert_eq!(lemmatize_verb("jumped"), "jump");
        assert_eq!(lemmatize_verb("carries"), "carry");
        assert_eq!(lemmatize_verb("watches"), "watch");
        assert_eq!(lemmatize_verb("eats"), "eat");
    }

    #[test]
    fn test_lemmatize_base_form_unchanged() {
        assert_eq!(lemmatize_verb("jump"), "jump");
        assert_eq!(lemmatize_verb("love"), "love");
    }

    #[test]
    fn test_lemmatize_lowercases() {
        assert_eq!(lemmatize_verb("Running"), "run");
    }
}
