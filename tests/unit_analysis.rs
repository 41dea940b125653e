// Unit tests for the text-analysis layer.
//
// Covers the token recombiner's exact output rules, the verb/noun filters,
// the usable-verb scan, and the built-in rule tagger's tokenizer, tagging
// heuristics, and verb lemmatizer.

use memeforge::analysis::helpers::{
    combine_tokens, find_plural_common_nouns, find_verbs, first_usable_verb, tag_sentence,
    token_index,
};
use memeforge::analysis::rules::{lemmatize_verb, RuleTagger};
use memeforge::analysis::traits::{PosTagger, TaggedToken};

fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
    pairs
        .iter()
        .map(|(w, t)| TaggedToken::new(*w, *t))
        .collect()
}

// ============================================================
// combine_tokens — exact recombination rules
// ============================================================

#[test]
fn combine_mention_and_punctuation() {
    // comma and ! both collapse to a period; @ fuses to the next token
    // with only the single leading space. The output starts with the
    // initial pending separator, like every word-initial sequence.
    let out = combine_tokens(&["hello", ",", "world", "@", "bob", "!"]);
    assert_eq!(out, " hello. world @bob.");
}

#[test]
fn combine_every_sentence_punctuation_becomes_period() {
    for p in [".", "!", "?", ",", ";"] {
        assert_eq!(combine_tokens(&["end", p]), " end.");
    }
}

#[test]
fn combine_words_single_spaced() {
    assert_eq!(combine_tokens(&["the", "fence", "now"]), " the fence now");
}

#[test]
fn combine_consecutive_mentions() {
    assert_eq!(combine_tokens(&["@", "alice", "@", "bob"]), " @alice @bob");
}

#[test]
fn combine_empty_tokens_are_invisible() {
    assert_eq!(
        combine_tokens(&["", "a", "", "", "b", ""]),
        combine_tokens(&["a", "b"])
    );
}

#[test]
fn combine_empty_sequence_is_empty_string() {
    let none: [&str; 0] = [];
    assert_eq!(combine_tokens(&none), "");
}

#[test]
fn combine_punctuation_does_not_reset_pending_mention() {
    // @ arms the " @" separator; an intervening comma emits its period
    // without disarming it
    assert_eq!(combine_tokens(&["@", ",", "bob"]), ". @bob");
}

// ============================================================
// verb / noun filters
// ============================================================

#[test]
fn find_verbs_matches_whole_vb_family() {
    let tagged = tagged(&[
        ("jump", "VB"),
        ("jumped", "VBD"),
        ("jumping", "VBG"),
        ("jumped", "VBN"),
        ("jump", "VBP"),
        ("jumps", "VBZ"),
        ("fence", "NN"),
    ]);
    assert_eq!(find_verbs(&tagged).len(), 6);
}

#[test]
fn find_verbs_preserves_order() {
    let tagged = tagged(&[("saw", "VBD"), ("cats", "NNS"), ("running", "VBG")]);
    let words: Vec<&str> = find_verbs(&tagged).iter().map(|t| t.word.as_str()).collect();
    assert_eq!(words, vec!["saw", "running"]);
}

#[test]
fn find_plural_nouns_requires_exact_nns() {
    let tagged = tagged(&[
        ("cats", "NNS"),
        ("cat", "NN"),
        ("Smiths", "NNPS"),
        ("dogs", "NNS"),
    ]);
    let words: Vec<&str> = find_plural_common_nouns(&tagged)
        .iter()
        .map(|t| t.word.as_str())
        .collect();
    assert_eq!(words, vec!["cats", "dogs"]);
}

#[test]
fn filters_tolerate_empty_input() {
    assert!(find_verbs(&[]).is_empty());
    assert!(find_plural_common_nouns(&[]).is_empty());
}

// ============================================================
// first_usable_verb
// ============================================================

#[test]
fn usable_verb_skips_two_char_auxiliaries() {
    let tagged = tagged(&[("is", "VBZ"), ("go", "VB"), ("jump", "VB")]);
    let verbs = find_verbs(&tagged);
    assert_eq!(first_usable_verb(&verbs), Some("jump"));
}

#[test]
fn usable_verb_skips_apostrophe_fragments() {
    let tagged = tagged(&[("'re", "VBP"), ("running", "VBG")]);
    let verbs = find_verbs(&tagged);
    assert_eq!(first_usable_verb(&verbs), Some("running"));
}

#[test]
fn usable_verb_none_when_all_filtered() {
    let tagged = tagged(&[("'s", "VBZ"), ("am", "VBP")]);
    let verbs = find_verbs(&tagged);
    assert_eq!(first_usable_verb(&verbs), None);
}

// ============================================================
// token_index — surface-form position lookup
// ============================================================

#[test]
fn token_index_resolves_to_first_occurrence() {
    let tokens: Vec<String> = ["cats", "chase", "cats"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(token_index(&tokens, "cats"), Some(0));
}

// ============================================================
// RuleTagger — tokenizer
// ============================================================

#[test]
fn tokenizer_splits_mentions_and_punctuation() {
    let tagger = RuleTagger::new();
    assert_eq!(
        tagger.tokenize("hello, world @bob!"),
        vec!["hello", ",", "world", "@", "bob", "!"]
    );
}

#[test]
fn tokenizer_splits_negative_contractions() {
    let tagger = RuleTagger::new();
    assert_eq!(tagger.tokenize("can't won't"), vec!["ca", "n't", "wo", "n't"]);
}

#[test]
fn tokenizer_splits_uppercase_contractions_with_dotted_capital_i() {
    // İ grows from two to three bytes when lowercased; the split must not
    // carry byte offsets from a lowercased copy back onto the original
    let tagger = RuleTagger::new();
    assert_eq!(tagger.tokenize("İİİİN'T"), vec!["İİİİ", "N'T"]);
    assert_eq!(tagger.tokenize("CAN'T"), vec!["CA", "N'T"]);
}

#[test]
fn tokenizer_splits_apostrophe_contractions() {
    let tagger = RuleTagger::new();
    assert_eq!(tagger.tokenize("we're I've"), vec!["we", "'re", "I", "'ve"]);
}

#[test]
fn tokenizer_keeps_hashtag_symbol_separate() {
    let tagger = RuleTagger::new();
    assert_eq!(tagger.tokenize("#cats rule"), vec!["#", "cats", "rule"]);
}

// ============================================================
// RuleTagger — tagging
// ============================================================

#[test]
fn tag_sentence_returns_parallel_sequences() {
    let tagger = RuleTagger::new();
    let (tokens, tagged) = tag_sentence(&tagger, "I love cats").unwrap();
    assert_eq!(tokens.len(), tagged.len());
    for (token, t) in tokens.iter().zip(&tagged) {
        assert_eq!(token, &t.word);
    }
}

#[test]
fn tags_verb_after_pronoun() {
    let tagger = RuleTagger::new();
    let tagged = tagger.tag("I love cats").unwrap();
    assert_eq!(tagged[1].tag, "VBP");
    assert_eq!(tagged[2].tag, "NNS");
}

#[test]
fn tags_gerund_and_past_by_suffix() {
    let tagger = RuleTagger::new();
    let tagged = tagger.tag("they jumped while laughing").unwrap();
    assert_eq!(tagged[1].tag, "VBD");
    assert_eq!(tagged[3].tag, "VBG");
}

#[test]
fn whitespace_only_input_is_an_error() {
    let tagger = RuleTagger::new();
    assert!(tagger.tag("  \t ").is_err());
}

// ============================================================
// lemmatize_verb
// ============================================================

#[test]
fn lemmatizes_irregular_forms() {
    assert_eq!(lemmatize_verb("were"), "be");
    assert_eq!(lemmatize_verb("ate"), "eat");
    assert_eq!(lemmatize_verb("caught"), "catch");
    assert_eq!(lemmatize_verb("won"), "win");
}

#[test]
fn lemmatizes_regular_inflections() {
    assert_eq!(lemmatize_verb("jumps"), "jump");
    assert_eq!(lemmatize_verb("jumped"), "jump");
    assert_eq!(lemmatize_verb("jumping"), "jump");
}

#[test]
fn lemmatizer_undoes_consonant_doubling() {
    assert_eq!(lemmatize_verb("running"), "run");
    assert_eq!(lemmatize_verb("grabbed"), "grab");
}

#[test]
fn lemmatizer_restores_dropped_e() {
    assert_eq!(lemmatize_verb("making"), "make");
    assert_eq!(lemmatize_verb("loved"), "love");
}

#[test]
fn lemmatizer_is_identity_on_base_forms() {
    for verb in ["jump", "love", "go", "be"] {
        assert_eq!(lemmatize_verb(verb), verb);
    }
}
