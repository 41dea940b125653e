// Text analysis — tokenization, POS tagging, and the shared helpers the
// meme strategies are built on.

pub mod traits;
pub mod helpers;
pub mod rules;
pub mod remote;
