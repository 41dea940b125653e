// Memeforge: meme caption generation for short social-media posts.
//
// This is the library root. Each module corresponds to a major subsystem
// of the caption generation engine.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod memes;
pub mod output;
pub mod post;
