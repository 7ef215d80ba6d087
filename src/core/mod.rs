//! Generic utilities with no knowledge of the Tonto grammar.

pub mod text_utils;

pub use text_utils::{closest_match, is_similar, levenshtein};
