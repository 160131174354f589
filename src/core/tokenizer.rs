//! Token estimation for the completion summary
//!
//! The generated document is destined for an LLM context window, so the
//! summary reports roughly how much of one it will occupy. Counting uses
//! tiktoken's cl100k_base (a good approximation for GPT-4 and Claude), with
//! a chars-per-token heuristic when the encoding cannot be loaded.

use once_cell::sync::Lazy;
use tiktoken_rs::{cl100k_base, CoreBPE};

// Loaded once on first use
static CL100K_BPE: Lazy<Option<CoreBPE>> = Lazy::new(|| cl100k_base().ok());

/// Estimate the number of tokens in `text`
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    match &*CL100K_BPE {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => estimate_tokens_heuristic(text),
    }
}

/// Fast fallback estimate: ~4 ASCII chars per token, ~2 for everything else
pub fn estimate_tokens_heuristic(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let mut ascii_chars = 0usize;
    let mut other_chars = 0usize;

    for c in text.chars() {
        if c.is_ascii() {
            ascii_chars += 1;
        } else {
            other_chars += 1;
        }
    }

    ascii_chars.div_ceil(4) + other_chars.div_ceil(2)
}
