//! Detection of text that an upstream channel base64-encoded a second time.
//!
//! The checks are heuristic and tuned for few false positives: ordinary
//! text must never come back as garbage, so anything inconclusive is
//! returned unchanged.

use std::sync::LazyLock;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use regex::Regex;
use tracing::debug;

use crate::utf8::decode_utf8;

/// Shortest candidate worth decoding.
const MIN_ENCODED_LEN: usize = 60;

/// Base64 output always comes in blocks of this many characters.
const BLOCK_LEN: usize = 4;

/// Minimum share of ASCII characters in the decoded text.
const MIN_ASCII_RATIO: f64 = 0.5;

static BASE64_BLOCKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9+/=]{4})+$").unwrap());

/// Decode `original` if it looks like base64-encoded text, otherwise return it unchanged.
///
/// A candidate is `original` without CR/LF and trimmed. It is decoded only
/// when it is at least 60 characters long, a multiple of 4, made of base64
/// blocks, decodes under strict padding rules, and at least half of the
/// decoded characters are ASCII.
pub fn decode_possible_base64(original: &str) -> String {
    let stripped: String = original.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let stripped = stripped.trim();
    let length = stripped.chars().count();

    if length < MIN_ENCODED_LEN || length % BLOCK_LEN != 0 {
        return original.to_string();
    }

    // The final block may carry padding and is left to the decoder.
    let body_end = stripped
        .char_indices()
        .nth(length - BLOCK_LEN)
        .map_or(stripped.len(), |(i, _)| i);
    if !BASE64_BLOCKS.is_match(&stripped[..body_end]) {
        return original.to_string();
    }

    let Ok(bytes) = BASE64.decode(stripped) else {
        return original.to_string();
    };

    let decoded = decode_utf8(&bytes);
    let total = decoded.chars().count();
    let ascii = decoded.chars().filter(char::is_ascii).count();
    if total == 0 || (ascii as f64) / (total as f64) < MIN_ASCII_RATIO {
        return original.to_string();
    }

    debug!(
        encoded_len = length,
        decoded_len = total,
        "decoded base64 payload"
    );
    decoded
}
