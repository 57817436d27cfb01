/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
///
/// Valid UTF-8 comes back unchanged. Never fails.
pub fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        assert_eq!(decode_utf8("héllo wörld".as_bytes()), "héllo wörld");
    }

    #[test]
    fn test_invalid_sequences_replaced() {
        assert_eq!(decode_utf8(b"ab\xffcd"), "ab\u{FFFD}cd");
        // Truncated multi-byte sequence at the end.
        assert_eq!(decode_utf8(b"ok\xe2\x82"), "ok\u{FFFD}");
    }

    #[test]
    fn test_nul_kept() {
        assert_eq!(decode_utf8(b"a\0b\0"), "a\0b\0");
    }
}
