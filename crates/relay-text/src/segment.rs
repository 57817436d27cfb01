/// A space within this many characters of the limit ends the segment early.
const WORD_BOUNDARY_WINDOW: usize = 6;

/// Split `text` into segments of at most `max` characters.
///
/// Characters are counted by code point. A segment ends when it reaches
/// `max`, or earlier on a space that falls within the last
/// [`WORD_BOUNDARY_WINDOW`] characters of the limit. Segments are trimmed at
/// the cut points; text that already fits is returned as is. A `max` of 0 is
/// treated as 1.
pub fn split_msg(text: &str, max: usize) -> Vec<String> {
    let max = max.max(1);
    if text.chars().count() <= max {
        return vec![text.to_string()];
    }

    let mut parts = Vec::with_capacity(2);
    let mut part = String::new();
    let mut part_len = 0;
    for c in text.chars() {
        part.push(c);
        part_len += 1;
        if part_len == max || (part_len + WORD_BOUNDARY_WINDOW > max && c == ' ') {
            parts.push(part.trim().to_string());
            part.clear();
            part_len = 0;
        }
    }
    if part_len > 0 {
        parts.push(part.trim().to_string());
    }

    parts
}
