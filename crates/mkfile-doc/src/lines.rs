//! Physical line splitting.
//!
//! `\n`, `\r\n` and a lone `\r` all end a line, as do the other Unicode
//! line boundaries (`\x0b`, `\x0c`, `\x1c`-`\x1e`, `\u{85}`, `\u{2028}`,
//! `\u{2029}`). Parsed paragraphs always rejoin their lines with `\n`.

/// True for every character that ends a physical line.
pub(crate) fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split `text` into physical lines without their terminators.
///
/// A trailing terminator does not produce a final empty line, and `\r\n`
/// counts as a single break.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..index]);
        start = index + ch.len_utf8();
        if ch == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Rewrite every line break in `text` as `\n`, keeping a trailing one.
pub(crate) fn normalize_line_breaks(text: &str) -> String {
    let mut normalized = split_lines(text).join("\n");
    if text.ends_with(is_line_break) {
        normalized.push('\n');
    }
    normalized
}
