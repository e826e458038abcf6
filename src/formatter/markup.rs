//! Byte-level markup stripping.

/// Remove HTML-tag-like sequences from the input.
///
/// This is a scanner, not an HTML parser: a `<` followed by a letter, `/`,
/// `!` or `?` opens a tag that runs through the next `>`; an unterminated
/// tag swallows the rest of the input. Any other `<` is kept as text.
pub(crate) fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '<' {
            match chars.peek() {
                Some(&next) if next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?') => {
                    for tag_ch in chars.by_ref() {
                        if tag_ch == '>' {
                            break;
                        }
                    }
                }
                _ => out.push('<'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
