//! Separator-based tokenizer for qualified names and qualifier patterns

/// Split `text` on every occurrence of any separator.
///
/// Empty tokens are dropped. When nothing survives, the original text is returned as
/// the only token so degenerate input never vanishes. At a position where several
/// separators match, the longest one is consumed.
pub fn split<'a, S: AsRef<str>>(text: &'a str, separators: &[S]) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let separator = separators
            .iter()
            .map(AsRef::as_ref)
            .filter(|sep| !sep.is_empty() && rest.starts_with(*sep))
            .max_by_key(|sep| sep.len());

        match separator {
            Some(sep) => {
                if pos > start {
                    tokens.push(&text[start..pos]);
                }
                pos += sep.len();
                start = pos;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }

    if tokens.is_empty() {
        vec![text]
    } else {
        tokens
    }
}
