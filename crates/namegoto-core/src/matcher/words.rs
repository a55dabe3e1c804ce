//! Word-start detection for camel-hump matching

/// Positions in `name` where a hump or word begins.
///
/// A position starts a word when it is:
/// - the first character
/// - any non-alphanumeric character (separators are words of their own)
/// - an alphanumeric character following a non-alphanumeric one
/// - an uppercase letter after a non-uppercase one (`getName` → `N`)
/// - the last capital of an acronym followed by lowercase (`HTMLParser` → `P`)
/// - a digit after a non-digit, or a letter after a digit
pub fn word_starts(name: &[char]) -> Vec<bool> {
    (0..name.len()).map(|i| is_word_start(name, i)).collect()
}

fn is_word_start(name: &[char], i: usize) -> bool {
    let c = name[i];
    if i == 0 || !c.is_alphanumeric() {
        return true;
    }

    let prev = name[i - 1];
    if !prev.is_alphanumeric() {
        return true;
    }
    if c.is_ascii_digit() {
        return !prev.is_ascii_digit();
    }
    if prev.is_ascii_digit() {
        return true;
    }
    if c.is_uppercase() {
        if !prev.is_uppercase() {
            return true;
        }
        return name.get(i + 1).is_some_and(|next| next.is_lowercase());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starts_of(name: &str) -> Vec<usize> {
        let chars: Vec<char> = name.chars().collect();
        word_starts(&chars)
            .into_iter()
            .enumerate()
            .filter_map(|(i, start)| start.then_some(i))
            .collect()
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(starts_of("getNameIdentifier"), vec![0, 3, 7]);
    }

    #[test]
    fn test_acronym() {
        assert_eq!(starts_of("HTMLParser"), vec![0, 4]);
    }

    #[test]
    fn test_separators_and_digits() {
        assert_eq!(starts_of("index.html"), vec![0, 5, 6]);
        assert_eq!(starts_of("md5sum"), vec![0, 2, 3]);
        assert_eq!(starts_of("is_author"), vec![0, 2, 3]);
    }
}
