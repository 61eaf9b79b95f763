pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Like [`strip_prefix_ci`] but only matches whole words: the prefix must be
/// followed by whitespace or the end of the string. The remainder is trimmed.
pub fn strip_word_ci<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let rest = strip_prefix_ci(s, word)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Split `"<first> <rest>"` at the first run of whitespace.
pub fn split_first_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_prefix_requires_boundary() {
        assert_eq!(strip_word_ci("SW list", "sw"), Some("list"));
        assert_eq!(strip_word_ci("sw", "sw"), Some(""));
        assert_eq!(strip_word_ci("swim", "sw"), None);
    }

    #[test]
    fn splits_first_word() {
        assert_eq!(split_first_word(" 12  Tea time "), ("12", "Tea time"));
        assert_eq!(split_first_word("12"), ("12", ""));
    }
}
