/// Returns the first prefix from `prefixes` that `s` starts with.
///
/// Iteration order decides which candidate is reported
/// in case multiple prefixes match.
pub fn starts_with_any<'p, I>(s: &str, prefixes: I) -> Option<&'p str>
where
    I: IntoIterator<Item = &'p str>,
{
    prefixes.into_iter().find(|prefix| s.starts_with(prefix))
}

/// Returns the part of `s` starting at byte offset `n`.
///
/// Unlike slicing this never panics: an offset past the end
/// or one that does not fall on a char boundary yields `""`.
#[must_use]
pub fn substr_from(s: &str, n: usize) -> &str {
    s.get(n..).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_any() {
        let prefixes = ["Mozilla/", "Moz", "Gecko/"];
        for (s, expected) in [
            ("Mozilla/5.0", Some("Mozilla/")),
            ("Mozart", Some("Moz")),
            ("Gecko/20100101", Some("Gecko/")),
            ("Gecko", None),
            ("", None),
            ("mozilla/5.0", None),
        ] {
            assert_eq!(starts_with_any(s, prefixes), expected, "s: {s:?}");
        }
    }

    #[test]
    fn test_starts_with_any_empty_prefix() {
        assert_eq!(starts_with_any("abc", [""]), Some(""));
        assert_eq!(starts_with_any("abc", [] as [&str; 0]), None);
    }

    #[test]
    fn test_substr_from() {
        for (s, n, expected) in [
            ("", 1, ""),
            ("Hello", 0, "Hello"),
            ("Hello", 1, "ello"),
            ("Hello", 4, "o"),
            ("Hello", 5, ""),
            ("Hello", 6, ""),
            ("héllo", 2, ""),
            ("héllo", 3, "llo"),
        ] {
            assert_eq!(substr_from(s, n), expected, "s: {s:?}, n: {n}");
        }
    }
}
