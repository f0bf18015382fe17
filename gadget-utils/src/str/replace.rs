use std::borrow::Cow;

/// Replaces an ordered list of literal patterns in a single left to right pass.
///
/// At every position of the input the pairs are tried in the order they were given,
/// the first pattern that matches is substituted and scanning resumes right after it.
/// Replaced output is never rescanned, so replacements cannot cascade.
///
/// Empty patterns never match.
///
/// # Example
///
/// ```
/// use gadget_utils::str::Replacer;
///
/// const R: Replacer<'static> = Replacer::new(&[("ab", "1"), ("a", "2"), ("b", "3")]);
///
/// assert_eq!(R.replace("aab-b"), "21-3");
/// assert_eq!(R.replace("xyz"), "xyz");
/// ```
#[derive(Debug, Clone)]
pub struct Replacer<'a> {
    pairs: &'a [(&'a str, &'a str)],
    first_bytes: [bool; 256],
}

impl<'a> Replacer<'a> {
    /// Create a new [`Replacer`] from `(pattern, replacement)` pairs.
    ///
    /// Pair order is significant: earlier pairs win when multiple
    /// patterns match at the same position.
    #[must_use]
    pub const fn new(pairs: &'a [(&'a str, &'a str)]) -> Self {
        let mut first_bytes = [false; 256];
        let mut i = 0;
        while i < pairs.len() {
            let pattern = pairs[i].0.as_bytes();
            if !pattern.is_empty() {
                first_bytes[pattern[0] as usize] = true;
            }
            i += 1;
        }
        Self { pairs, first_bytes }
    }

    /// The `(pattern, replacement)` pairs, in priority order.
    #[must_use]
    pub fn pairs(&self) -> &'a [(&'a str, &'a str)] {
        self.pairs
    }

    /// Apply all replacements to `s`.
    ///
    /// Returns the input unmodified (borrowed) when nothing matched.
    #[must_use]
    pub fn replace<'s>(&self, s: &'s str) -> Cow<'s, str> {
        let bytes = s.as_bytes();
        let mut out: Option<String> = None;
        let mut copied = 0;
        let mut i = 0;

        while i < bytes.len() {
            if !self.first_bytes[bytes[i] as usize] {
                i += 1;
                continue;
            }
            match self.match_at(&bytes[i..]) {
                Some((pattern, replacement)) => {
                    let buf = out.get_or_insert_with(|| String::with_capacity(s.len()));
                    // a match always starts on a char boundary:
                    // the first byte of a str is never a continuation byte
                    buf.push_str(&s[copied..i]);
                    buf.push_str(replacement);
                    i += pattern.len();
                    copied = i;
                }
                None => i += 1,
            }
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&s[copied..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(s),
        }
    }

    fn match_at(&self, haystack: &[u8]) -> Option<(&'a str, &'a str)> {
        self.pairs
            .iter()
            .copied()
            .find(|(pattern, _)| !pattern.is_empty() && haystack.starts_with(pattern.as_bytes()))
    }
}
