//! Reversible shortening of `User-Agent` headers.
//!
//! Common phrases are replaced by a two character token starting with `~`,
//! a literal `~` is escaped as `~~`. The output remains (mostly) readable:
//!
//! ```text
//! Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.132 Safari/537.36
//! ~Z (~W NT 10.0; Win64; x64) ~a537.36 ~G ~c80.0.3987.132 ~s537.36
//! ```

use std::borrow::Cow;

use gadget_utils::str::Replacer;

const PAIRS: [(&str, &str); 18] = [
    ("~", "~~"),
    ("Android", "~A"),
    ("Chrome/", "~c"),
    ("compatible", "~C"),
    ("Edge/", "~e"),
    ("Firefox/", "~f"),
    ("Gecko/", "~g"),
    ("(KHTML, like Gecko)", "~G"),
    ("iPhone", "~i"),
    ("Macintosh", "~I"),
    ("AppleWebKit/", "~a"),
    ("Linux", "~L"),
    ("Mobile/", "~m"),
    ("Mobile", "~M"),
    ("Safari/", "~s"),
    ("Version/", "~v"),
    ("Windows", "~W"),
    ("Mozilla/5.0 ", "~Z "),
];

/// The `(phrase, token)` substitutions applied by [`shorten`], in priority order.
///
/// The first pair escapes the `~` token marker itself.
pub const SHORTEN_PAIRS: &[(&str, &str)] = &PAIRS;

const UNSHORTEN_PAIRS: [(&str, &str); PAIRS.len()] = invert(PAIRS);

static SHORTENER: Replacer<'static> = Replacer::new(&PAIRS);
static UNSHORTENER: Replacer<'static> = Replacer::new(&UNSHORTEN_PAIRS);

const fn invert<const N: usize>(
    pairs: [(&'static str, &'static str); N],
) -> [(&'static str, &'static str); N] {
    let mut inverted = [("", ""); N];
    let mut i = 0;
    while i < N {
        inverted[i] = (pairs[i].1, pairs[i].0);
        i += 1;
    }
    inverted
}

/// Shorten a `User-Agent` header by replacing common phrases with small tokens.
///
/// Use [`unshorten`] to reverse it; `unshorten(&shorten(s)) == s` for any `s`.
///
/// ```
/// use gadget_ua::{shorten, unshorten};
///
/// let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:73.0) Gecko/20100101 Firefox/73.0";
/// let short = shorten(ua);
/// assert_eq!(short, "~Z (~W NT 10.0; Win64; x64; rv:73.0) ~g20100101 ~f73.0");
/// assert_eq!(unshorten(&short), ua);
/// ```
#[must_use]
pub fn shorten(ua: &str) -> Cow<'_, str> {
    SHORTENER.replace(ua)
}

/// Reverse [`shorten`].
///
/// Input that was not produced by [`shorten`] is decoded on a best effort basis.
#[must_use]
pub fn unshorten(short: &str) -> Cow<'_, str> {
    UNSHORTENER.replace(short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten() {
        for (ua, short) in [
            ("", ""),
            ("~m~~~A~", "~~m~~~~~~A~~"),
            (
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:73.0) Gecko/20100101 Firefox/73.0",
                "~Z (~W NT 10.0; Win64; x64; rv:73.0) ~g20100101 ~f73.0",
            ),
            (
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.132 Safari/537.36",
                "~Z (~W NT 10.0; Win64; x64) ~a537.36 ~G ~c80.0.3987.132 ~s537.36",
            ),
            (
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_3) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.0.5 Safari/605.1.15",
                "~Z (~I; Intel Mac OS X 10_15_3) ~a605.1.15 ~G ~v13.0.5 ~s605.1.15",
            ),
            (
                "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:73.0) Gecko/20100101 Firefox/73.0",
                "~Z (X11; Ubuntu; ~L x86_64; rv:73.0) ~g20100101 ~f73.0",
            ),
            (
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/70.0.3538.102 Safari/537.36 Edge/18.18362",
                "~Z (~W NT 10.0; Win64; x64) ~a537.36 ~G ~c70.0.3538.102 ~s537.36 ~e18.18362",
            ),
            (
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/79.0.3945.130 Safari/537.36 OPR/66.0.3515.72",
                "~Z (~W NT 10.0; Win64; x64) ~a537.36 ~G ~c79.0.3945.130 ~s537.36 OPR/66.0.3515.72",
            ),
            (
                "Mozilla/5.0 (iPhone; CPU iPhone OS 12_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.0 Mobile/15E148 Safari/604.1",
                "~Z (~i; CPU ~i OS 12_0 like Mac OS X) ~a605.1.15 ~G ~v12.0 ~m15E148 ~s604.1",
            ),
            (
                "Mozilla/5.0 (Linux; Android 8.0.0; SM-G960F Build/R16NW) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/62.0.3202.84 Mobile Safari/537.36",
                "~Z (~L; ~A 8.0.0; SM-G960F Build/R16NW) ~a537.36 ~G ~c62.0.3202.84 ~M ~s537.36",
            ),
            (
                "Mozilla/5.0 (Linux; Android 6.0.1; Nexus 5X Build/MMB29P) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.92 Mobile Safari/537.36 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
                "~Z (~L; ~A 6.0.1; Nexus 5X Build/MMB29P) ~a537.36 ~G ~c80.0.3987.92 ~M ~s537.36 (~C; Googlebot/2.1; +http://www.google.com/bot.html)",
            ),
            (
                "Mozilla/5.0 (compatible; AhrefsBot/6.1; +http://ahrefs.com/robot/)",
                "~Z (~C; AhrefsBot/6.1; +http://ahrefs.com/robot/)",
            ),
            (
                "Mozilla/5.0 (Linux; Android 5.0) AppleWebKit/537.36 (KHTML, like Gecko) Mobile Safari/537.36 (compatible; Bytespider; https://zhanzhang.toutiao.com/)",
                "~Z (~L; ~A 5.0) ~a537.36 ~G ~M ~s537.36 (~C; Bytespider; https://zhanzhang.toutiao.com/)",
            ),
            (
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/600.2.5 (KHTML, like Gecko) Version/8.0.2 Safari/600.2.5 (Applebot/0.1; +http://www.apple.com/go/applebot)",
                "~Z (~I; Intel Mac OS X 10_10_1) ~a600.2.5 ~G ~v8.0.2 ~s600.2.5 (Applebot/0.1; +http://www.apple.com/go/applebot)",
            ),
        ] {
            let got = shorten(ua);
            assert_eq!(got, short, "shorten: {ua:?}");
            assert_eq!(unshorten(&got), ua, "unshorten: {short:?}");
        }
    }

    #[test]
    fn test_shorten_borrows_when_unchanged() {
        assert!(matches!(shorten("curl/7.68.0"), Cow::Borrowed(_)));
        assert!(matches!(unshorten("curl/7.68.0"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unshorten_tokens_lookalike() {
        // literal tokens in the input are escaped, not decoded
        for ua in ["~Z Mozilla/5.0 ", "~~Z ", "~W~", "~", "Mobile~/", "~Z"] {
            assert_eq!(unshorten(&shorten(ua)), ua, "ua: {ua:?}");
        }
    }

    #[test]
    fn test_unshorten_pairs_are_inverse() {
        for ((phrase, token), (from, to)) in SHORTEN_PAIRS.iter().zip(UNSHORTEN_PAIRS) {
            assert_eq!((*phrase, *token), (to, from));
            assert!(token.starts_with('~'));
        }
    }

    #[test]
    fn test_shorten_round_trip() {
        fn prop(s: String) -> bool {
            unshorten(&shorten(&s)) == s
        }
        quickcheck::quickcheck(prop as fn(String) -> bool);
    }

    #[test]
    fn test_shorten_round_trip_phrases() {
        // random strings rarely contain the phrases, so build them from the vocabulary
        fn prop(picks: Vec<(u8, bool)>) -> bool {
            let s: String = picks
                .iter()
                .map(|&(i, token)| {
                    let (phrase, short) = PAIRS[usize::from(i) % PAIRS.len()];
                    if token { short } else { phrase }
                })
                .collect();
            unshorten(&shorten(&s)) == s
        }
        quickcheck::quickcheck(prop as fn(Vec<(u8, bool)>) -> bool);
    }
}
