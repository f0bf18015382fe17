//! Split a `User-Agent` header into system and product tokens.
//!
//! ```text
//! Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:73.0) Gecko/20100101 Firefox/73.0
//! ^^^^^^^^^^^  ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^  ^^^^^^^^^^^^^^ ^^^^^^^^^^^^
//!  product              system (split on ';')           product       product
//! ```
//!
//! Only the first parenthesized group is treated as system information.
//! Any later group (e.g. `(KHTML, like Gecko)`) simply ends up as
//! (noisy) product tokens.

use smallvec::SmallVec;

/// The tokens of a single `User-Agent` header.
///
/// Tokens borrow from the header and are trimmed. Empty tokens,
/// produced by adjacent delimiters, are kept as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens<'a> {
    system: SmallVec<[&'a str; 8]>,
    products: SmallVec<[&'a str; 12]>,
}

impl<'a> Tokens<'a> {
    /// Tokenize a `User-Agent` header.
    #[must_use]
    pub fn new(header: &'a str) -> Self {
        let ua = trim_quote(header);

        match (ua.find('('), ua.find(')')) {
            (Some(open), Some(close)) if open < close => Self {
                system: ua[open + 1..close].split(';').map(str::trim).collect(),
                products: ua[..open]
                    .trim()
                    .split(' ')
                    .chain(ua[close + 1..].trim().split(' '))
                    .map(str::trim)
                    .collect(),
            },
            _ => Self {
                system: SmallVec::new(),
                products: ua.split(' ').map(str::trim).collect(),
            },
        }
    }

    /// System information, found between the first `(` and `)`.
    #[must_use]
    pub fn system(&self) -> &[&'a str] {
        &self.system
    }

    /// All (`Name/Version`-like) tokens outside of the system information.
    ///
    /// Never empty: a header without any token yields a single `""`.
    #[must_use]
    pub fn products(&self) -> &[&'a str] {
        &self.products
    }
}

/// Some clients wrap their UA in quotes.
fn trim_quote(s: &str) -> &str {
    let s = s.strip_prefix(['\'', '"']).unwrap_or(s);
    s.strip_suffix(['\'', '"']).unwrap_or(s)
}
