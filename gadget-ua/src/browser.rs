use std::cell::OnceCell;

use gadget_utils::str::{starts_with_any, substr_from};

use crate::{
    tables::{IGNORED_PRODUCTS, KNOWN_BROWSERS, safari_version},
    tokenize::Tokens,
    version::max_version,
};

/// Browser name and version, borrowed from the header where possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BrowserMatch<'a> {
    pub(crate) name: &'a str,
    pub(crate) version: &'a str,
}

impl<'a> BrowserMatch<'a> {
    const fn new(name: &'a str, version: &'a str) -> Self {
        Self { name, version }
    }
}

/// How a browser was found, only used for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    KnownBrowser,
    Engine(Engine),
    Fallback,
}

impl Source {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::KnownBrowser => "known browser",
            Self::Engine(engine) => engine.as_str(),
            Self::Fallback => "fallback",
        }
    }
}

/// The generic engine rules, in the order they are checked.
///
/// Every product token is checked against these rules; the first rule
/// that matches a token and resolves to a browser ends the scan.
const ENGINE_RULES: &[Engine] = &[
    Engine::Chrome,
    Engine::Chromium,
    Engine::HeadlessChrome,
    Engine::Firefox,
    Engine::Opera,
    Engine::Safari,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Engine {
    Chrome,
    Chromium,
    HeadlessChrome,
    Firefox,
    Opera,
    Safari,
}

impl Engine {
    fn as_str(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Chromium => "chromium",
            Self::HeadlessChrome => "headless chrome",
            Self::Firefox => "firefox",
            Self::Opera => "opera",
            Self::Safari => "safari",
        }
    }

    fn matches(self, token: &str, ctx: &Context<'_, '_>) -> bool {
        match self {
            Self::Chrome => token.starts_with("Chrome/"),
            Self::Chromium => token.starts_with("Chromium/"),
            Self::HeadlessChrome => token.starts_with("HeadlessChrome/"),
            Self::Firefox => token.starts_with("Firefox/"),
            Self::Opera => token.starts_with("Opera/"),
            Self::Safari => {
                matches!(ctx.os_name, "macOS" | "iOS")
                    && (token.starts_with("Safari/") || token == "Mobile/15E148")
            }
        }
    }

    /// `None` means the token matched, but the rule is not convinced:
    /// the scan continues with the next token.
    fn resolve<'a>(self, token: &'a str, ctx: &Context<'_, 'a>) -> Option<BrowserMatch<'a>> {
        match self {
            // EdgeHTML identifies as Chrome, even though it's not.
            Self::Chrome => Some(
                ctx.edge()
                    .unwrap_or_else(|| BrowserMatch::new("Chrome", version_after(token, 7, 1))),
            ),
            Self::Chromium => Some(BrowserMatch::new("Chrome", version_after(token, 9, 1))),
            Self::HeadlessChrome => Some(BrowserMatch::new("Chrome", version_after(token, 15, 1))),
            Self::Firefox => Some(BrowserMatch::new("Firefox", version_after(token, 8, 1))),
            Self::Opera => Some(ctx.opera_mini().unwrap_or_else(|| {
                let version = ctx
                    .products()
                    .iter()
                    .rev()
                    .copied()
                    .find(|p| p.starts_with("Version/"))
                    .map(|p| version_after(p, 8, 2))
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| version_after(token, 6, 2));
                BrowserMatch::new("Opera", version)
            })),
            Self::Safari => ctx.safari(),
        }
    }
}

/// Hints that a `Safari/` token really is Safari, collected over all products.
#[derive(Debug, Clone, Copy, Default)]
struct SafariEvidence<'a> {
    likely: bool,
    version: &'a str,
    webkit: &'a str,
}

impl<'a> SafariEvidence<'a> {
    fn collect(products: &[&'a str]) -> Self {
        let mut evidence = Self::default();
        for &p in products {
            if p.starts_with("Version/") && !p.contains("15E") {
                evidence.version = substr_from(p, 8);
                evidence.likely = true;
            }
            if p.starts_with("AppleWebKit/") {
                evidence.webkit = p;
            }
            // in-app browsers look like Safari without a Version/
            if starts_with_any(p, ["FxiOS/", "CriOS/", "Mobile/"]).is_some() {
                evidence.likely = true;
            }
        }
        evidence
    }
}

struct Context<'t, 'a> {
    tokens: &'t Tokens<'a>,
    os_name: &'t str,
    safari: OnceCell<SafariEvidence<'a>>,
}

impl<'a> Context<'_, 'a> {
    fn products(&self) -> &[&'a str] {
        self.tokens.products()
    }

    fn edge(&self) -> Option<BrowserMatch<'a>> {
        let edge = self
            .products()
            .iter()
            .copied()
            .find(|p| p.starts_with("Edge/"))?;
        let version = version_after(edge, 5, 1);
        (!version.is_empty()).then_some(BrowserMatch::new("Edge", version))
    }

    fn opera_mini(&self) -> Option<BrowserMatch<'a>> {
        self.tokens
            .system()
            .iter()
            .copied()
            .find(|s| s.starts_with("Opera Mini/"))
            .map(|s| BrowserMatch::new("Opera Mini", version_after(s, 11, 2)))
    }

    fn safari(&self) -> Option<BrowserMatch<'a>> {
        let evidence = self
            .safari
            .get_or_init(|| SafariEvidence::collect(self.products()));
        if !evidence.likely {
            return None;
        }

        let version = if !evidence.version.is_empty() {
            max_version(evidence.version, 2, false)
        } else if !evidence.webkit.is_empty() {
            safari_version(substr_from(evidence.webkit, 12)).unwrap_or_default()
        } else {
            ""
        };
        Some(BrowserMatch::new("Safari", version))
    }
}

/// Classify the browser from the product tokens.
///
/// `os_name` is the (final) operating system name, some rules only apply to specific systems.
pub(crate) fn classify_browser<'a>(
    tokens: &Tokens<'a>,
    os_name: &str,
) -> Option<(BrowserMatch<'a>, Source)> {
    let products = tokens.products();

    // known browsers first, these may look like one of the engines below
    if let Some(token) = products
        .iter()
        .find(|p| starts_with_any(p, KNOWN_BROWSERS.iter().copied()).is_some())
    {
        return token.split_once('/').map(|(name, version)| {
            (
                BrowserMatch::new(name, max_version(version, 2, false)),
                Source::KnownBrowser,
            )
        });
    }

    let ctx = Context {
        tokens,
        os_name,
        safari: OnceCell::new(),
    };
    for &token in products {
        let Some(engine) = ENGINE_RULES.iter().find(|e| e.matches(token, &ctx)) else {
            continue;
        };
        if let Some(browser) = engine.resolve(token, &ctx) {
            return Some((browser, Source::Engine(*engine)));
        }
    }

    fallback(products).map(|browser| (browser, Source::Fallback))
}

/// Look at the first product only; reading over the other ones
/// mostly results in noise, rather than helpful results.
fn fallback<'a>(products: &[&'a str]) -> Option<BrowserMatch<'a>> {
    let first = *products.first()?;
    if starts_with_any(first, IGNORED_PRODUCTS.iter().copied()).is_some() {
        return None;
    }

    // Name/1.0: a letter before the slash and a digit after it
    let slash = first.find('/')?;
    let bytes = first.as_bytes();
    let letter_before = slash
        .checked_sub(1)
        .and_then(|i| bytes.get(i))
        .is_some_and(u8::is_ascii_alphabetic);
    let digit_after = bytes.get(slash + 1).is_some_and(u8::is_ascii_digit);
    if !(letter_before && digit_after) {
        return None;
    }

    Some(BrowserMatch::new(
        &first[..slash],
        max_version(&first[slash + 1..], 2, false),
    ))
}

fn version_after(token: &str, n: usize, segments: usize) -> &str {
    max_version(substr_from(token, n), segments, false)
}
