use gadget_utils::str::substr_from;

use super::{
    UserAgent,
    browser::classify_browser,
    os::classify_os,
    tokenize::Tokens,
    version::max_version,
};

/// Classify a `User-Agent` header into a [`UserAgent`].
///
/// This never fails: headers that can't be classified (or only in part)
/// result in empty fields.
///
/// # Remarks
///
/// This does not aim to be:
///
/// - complete: only popular browsers and systems are recognized,
///   anything else gets a best effort "first product" guess;
/// - strict: the header is treated as noisy text, not as a grammar.
///
/// ```
/// use gadget_ua::parse_user_agent;
///
/// let ua = parse_user_agent(
///     "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:73.0) Gecko/20100101 Firefox/73.0",
/// );
/// assert_eq!(ua.to_string(), "Firefox 73 on Windows 10");
/// assert_eq!(ua.browser_name, "Firefox");
/// assert_eq!(ua.os_version, "10");
/// ```
#[must_use]
pub fn parse_user_agent(header: &str) -> UserAgent {
    let tokens = Tokens::new(header);
    let os = classify_os(&tokens);

    let mut ua = UserAgent {
        os_name: os.name.to_owned(),
        os_version: os.version.into_owned(),
        ..Default::default()
    };

    if os.is_ie {
        ua.browser_name = "Internet Explorer".to_owned();
        ua.browser_version = ie_version(header).to_owned();
        tracing::trace!(
            user_agent.header = %header,
            "user agent: Internet Explorer {}",
            ua.browser_version,
        );
        return ua;
    }

    // KaiOS puts its system in the products
    if let Some(kaios) = tokens.products().iter().find(|p| p.starts_with("KAIOS/")) {
        ua.os_name = "KaiOS".to_owned();
        ua.os_version = max_version(substr_from(kaios, 6), 2, false).to_owned();
        tracing::trace!(user_agent.header = %header, "user agent: KaiOS from product token");
    }

    match classify_browser(&tokens, &ua.os_name) {
        Some((browser, source)) => {
            ua.browser_name = browser.name.to_owned();
            ua.browser_version = browser.version.to_owned();
            tracing::trace!(
                user_agent.header = %header,
                user_agent.source = source.as_str(),
                "user agent: browser {} classified",
                ua.browser_name,
            );
        }
        None => tracing::trace!(
            user_agent.header = %header,
            "user agent: no browser found, giving up",
        ),
    }

    ua
}

/// The `MSIE 9.0` token is the only reliable source of the version; IE 11
/// dropped it and only sends `Trident/7.0`.
fn ie_version(header: &str) -> &str {
    let Some(i) = header.find("MSIE ") else {
        return "11";
    };

    let start = i + 5;
    if header.len() < start + 2 {
        return "";
    }
    // two bytes, or less when that would split a character
    let version = header
        .get(start..start + 2)
        .or_else(|| header.get(start..start + 1))
        .unwrap_or_default();
    version.trim_end_matches('.').trim()
}
