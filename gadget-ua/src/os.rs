use std::borrow::Cow;

use gadget_utils::str::substr_from;

use crate::{
    tables::{LINUX_DISTRIBUTIONS, windows_version},
    tokenize::Tokens,
    version::{max_version, to_number},
};

/// Operating system information found in the system tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OsMatch<'a> {
    pub(crate) name: &'static str,
    pub(crate) version: Cow<'a, str>,
    /// Set when a `Trident/` or `MSIE ` token was seen.
    pub(crate) is_ie: bool,
}

/// How a rule recognizes a system token.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    Prefix(&'static str),
    AnyPrefix(&'static [&'static str]),
    Exact(&'static str),
    Contains(&'static str),
}

impl Matcher {
    fn matches(self, token: &str) -> bool {
        match self {
            Self::Prefix(prefix) => token.starts_with(prefix),
            Self::AnyPrefix(prefixes) => prefixes.iter().any(|p| token.starts_with(p)),
            Self::Exact(s) => token == s,
            Self::Contains(s) => token.contains(s),
        }
    }
}

/// Extracts a version from the matched token,
/// `None` leaves the current version untouched.
type VersionFn = for<'a> fn(&'a str) -> Option<Cow<'a, str>>;

#[derive(Debug, Clone, Copy)]
enum Effect {
    InternetExplorer,
    Os(&'static str, Option<VersionFn>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Keep looking at the remaining tokens, a later one may be more specific.
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy)]
struct OsRule {
    matcher: Matcher,
    effect: Effect,
    flow: Flow,
}

impl OsRule {
    const fn new(matcher: Matcher, effect: Effect, flow: Flow) -> Self {
        Self {
            matcher,
            effect,
            flow,
        }
    }

    const fn os(matcher: Matcher, name: &'static str) -> Self {
        Self::new(matcher, Effect::Os(name, None), Flow::Stop)
    }

    const fn os_with_version(matcher: Matcher, name: &'static str, version: VersionFn) -> Self {
        Self::new(matcher, Effect::Os(name, Some(version)), Flow::Stop)
    }

    fn apply<'a>(&self, token: &'a str, os: &mut OsMatch<'a>) {
        match self.effect {
            Effect::InternetExplorer => os.is_ie = true,
            Effect::Os(name, version) => {
                os.name = name;
                if let Some(version) = version.and_then(|f| f(token)) {
                    os.version = version;
                }
            }
        }
    }
}

/// Rules are tried in order against every system token; the first rule
/// that matches a token is applied. Specific families (Android, iOS,
/// Windows Phone) are positioned to win over the broader Linux and Windows.
const OS_RULES: &[OsRule] = &[
    // IE must not block OS extraction
    OsRule::new(
        Matcher::AnyPrefix(&["Trident/", "MSIE "]),
        Effect::InternetExplorer,
        Flow::Continue,
    ),
    // might be Android or something else more specific
    OsRule::new(
        Matcher::Prefix("Linux"),
        Effect::Os("Linux", None),
        Flow::Continue,
    ),
    OsRule::os_with_version(Matcher::Prefix("Android"), "Android", android_version),
    OsRule::os_with_version(Matcher::Prefix("Intel Mac OS X"), "macOS", macos_version),
    OsRule::os_with_version(
        Matcher::AnyPrefix(&["CPU iPhone OS", "CPU OS"]),
        "iOS",
        ios_version,
    ),
    OsRule::os_with_version(
        Matcher::Prefix("Windows Phone"),
        "Windows Phone",
        windows_phone_version,
    ),
    // a trailing Trident/ token still has to be seen for IE 11
    OsRule::new(
        Matcher::Prefix("Windows"),
        Effect::Os("Windows", Some(windows_nt_version)),
        Flow::Continue,
    ),
    // smaller systems last, so we need fewer string matches
    OsRule::os(Matcher::Prefix("CrOS"), "Chrome OS"),
    OsRule::os(Matcher::Prefix("OpenBSD"), "OpenBSD"),
    OsRule::os(Matcher::Prefix("FreeBSD"), "FreeBSD"),
    OsRule::os(Matcher::Prefix("NetBSD"), "NetBSD"),
    OsRule::os(Matcher::Prefix("DragonFly"), "DragonFly BSD"),
    OsRule::os(Matcher::Prefix("SunOS"), "SunOS"),
    OsRule::os_with_version(Matcher::Prefix("Tizen"), "Tizen", tizen_version),
    OsRule::os(Matcher::Prefix("PlayStation 4"), "PlayStation 4"),
    OsRule::os(Matcher::Exact("J2ME/MIDP"), "Java ME"),
    OsRule::os(Matcher::Exact("MAUI Runtime"), "MAUI Runtime"),
    OsRule::os(Matcher::Contains(" Haiku "), "Haiku"),
    OsRule::os(Matcher::Contains("Fuchsia"), "Fuchsia"),
    OsRule::os_with_version(Matcher::Contains("Sailfish "), "Sailfish", sailfish_version),
];

/// Classify the operating system from the system tokens.
///
/// Product tokens are only consulted to find a Linux distribution.
pub(crate) fn classify_os<'a>(tokens: &Tokens<'a>) -> OsMatch<'a> {
    let mut os = OsMatch::default();

    for token in tokens.system() {
        let Some(rule) = OS_RULES.iter().find(|rule| rule.matcher.matches(token)) else {
            continue;
        };
        rule.apply(token, &mut os);
        if rule.flow == Flow::Stop {
            break;
        }
    }

    if os.name == "Linux" {
        if let Some(distro) = find_distribution(tokens.system()) {
            os.version = Cow::Borrowed(distro);
        } else if os.version.is_empty()
            && let Some(distro) = find_distribution(tokens.products())
        {
            os.version = Cow::Borrowed(distro);
        }
    }

    os
}

fn find_distribution<'a>(tokens: &[&'a str]) -> Option<&'a str> {
    tokens
        .iter()
        .copied()
        .find(|token| LINUX_DISTRIBUTIONS.iter().any(|distro| distro == token))
}

fn android_version(token: &str) -> Option<Cow<'_, str>> {
    (token.len() > 7).then(|| Cow::Borrowed(max_version(substr_from(token, 8), 2, true)))
}

fn macos_version(token: &str) -> Option<Cow<'_, str>> {
    (token.len() > 14).then(|| {
        let version = substr_from(token, 15).replace('_', ".");
        Cow::Owned(max_version(&version, 2, false).to_owned())
    })
}

/// `CPU iPhone OS 7_0 like Mac OS X`
fn ios_version(token: &str) -> Option<Cow<'_, str>> {
    let i = token.find("OS")?;
    let version = substr_from(token, i + 3);
    if version.is_empty() {
        return None;
    }
    let version = version.split(' ').next().unwrap_or_default().replace('_', ".");
    Some(Cow::Owned(max_version(&version, 2, false).to_owned()))
}

/// `Windows Phone 8.0`
fn windows_phone_version(token: &str) -> Option<Cow<'_, str>> {
    token
        .split(' ')
        .nth(2)
        .map(|version| Cow::Borrowed(max_version(version, 2, true)))
}

/// `Windows NT 6.1`
fn windows_nt_version(token: &str) -> Option<Cow<'_, str>> {
    token.rfind(' ').map(|i| {
        Cow::Borrowed(windows_version(substr_from(token, i + 1)).unwrap_or_default())
    })
}

fn tizen_version(token: &str) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(to_number(substr_from(token, 6))))
}

fn sailfish_version(token: &str) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(max_version(substr_from(token, 9), 2, false)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(system: &str) -> (String, String, bool) {
        let header = format!("Mozilla/5.0 ({system}) Foo/1.0");
        let tokens = Tokens::new(&header);
        let os = classify_os(&tokens);
        (os.name.to_owned(), os.version.into_owned(), os.is_ie)
    }

    #[test]
    fn test_classify_os() {
        for (system, name, version) in [
            ("Windows NT 10.0; Win64; x64; rv:73.0", "Windows", "10"),
            ("Windows NT 6.1; WOW64", "Windows", "7"),
            ("Windows NT 11.0", "Windows", ""),
            ("Windows", "Windows", ""),
            ("Windows Phone 8.0; Trident/6.0", "Windows Phone", "8"),
            ("Windows Phone 10.0; Android 6.0.1", "Windows Phone", "10"),
            ("Macintosh; Intel Mac OS X 10_15_3", "macOS", "10.15"),
            ("Macintosh; Intel Mac OS X 10.15; rv:73.0", "macOS", "10.15"),
            ("Macintosh; Intel Mac OS X", "macOS", ""),
            ("iPhone; CPU iPhone OS 12_0 like Mac OS X", "iOS", "12.0"),
            ("iPad; CPU OS 13_3_1 like Mac OS X", "iOS", "13.3"),
            ("Linux; Android 8.0.0; SM-G960F Build/R16NW", "Android", "8"),
            ("Linux; Android 10; SM-A505F", "Android", "10"),
            ("Linux; Android 4.4.2; Nexus 5", "Android", "4.4"),
            ("Android", "Android", ""),
            ("X11; Linux x86_64", "Linux", ""),
            ("X11; Ubuntu; Linux x86_64; rv:73.0", "Linux", "Ubuntu"),
            ("X11; Fedora; Linux x86_64", "Linux", "Fedora"),
            ("X11; CrOS x86_64 12871.102.0", "Chrome OS", ""),
            ("X11; OpenBSD amd64; rv:72.0", "OpenBSD", ""),
            ("X11; FreeBSD amd64; rv:72.0", "FreeBSD", ""),
            ("X11; NetBSD amd64; rv:72.0", "NetBSD", ""),
            ("X11; DragonFly x86_64; rv:72.0", "DragonFly BSD", ""),
            ("X11; SunOS i86pc; rv:72.0", "SunOS", ""),
            ("SMART-TV; Linux; Tizen 5.0", "Tizen", "5.0"),
            ("PlayStation 4 7.51", "PlayStation 4", ""),
            ("J2ME/MIDP", "Java ME", ""),
            ("MAUI Runtime", "MAUI Runtime", ""),
            ("X11; Fuchsia", "Fuchsia", ""),
            ("X11; U; My Haiku Box; en", "Haiku", ""),
            ("Linux; U; Sailfish 3.0; Mobile", "Sailfish", "3.0"),
            ("compatible; Googlebot/2.1", "", ""),
            ("", "", ""),
        ] {
            let (got_name, got_version, _) = os(system);
            assert_eq!(
                (got_name.as_str(), got_version.as_str()),
                (name, version),
                "system: {system:?}"
            );
        }
    }

    #[test]
    fn test_classify_os_internet_explorer() {
        assert_eq!(
            os("compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0"),
            ("Windows".to_owned(), "7".to_owned(), true)
        );
        assert_eq!(
            os("Windows NT 10.0; WOW64; Trident/7.0; rv:11.0"),
            ("Windows".to_owned(), "10".to_owned(), true)
        );
        assert_eq!(
            os("Linux; Android 4.0; MSIE 9.0"),
            ("Android".to_owned(), "4".to_owned(), false)
        );
    }

    #[test]
    fn test_linux_distribution_from_products() {
        let tokens = Tokens::new("Mozilla/5.0 (X11; Linux x86_64) Debian Firefox/73.0");
        let os = classify_os(&tokens);
        assert_eq!(os.name, "Linux");
        assert_eq!(os.version, "Debian");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "Windows Phone" is checked before "Windows"
        for (i, rule) in OS_RULES.iter().enumerate() {
            if let Matcher::Prefix("Windows") = rule.matcher {
                assert!(
                    OS_RULES[..i]
                        .iter()
                        .any(|r| matches!(r.matcher, Matcher::Prefix("Windows Phone")))
                );
            }
        }
    }
}
