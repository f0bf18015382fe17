//! Static domain knowledge, initialized once and never mutated.
//!
//! Order is significant for the lists: entries are tried first to last,
//! new entries go at the end unless they must take priority.

use ahash::HashMap;
use std::sync::LazyLock;

/// Windows NT versions mapped to the product version.
///
/// Windows 11 still advertises itself as NT 10.0,
/// so it is reported as Windows 10.
static WINDOWS_VERSIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("CE", "CE"),
        ("5.0", "2000"),
        ("5.1", "XP"),
        ("5.2", "XP"),
        ("6.0", "Vista"),
        ("6.1", "7"),
        ("6.2", "8"),
        ("6.3", "8.1"),
        ("10.0", "10"),
    ]
    .into_iter()
    .collect()
});

/// Safari often doesn't send an explicit `Version/`, but a useful
/// version can be inferred from the `AppleWebKit/` build.
///
/// See <https://en.wikipedia.org/wiki/Safari_version_history>.
static SAFARI_VERSIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("534.46.0", "5.1"),
        ("534.46", "5.1"),
        ("536.26", "6.0"),
        ("537.36", "6.0"), // not listed; guess
        ("537.51.1", "7.0"),
        ("537.51.2", "7.0"),
        ("600.1.3", "8.0"),
        ("600.1.4", "8.0"),
        ("601.1", "9.0"),
        ("601.1.46", "9.0"),
        ("601.1.56", "9.0"),
        ("601.2.7", "9.0"),
        ("601.3.9", "9.0"),
        ("601.4.4", "9.0"),
        ("601.5.17", "9.1"),
        ("601.6.17", "9.1"),
        ("601.7.1", "9.1"),
        ("601.7.8", "9.1"),
        ("602.1.50", "10.0"),
        ("602.2.14", "10.0"),
        ("602.3.12", "10.0"),
        ("602.4.6", "10.0"),
        ("602.4.8", "10.0"),
        ("603.1.30", "10.1"),
        ("603.2.4", "10.1"),
        ("603.3.8", "10.1"),
        ("604.1.34", "11.0"),
        ("604.1.38", "11.0"),
        ("604.2.4", "11.0"),
        ("604.3.5", "11.0"),
        ("604.4.7", "11.0"),
        ("604.5.6", "11.0"),
        ("605", "11.1"), // not listed; guess
        ("605.1.15", "11.0"),
        ("605.1.33", "11.1"),
        ("606.1.36", "12.0"),
        ("607.1.40", "12.1"),
        ("608.2.11", "13.0"),
        ("610.2.11", "14.0"),
        ("610.3.7.1.9", "14.0"),
        ("610.4.3.1.4", "14.0"),
        ("610.4.3.1.7", "14.0"),
        ("611.1.21.161.7", "14.1"),
        ("611.2.7.1.4", "14.1"),
        ("611.3.10.1.5", "14.1"),
    ]
    .into_iter()
    .collect()
});

/// Product tokens that never identify a browser by themselves.
pub(crate) const IGNORED_PRODUCTS: &[&str] = &[
    "Mozilla/",
    "Gecko/",
    "AppleWebKit/",
    "(KHTML,",
    "like",
    "Gecko)",
    "Version/",
    "Mobile/",
    "Safari/",
    "QtWebEngine/",
];

/// Browsers that are not Chrome, Safari, or Firefox,
/// but may identify as one of them.
pub(crate) const KNOWN_BROWSERS: &[&str] = &[
    "BingPreview/",
    "PhantomJS/",
    "Dillo/",
    "PaleMoon/",
    "Basilisk/",
];

/// Linux distributions reported as the Linux "version".
pub(crate) const LINUX_DISTRIBUTIONS: &[&str] = &["Ubuntu", "CentOS", "Fedora", "Debian"];

/// Windows product version for an NT version (e.g. `6.1` → `7`).
pub(crate) fn windows_version(nt: &str) -> Option<&'static str> {
    WINDOWS_VERSIONS.get(nt).copied()
}

/// Safari version for an `AppleWebKit/` build (e.g. `608.2.11` → `13.0`).
pub(crate) fn safari_version(webkit_build: &str) -> Option<&'static str> {
    SAFARI_VERSIONS.get(webkit_build).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_version() {
        for (nt, expected) in [
            ("10.0", Some("10")),
            ("6.1", Some("7")),
            ("5.1", Some("XP")),
            ("CE", Some("CE")),
            ("11.0", None),
            ("", None),
        ] {
            assert_eq!(windows_version(nt), expected, "nt: {nt:?}");
        }
    }

    #[test]
    fn test_safari_version() {
        for (build, expected) in [
            ("605.1.15", Some("11.0")),
            ("605", Some("11.1")),
            ("608.2.11", Some("13.0")),
            ("611.3.10.1.5", Some("14.1")),
            ("612.1", None),
            ("605.1.15 ", None),
        ] {
            assert_eq!(safari_version(build), expected, "build: {build:?}");
        }
    }
}
