use super::parse_user_agent;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

/// Browser and operating system classified from a `User-Agent` header.
///
/// Fields are empty when nothing could be classified,
/// see [the module level documentation](crate) for more information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAgent {
    /// e.g. `Firefox`, `Chrome`, `Internet Explorer`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub browser_name: String,
    /// e.g. `73`, `13.0`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub browser_version: String,
    /// e.g. `Windows`, `macOS`, `Linux`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub os_name: String,
    /// e.g. `10`, `10.15`, or a distribution such as `Ubuntu` for `Linux`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub os_version: String,
}

impl UserAgent {
    /// Classify a `User-Agent` header.
    ///
    /// This never fails: anything unrecognized leaves the fields empty.
    #[must_use]
    pub fn new(header: &str) -> Self {
        parse_user_agent(header)
    }

    /// The browser including its version (if any), e.g. `Firefox 73`.
    #[must_use]
    pub fn browser(&self) -> Cow<'_, str> {
        join(&self.browser_name, &self.browser_version)
    }

    /// The operating system including its version (if any), e.g. `Windows 10`.
    #[must_use]
    pub fn os(&self) -> Cow<'_, str> {
        join(&self.os_name, &self.os_version)
    }

    /// Neither a browser nor an operating system was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.browser_name.is_empty() && self.os_name.is_empty()
    }
}

fn join<'a>(name: &'a str, version: &str) -> Cow<'a, str> {
    if version.is_empty() {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{name} {version}"))
    }
}

/// `<browser> on <os>`, leaving out the `on` if either one is blank.
impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (browser, os) = (self.browser(), self.os());
        match (browser.is_empty(), os.is_empty()) {
            (_, true) => f.write_str(&browser),
            (true, false) => f.write_str(&os),
            (false, false) => write!(f, "{browser} on {os}"),
        }
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for UserAgent {
    fn from(header: &str) -> Self {
        Self::new(header)
    }
}
