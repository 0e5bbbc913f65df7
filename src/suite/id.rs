use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use thiserror::Error;

/// `u-` followed by five lowercase letters or digits, e.g. `u-ab123`.
#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
pub static SUITE_ID_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"u-[a-z0-9]{5}").expect("SUITE_ID_REGEX is a valid regex literal")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuiteIdError {
    #[error("'{0}' is not a suite id (expected u- followed by five lowercase letters or digits)")]
    InvalidFormat(String),
}

/// Suite identifier, also the file name of its checklist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuiteId(String);

impl SuiteId {
    /// First suite id occurring anywhere in `text`.
    #[must_use]
    pub fn find_in(text: &str) -> Option<Self> {
        SUITE_ID_REGEX
            .find(text)
            .map(|m| Self(m.as_str().to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SuiteId {
    type Err = SuiteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match SUITE_ID_REGEX.find(s) {
            Some(m) if m.as_str() == s => Ok(Self(s.to_string())),
            _ => Err(SuiteIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SuiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SuiteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
