//! The `SameSite` cookie directive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MetadataError;

/// Cross-site request policy for a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SameSite {
    /// Only sent with same-site requests.
    Strict,
    /// Sent with same-site requests and top-level cross-site navigation.
    Lax,
    /// Sent with all requests.
    None,
}

impl SameSite {
    /// Every accepted policy, in canonical order.
    pub const ALL: [Self; 3] = [Self::Strict, Self::Lax, Self::None];

    /// Returns the canonical directive spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }

    /// Matches a directive value case-insensitively.
    #[must_use]
    pub fn from_directive(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SameSite {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_directive(s).ok_or_else(|| MetadataError::invalid_same_site(Some(s)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_directive_is_case_insensitive() {
        for input in ["strict", "Strict", "STRICT", "sTrIcT"] {
            assert_eq!(SameSite::from_directive(input), Some(SameSite::Strict));
        }
        assert_eq!(SameSite::from_directive("LAX"), Some(SameSite::Lax));
        assert_eq!(SameSite::from_directive("none"), Some(SameSite::None));
    }

    #[test]
    fn test_from_directive_rejects_unknown() {
        assert_eq!(SameSite::from_directive(""), None);
        assert_eq!(SameSite::from_directive("invalid"), None);
        assert_eq!(SameSite::from_directive(" strict"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "nope".parse::<SameSite>().unwrap_err();
        assert!(matches!(err, MetadataError::InvalidArgument { .. }));
        assert_eq!("lax".parse::<SameSite>().unwrap(), SameSite::Lax);
    }

    #[test]
    fn test_display_is_canonical() {
        let rendered: Vec<String> = SameSite::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["Strict", "Lax", "None"]);
    }
}
