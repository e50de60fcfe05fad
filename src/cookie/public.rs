//! Metadata for cookies that client-side code may read.

use std::ops::{Deref, DerefMut};

use super::{AttributeValue, CookieMetadata, KEY_DURATION, KEY_HTTP_ONLY, KEY_SECURE, MetadataMap};

/// Seconds in a (non-leap) year.
pub const ONE_YEAR_SECS: i64 = 60 * 60 * 24 * 365;

/// Cookie metadata whose lifetime and security flags are caller-controlled.
///
/// Dereferences to [`CookieMetadata`] for the domain, path and `SameSite`
/// accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicCookieMetadata {
    inner: CookieMetadata,
}

impl PublicCookieMetadata {
    /// Creates empty public metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates public metadata holding exactly the supplied entries.
    #[must_use]
    pub fn with_metadata(metadata: MetadataMap) -> Self {
        Self {
            inner: CookieMetadata::with_metadata(metadata),
        }
    }

    /// Sets the cookie lifetime in seconds.
    pub fn set_duration(&mut self, seconds: i64) -> &mut Self {
        self.inner.set(KEY_DURATION, seconds);
        self
    }

    /// Sets the cookie lifetime to one year.
    pub fn set_duration_one_year(&mut self) -> &mut Self {
        self.set_duration(ONE_YEAR_SECS)
    }

    /// Returns the cookie lifetime in seconds.
    #[must_use]
    pub fn duration(&self) -> Option<i64> {
        self.inner.get(KEY_DURATION).and_then(AttributeValue::as_int)
    }

    /// Sets the HTTP-only flag.
    pub fn set_http_only(&mut self, http_only: bool) -> &mut Self {
        self.inner.set(KEY_HTTP_ONLY, http_only);
        self
    }

    /// Sets whether the cookie is only sent over HTTPS.
    pub fn set_secure(&mut self, secure: bool) -> &mut Self {
        self.inner.set(KEY_SECURE, secure);
        self
    }

    /// Unwraps into the plain metadata.
    #[must_use]
    pub fn into_inner(self) -> CookieMetadata {
        self.inner
    }
}

impl From<CookieMetadata> for PublicCookieMetadata {
    fn from(inner: CookieMetadata) -> Self {
        Self { inner }
    }
}

impl Deref for PublicCookieMetadata {
    type Target = CookieMetadata;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PublicCookieMetadata {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cookie::{KEY_DOMAIN, KEY_SAME_SITE};

    #[test]
    fn test_duration_round_trip() {
        let mut metadata = PublicCookieMetadata::new();
        assert_eq!(metadata.duration(), None);
        metadata.set_duration(3600);
        assert_eq!(metadata.duration(), Some(3600));
    }

    #[test]
    fn test_duration_one_year() {
        let mut metadata = PublicCookieMetadata::new();
        metadata.set_duration_one_year();
        assert_eq!(metadata.duration(), Some(31_536_000));
    }

    #[test]
    fn test_flag_setters() {
        let mut metadata = PublicCookieMetadata::new();
        metadata.set_http_only(true).set_secure(false);
        assert_eq!(metadata.http_only(), Some(true));
        assert_eq!(metadata.secure(), Some(false));
    }

    #[test]
    fn test_base_accessors_through_deref() {
        let mut metadata = PublicCookieMetadata::new();
        metadata
            .set_duration(60)
            .set_domain("example.com")
            .set_same_site("lax")
            .unwrap();

        assert_eq!(metadata.domain(), Some("example.com"));
        assert_eq!(metadata.same_site(), Some("lax"));

        let exported = metadata.export();
        assert_eq!(
            exported.keys().map(String::as_str).collect::<Vec<_>>(),
            [KEY_DOMAIN, KEY_DURATION, KEY_SAME_SITE]
        );
    }

    #[test]
    fn test_into_inner_keeps_entries() {
        let mut metadata = PublicCookieMetadata::new();
        metadata.set_secure(true);
        let inner = metadata.into_inner();
        assert_eq!(inner.secure(), Some(true));
    }
}
