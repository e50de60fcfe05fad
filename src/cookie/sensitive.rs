//! Metadata for cookies that carry sensitive data.

use std::ops::{Deref, DerefMut};

use tracing::debug;

use super::{CookieMetadata, KEY_HTTP_ONLY, KEY_SECURE, MetadataMap};

/// Cookie metadata with locked-down security flags.
///
/// `http_only` defaults to `true` and `secure` defaults to whether the current
/// request arrived over a secure transport. Neither flag has a public setter;
/// explicit boolean values in the initial map are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitiveCookieMetadata {
    inner: CookieMetadata,
}

impl SensitiveCookieMetadata {
    /// Creates sensitive metadata for a request with the given transport security.
    #[must_use]
    pub fn new(metadata: Option<MetadataMap>, request_is_secure: bool) -> Self {
        let mut inner = CookieMetadata::from(metadata);

        // Non-bool flag values read as unset and are replaced by the default.
        if inner.http_only().is_none() {
            inner.set(KEY_HTTP_ONLY, true);
        }
        if inner.secure().is_none() {
            debug!(request_is_secure, "defaulting sensitive cookie secure flag");
            inner.set(KEY_SECURE, request_is_secure);
        }

        Self { inner }
    }

    /// Unwraps into the plain metadata.
    #[must_use]
    pub fn into_inner(self) -> CookieMetadata {
        self.inner
    }
}

impl Deref for SensitiveCookieMetadata {
    type Target = CookieMetadata;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SensitiveCookieMetadata {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
