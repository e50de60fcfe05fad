//! Typed accessors over a map of cookie attributes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{AttributeValue, MetadataError, SameSite};

/// Metadata key for the cookie domain.
pub const KEY_DOMAIN: &str = "domain";
/// Metadata key for the cookie path.
pub const KEY_PATH: &str = "path";
/// Metadata key for the HTTPS-only flag.
pub const KEY_SECURE: &str = "secure";
/// Metadata key for the no-script-access flag.
pub const KEY_HTTP_ONLY: &str = "http_only";
/// Metadata key for the cookie lifetime in seconds.
pub const KEY_DURATION: &str = "duration";
/// Metadata key for the `SameSite` directive.
pub const KEY_SAME_SITE: &str = "samesite";

/// Key-ordered attribute map, as accepted at construction and returned by export.
pub type MetadataMap = BTreeMap<String, AttributeValue>;

/// Cookie attributes backed by a key/value map.
///
/// Keys that have never been set are absent, and the getters report them as
/// `None` rather than substituting defaults. Setters mutate in place and
/// return `&mut Self` for chaining.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookieMetadata {
    metadata: MetadataMap,
}

impl CookieMetadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates metadata holding exactly the supplied entries.
    #[must_use]
    pub fn with_metadata(metadata: MetadataMap) -> Self {
        Self { metadata }
    }

    /// Creates metadata from an untyped JSON value.
    ///
    /// Anything other than a JSON object yields empty metadata. Object entries
    /// that are not scalars are dropped.
    #[must_use]
    pub fn from_json(value: serde_json::Value) -> Self {
        let serde_json::Value::Object(entries) = value else {
            debug!("cookie metadata input is not a mapping; starting empty");
            return Self::new();
        };

        let mut metadata = MetadataMap::new();
        for (key, value) in entries {
            if let Some(value) = AttributeValue::from_json(value) {
                metadata.insert(key, value);
            } else {
                debug!(key = %key, "dropping non-scalar cookie metadata entry");
            }
        }
        Self { metadata }
    }

    /// Returns a snapshot of every stored attribute.
    ///
    /// Keys that have never been set do not appear. Explicit nulls do.
    #[must_use]
    pub fn export(&self) -> MetadataMap {
        self.metadata.clone()
    }

    /// Consumes the metadata and returns the underlying map.
    #[must_use]
    pub fn into_map(self) -> MetadataMap {
        self.metadata
    }

    /// Sets the domain for the cookie.
    pub fn set_domain(&mut self, domain: impl Into<String>) -> &mut Self {
        self.set(KEY_DOMAIN, domain.into())
    }

    /// Returns the domain for the cookie.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.get(KEY_DOMAIN).and_then(AttributeValue::as_str)
    }

    /// Sets the path for the cookie.
    pub fn set_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.set(KEY_PATH, path.into())
    }

    /// Returns the path for the cookie.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.get(KEY_PATH).and_then(AttributeValue::as_str)
    }

    /// Returns the HTTP-only flag.
    #[must_use]
    pub fn http_only(&self) -> Option<bool> {
        self.get(KEY_HTTP_ONLY).and_then(AttributeValue::as_bool)
    }

    /// Returns whether the cookie is only available under HTTPS.
    #[must_use]
    pub fn secure(&self) -> Option<bool> {
        self.get(KEY_SECURE).and_then(AttributeValue::as_bool)
    }

    /// Sets the `SameSite` directive.
    ///
    /// The value is matched case-insensitively against `Strict`, `Lax` and
    /// `None`, and stored exactly as given (not in canonical casing).
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidArgument`] when the value is missing or
    /// not an accepted directive. The metadata is left unchanged.
    pub fn set_same_site<'a>(
        &mut self,
        same_site: impl Into<Option<&'a str>>,
    ) -> Result<&mut Self, MetadataError> {
        let same_site = same_site.into();
        let Some(value) = same_site.filter(|v| SameSite::from_directive(v).is_some()) else {
            warn!(value = ?same_site, "rejected SameSite directive");
            return Err(MetadataError::invalid_same_site(same_site));
        };
        Ok(self.set(KEY_SAME_SITE, value))
    }

    /// Returns the `SameSite` directive as it was stored.
    #[must_use]
    pub fn same_site(&self) -> Option<&str> {
        self.get(KEY_SAME_SITE).and_then(AttributeValue::as_str)
    }

    /// Returns the stored `SameSite` directive parsed into its canonical policy.
    ///
    /// `None` when unset or when the stored value is not a valid directive
    /// (possible for values supplied at construction).
    #[must_use]
    pub fn same_site_policy(&self) -> Option<SameSite> {
        self.same_site().and_then(SameSite::from_directive)
    }

    /// Returns the stored value for `key` whatever its type.
    ///
    /// The typed getters only report values of their own type; this reads an
    /// entry supplied at construction with a different scalar type.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.get(key)
    }

    /// Returns the stored value for `key`. Explicit nulls read as unset.
    pub(crate) fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.metadata.get(key).filter(|value| !value.is_null())
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub(crate) fn set(&mut self, key: &str, value: impl Into<AttributeValue>) -> &mut Self {
        debug!(key, "set cookie metadata");
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

impl From<MetadataMap> for CookieMetadata {
    fn from(metadata: MetadataMap) -> Self {
        Self::with_metadata(metadata)
    }
}

impl From<Option<MetadataMap>> for CookieMetadata {
    fn from(metadata: Option<MetadataMap>) -> Self {
        metadata.map(Self::with_metadata).unwrap_or_default()
    }
}
