//! Cookie attribute metadata.
//!
//! [`CookieMetadata`] stores cookie attributes (domain, path, security flags,
//! `SameSite` policy, lifetime) in a key/value map behind typed accessors.
//! [`PublicCookieMetadata`] and [`SensitiveCookieMetadata`] layer
//! flag-handling policies on top.

mod error;
mod metadata;
mod public;
mod same_site;
mod sensitive;
mod value;

pub use error::MetadataError;
pub use metadata::{
    CookieMetadata, KEY_DOMAIN, KEY_DURATION, KEY_HTTP_ONLY, KEY_PATH, KEY_SAME_SITE, KEY_SECURE,
    MetadataMap,
};
pub use public::{ONE_YEAR_SECS, PublicCookieMetadata};
pub use same_site::SameSite;
pub use sensitive::SensitiveCookieMetadata;
pub use value::AttributeValue;
