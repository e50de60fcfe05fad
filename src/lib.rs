//! Cookie Metadata Library
//!
//! Typed, validated storage for the attributes that accompany a cookie:
//! domain, path, `Secure`, `HttpOnly`, lifetime and the `SameSite` directive.
//! Serializing cookies into headers is left to the caller.
//!
//! # Architecture
//!
//! - [`cookie`] - the attribute map, its typed accessors and the public and
//!   sensitive variants
//! - [`config`] - cookie defaults loaded from a configuration file

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod cookie;

// Re-export commonly used types
pub use config::{CookieConfig, LoadedConfig, load_config_file, load_default_config};
pub use cookie::{
    AttributeValue, CookieMetadata, MetadataError, MetadataMap, PublicCookieMetadata, SameSite,
    SensitiveCookieMetadata,
};
