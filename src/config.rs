//! Cookie defaults loaded from a configuration file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, instrument};

use crate::cookie::{PublicCookieMetadata, SameSite};

/// File-backed cookie defaults. Unset fields are left out of the built metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieConfig {
    /// Default cookie domain.
    pub domain: Option<String>,
    /// Default cookie path.
    pub path: Option<String>,
    /// Default HTTPS-only flag.
    pub secure: Option<bool>,
    /// Default HTTP-only flag.
    pub http_only: Option<bool>,
    /// Default cookie lifetime in seconds.
    pub lifetime: Option<i64>,
    /// Default `SameSite` directive, kept as written.
    pub same_site: Option<String>,
}

impl CookieConfig {
    /// Builds public cookie metadata carrying exactly the configured values.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured `samesite` value is not a valid
    /// directive (only possible when the struct was built by hand).
    pub fn to_metadata(&self) -> Result<PublicCookieMetadata> {
        let mut metadata = PublicCookieMetadata::new();
        if let Some(domain) = &self.domain {
            metadata.set_domain(domain.as_str());
        }
        if let Some(path) = &self.path {
            metadata.set_path(path.as_str());
        }
        if let Some(secure) = self.secure {
            metadata.set_secure(secure);
        }
        if let Some(http_only) = self.http_only {
            metadata.set_http_only(http_only);
        }
        if let Some(lifetime) = self.lifetime {
            metadata.set_duration(lifetime);
        }
        if let Some(same_site) = &self.same_site {
            metadata
                .set_same_site(same_site.as_str())
                .context("Invalid `samesite` in cookie config")?;
        }
        Ok(metadata)
    }
}

/// Loaded config metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Resolved config path if a base directory is known.
    pub path: Option<PathBuf>,
    /// Parsed config when a config file exists and was valid.
    pub config: Option<CookieConfig>,
}

/// Resolves the default config path.
///
/// Priority:
/// 1. `$XDG_CONFIG_HOME/cookie-metadata/config.toml`
/// 2. `$HOME/.config/cookie-metadata/config.toml`
#[must_use]
pub fn resolve_default_config_path() -> Option<PathBuf> {
    if let Some(xdg_config_home) = env_var_non_empty_os("XDG_CONFIG_HOME") {
        return Some(
            PathBuf::from(xdg_config_home)
                .join("cookie-metadata")
                .join("config.toml"),
        );
    }

    let home = env_var_non_empty_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("cookie-metadata")
            .join("config.toml"),
    )
}

fn env_var_non_empty_os(name: &str) -> Option<std::ffi::OsString> {
    let value = env::var_os(name)?;
    if value.is_empty() { None } else { Some(value) }
}

/// Loads config from the default path if present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<LoadedConfig> {
    let path = resolve_default_config_path();
    let config = match path.as_deref() {
        Some(path_ref) if path_ref.exists() => Some(load_config_file(path_ref)?),
        _ => None,
    };
    Ok(LoadedConfig { path, config })
}

/// Loads and parses a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains invalid settings.
#[instrument(level = "debug")]
pub fn load_config_file(path: &Path) -> Result<CookieConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config = parse_config_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
    debug!(?config, "loaded cookie config");
    Ok(config)
}

/// Parses config text of `key = value` lines.
///
/// Strings are double-quoted, booleans are `true`/`false`, and `#` starts a
/// comment outside of strings.
///
/// # Errors
///
/// Returns an error naming the offending line for syntax errors, unknown keys
/// and invalid values.
pub fn parse_config_str(raw: &str) -> Result<CookieConfig> {
    let mut cfg = CookieConfig::default();
    for (line_index, raw_line) in raw.lines().enumerate() {
        let line_number = line_index + 1;
        let line = strip_inline_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            bail!("Invalid config syntax on line {line_number}: expected key = value");
        };

        let key = raw_key.trim();
        let value = raw_value.trim();

        match key {
            "domain" => {
                let parsed = parse_string_literal(value)
                    .with_context(|| format!("Invalid `domain` value on line {line_number}"))?;
                cfg.domain = Some(parsed);
            }
            "path" => {
                let parsed = parse_string_literal(value)
                    .with_context(|| format!("Invalid `path` value on line {line_number}"))?;
                cfg.path = Some(parsed);
            }
            "secure" => {
                let parsed = parse_boolean(value)
                    .with_context(|| format!("Invalid `secure` value on line {line_number}"))?;
                cfg.secure = Some(parsed);
            }
            "http_only" => {
                let parsed = parse_boolean(value)
                    .with_context(|| format!("Invalid `http_only` value on line {line_number}"))?;
                cfg.http_only = Some(parsed);
            }
            "lifetime" => {
                let parsed = parse_lifetime(value)
                    .with_context(|| format!("Invalid `lifetime` value on line {line_number}"))?;
                cfg.lifetime = Some(parsed);
            }
            "samesite" => {
                let parsed = parse_string_literal(value)
                    .with_context(|| format!("Invalid `samesite` value on line {line_number}"))?;
                parsed.parse::<SameSite>().with_context(|| {
                    format!("Invalid `samesite` value '{parsed}' on line {line_number}")
                })?;
                cfg.same_site = Some(parsed);
            }
            unknown => {
                bail!("Unknown configuration key: '{unknown}' on line {line_number}");
            }
        }
    }
    Ok(cfg)
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_string = false;
    for (index, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {}
        }
    }
    line
}

fn parse_string_literal(raw_value: &str) -> Result<String> {
    if raw_value.len() < 2 || !raw_value.starts_with('"') || !raw_value.ends_with('"') {
        bail!("Expected double-quoted string");
    }
    Ok(raw_value[1..raw_value.len() - 1].to_string())
}

fn parse_boolean(raw_value: &str) -> Result<bool> {
    match raw_value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => bail!("Expected boolean value (`true` or `false`)"),
    }
}

fn parse_lifetime(raw_value: &str) -> Result<i64> {
    if raw_value.is_empty() {
        bail!("Expected integer value");
    }
    let value = raw_value.parse::<i64>()?;
    if value < 0 {
        bail!("Expected non-negative integer");
    }
    Ok(value)
}
