//! Process-wide configuration for tokenization, file classification and query formatting.
//!
//! A [`Config`] is built once at startup (from defaults or a TOML document) and is
//! never mutated afterwards. Every operation in this crate reads it by shared
//! reference, so it can be wrapped in an `Arc` and handed to any number of threads.

use crate::error::{ConfigError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Default cap on characters considered by the keyword splitters.
pub const DEFAULT_MAX_SPLIT_LENGTH: usize = 100_000;

/// Default average line length above which a file counts as minified.
pub const DEFAULT_MINIFIED_LENGTH: usize = 255;

/// Extensions treated as binary unless whitelisted.
pub const DEFAULT_BINARY_BLACKLIST: &str = "woff,eot,cur,dm,xpm,emz,db,scc,idx,mpp,dot,pspimage,\
stl,dml,wmf,rvm,resources,tlb,docx,doc,xls,xlsx,ppt,pptx,msg,vsd,chm,fm,book,dgn,blend,mdl,pdf,\
swf,mov,mp4,mp3,wav,avi,flv,mkv,png,jpg,jpeg,gif,bmp,ico,tif,tiff,psd,zip,gz,tgz,bz2,xz,7z,rar,\
jar,war,class,exe,dll,so,dylib,o,a,lib,obj,pyc,pyo,bin,dat,iso,img,dmg,ttf,otf,woff2";

/// Immutable configuration shared by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Inputs longer than this many characters are truncated before keyword splitting.
    pub max_split_length: usize,
    /// Average trimmed line length above which a file is flagged as minified.
    pub minified_length: usize,
    /// Lowercase extensions (no leading dot) that are never binary or minified.
    pub binary_whitelist: Vec<String>,
    /// Lowercase extensions (no leading dot) that are always binary.
    pub binary_blacklist: Vec<String>,
    /// Whether to fall back to the ASCII-ratio heuristic for unknown extensions.
    pub guess_binary: bool,
    /// Adjacent bare query terms are joined with AND instead of the backend's OR.
    pub and_match_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_split_length: DEFAULT_MAX_SPLIT_LENGTH,
            minified_length: DEFAULT_MINIFIED_LENGTH,
            binary_whitelist: Vec::new(),
            // The built-in list is well formed.
            binary_blacklist: parse_extension_list("binary_blacklist", DEFAULT_BINARY_BLACKLIST)
                .unwrap_or_default(),
            guess_binary: true,
            and_match_default: true,
        }
    }
}

/// On-disk shape of the configuration. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    max_split_length: Option<usize>,
    minified_length: Option<i64>,
    binary_whitelist: Option<String>,
    binary_blacklist: Option<String>,
    guess_binary: Option<bool>,
    and_match_default: Option<bool>,
}

impl Config {
    /// Parse and validate a TOML configuration document.
    ///
    /// Missing keys take their defaults. A non-positive `minified_length` falls back
    /// to [`DEFAULT_MINIFIED_LENGTH`]; every other invalid value is rejected.
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(source)?;
        let defaults = Self::default();

        let max_split_length = raw.max_split_length.unwrap_or(defaults.max_split_length);
        if max_split_length == 0 {
            return Err(ConfigError::ZeroSplitLength);
        }

        let minified_length = match raw.minified_length {
            None => defaults.minified_length,
            Some(value) => match usize::try_from(value) {
                Ok(length) if length > 0 => length,
                _ => {
                    tracing::warn!(
                        "minified_length {} is not positive, using default {}",
                        value,
                        DEFAULT_MINIFIED_LENGTH
                    );
                    DEFAULT_MINIFIED_LENGTH
                }
            },
        };

        let binary_whitelist = match raw.binary_whitelist {
            Some(list) => parse_extension_list("binary_whitelist", &list)?,
            None => defaults.binary_whitelist,
        };
        let binary_blacklist = match raw.binary_blacklist {
            Some(list) => parse_extension_list("binary_blacklist", &list)?,
            None => defaults.binary_blacklist,
        };

        Ok(Self {
            max_split_length,
            minified_length,
            binary_whitelist,
            binary_blacklist,
            guess_binary: raw.guess_binary.unwrap_or(defaults.guess_binary),
            and_match_default: raw.and_match_default.unwrap_or(defaults.and_match_default),
        })
    }

    /// Read and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        tracing::info!(
            "Loaded configuration from {}: {} whitelisted, {} blacklisted extensions",
            path.display(),
            config.binary_whitelist.len(),
            config.binary_blacklist.len()
        );

        Ok(config)
    }
}

/// Trim and lowercase an extension, stripping one leading dot.
pub(crate) fn normalize_extension(entry: &str) -> String {
    let entry = entry.trim();
    entry.strip_prefix('.').unwrap_or(entry).to_lowercase()
}

/// Split a comma-separated extension list into normalized entries.
///
/// Entries go through [`normalize_extension`]. Empty entries are dropped; duplicates
/// keep their first position.
fn parse_extension_list(
    list: &'static str,
    value: &str,
) -> std::result::Result<Vec<String>, ConfigError> {
    let mut extensions: Vec<String> = Vec::new();

    for entry in value.split(',') {
        let entry = normalize_extension(entry);
        if entry.is_empty() {
            continue;
        }
        if entry.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
            return Err(ConfigError::InvalidExtension {
                list,
                extension: entry,
            });
        }
        if !extensions.contains(&entry) {
            extensions.push(entry);
        }
    }

    Ok(extensions)
}
