//! In-memory table of profiles loaded from an INI credentials file
//!
//! Sections are offered to [`CredentialStore::add`] in file order, so the
//! inclusion rule is enforced in one place:
//!
//! - a section becomes a profile only when both the access key id and the
//!   secret are present and non-empty
//! - incomplete or unrelated sections are skipped without error
//! - a repeated key resolves to its last occurrence within the section
//! - a repeated section resolves to its last *complete* occurrence; a later
//!   incomplete block does not remove an earlier complete one
//! - `key = value` lines before the first `[section]` header are a parse error

use ini::{Ini, ParseOption};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::profile::Profile;
use crate::config::CredentialsConfig;
use crate::error::{CredentialsError, Result};

/// Profiles keyed by section name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialStore {
    profiles: HashMap<String, Profile>,
}

impl CredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a credentials file using the default field names
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(&CredentialsConfig::with_path(path.as_ref()))
    }

    /// Load the credentials file described by `config`
    pub fn load(config: &CredentialsConfig) -> Result<Self> {
        let path = config.display_path();
        if !config.path.is_file() {
            return Err(CredentialsError::NotFound { path });
        }

        debug!("Loading credentials from {}", path);
        let content = fs::read_to_string(&config.path)
            .map_err(|source| CredentialsError::Read { path, source })?;

        Self::parse_str(&content, config)
    }

    /// Build a store from INI text already in memory
    ///
    /// `config.path` is only used to label parse errors.
    pub fn parse_str(content: &str, config: &CredentialsConfig) -> Result<Self> {
        // Values are taken verbatim: AWS secrets may contain backslashes or quotes.
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..Default::default()
        };
        // Windows editors often prepend a BOM, which would hide the first header
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let ini =
            Ini::load_from_str_opt(content, options).map_err(|e| CredentialsError::Parse {
                path: config.display_path(),
                message: e.to_string(),
            })?;

        let mut store = Self::new();
        for (section, properties) in ini.iter() {
            let Some(name) = section else {
                if let Some((key, _)) = properties.iter().next() {
                    return Err(CredentialsError::Parse {
                        path: config.display_path(),
                        message: format!("key '{}' appears before any [section] header", key),
                    });
                }
                continue;
            };

            let key_id = properties
                .get_all(&config.access_key_field)
                .last()
                .unwrap_or_default();
            let secret = properties
                .get_all(&config.secret_key_field)
                .last()
                .unwrap_or_default();

            if store.add(Profile::new(name, key_id, secret)) {
                trace!(profile = name, "Registered profile");
            } else {
                debug!(
                    section = name,
                    has_key_id = !key_id.is_empty(),
                    has_secret = !secret.is_empty(),
                    "Skipping section without complete credentials"
                );
            }
        }

        debug!("Loaded {} profile(s)", store.len());
        Ok(store)
    }

    /// Insert or overwrite a profile
    ///
    /// Returns false, leaving the store untouched, when the name, key id or
    /// secret is empty.
    pub fn add(&mut self, profile: Profile) -> bool {
        if !profile.is_complete() {
            return false;
        }
        self.profiles.insert(profile.name().to_string(), profile);
        true
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// All profile names, in no particular order
    pub fn list_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// All profile names sorted lexicographically
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names = self.list_names();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
