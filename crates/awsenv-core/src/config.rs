//! Loader and formatter configuration
//!
//! Everything that used to be a fixed constant (file location, section keys,
//! emitted variable names) lives here and is passed explicitly to the loader.

use directories::BaseDirs;
use std::path::{Path, PathBuf};

use crate::error::{CredentialsError, Result};

/// Section key holding the access key identifier
pub const ACCESS_KEY_FIELD: &str = "aws_access_key_id";
/// Section key holding the secret access key
pub const SECRET_KEY_FIELD: &str = "aws_secret_access_key";

/// Environment variable names emitted by the formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarNames {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Default for EnvVarNames {
    fn default() -> Self {
        Self {
            access_key_id: "AWS_ACCESS_KEY_ID".to_string(),
            secret_access_key: "AWS_SECRET_ACCESS_KEY".to_string(),
        }
    }
}

/// Where to read credentials from and which keys to look for
#[derive(Debug, Clone)]
pub struct CredentialsConfig {
    /// Path to the INI credentials file
    pub path: PathBuf,
    /// Key read as the access key identifier in every section
    pub access_key_field: String,
    /// Key read as the secret in every section
    pub secret_key_field: String,
    /// Variable names used when rendering a profile
    pub env_names: EnvVarNames,
}

impl CredentialsConfig {
    /// Configuration for an explicit credentials file with default field names
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            access_key_field: ACCESS_KEY_FIELD.to_string(),
            secret_key_field: SECRET_KEY_FIELD.to_string(),
            env_names: EnvVarNames::default(),
        }
    }

    /// Configuration pointing at `~/.aws/credentials`
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::with_path(Self::default_path()?))
    }

    /// Resolve the credentials file location
    ///
    /// An explicit path (from a flag or `AWS_SHARED_CREDENTIALS_FILE`) has `~`
    /// and `$VAR` references expanded; otherwise the default location is used.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(raw) => Ok(Self::with_path(expand_path(raw))),
            None => Self::from_default_location(),
        }
    }

    /// Get the default credentials file path
    ///
    /// On all platforms this is `.aws/credentials` under the user's home directory.
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new().ok_or(CredentialsError::HomeDirUnavailable)?;
        Ok(base_dirs.home_dir().join(".aws").join("credentials"))
    }

    /// Override the section keys read by the loader
    pub fn with_fields(
        mut self,
        access_key_field: impl Into<String>,
        secret_key_field: impl Into<String>,
    ) -> Self {
        self.access_key_field = access_key_field.into();
        self.secret_key_field = secret_key_field.into();
        self
    }

    /// Override the variable names used when rendering
    pub fn with_env_names(mut self, env_names: EnvVarNames) -> Self {
        self.env_names = env_names;
        self
    }

    /// Path as a display string, used in error messages
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Expand a leading `~` and `$VAR` / `${VAR}` references in a user-supplied path
///
/// Unknown variables are left untouched rather than failing.
pub fn expand_path(raw: &str) -> PathBuf {
    let expanded = shellexpand::full_with_context_no_errors(
        raw,
        || BaseDirs::new().map(|dirs| dirs.home_dir().to_string_lossy().into_owned()),
        |var| std::env::var(var).ok(),
    );
    PathBuf::from(expanded.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn test_with_path_uses_default_fields() {
        let config = CredentialsConfig::with_path("/tmp/creds");
        assert_eq!(config.path(), Path::new("/tmp/creds"));
        assert_eq!(config.access_key_field, "aws_access_key_id");
        assert_eq!(config.secret_key_field, "aws_secret_access_key");
        assert_eq!(config.env_names, EnvVarNames::default());
    }

    #[test]
    fn test_default_path_ends_with_aws_credentials() {
        let path = CredentialsConfig::default_path().unwrap();
        assert!(path.ends_with(".aws/credentials"));
    }

    #[test]
    fn test_resolve_without_explicit_path_uses_default() {
        let config = CredentialsConfig::resolve(None).unwrap();
        assert_eq!(config.path, CredentialsConfig::default_path().unwrap());
    }

    #[test]
    fn test_expand_path_tilde() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(expand_path("~/creds"), home.join("creds"));
        assert_eq!(expand_path("~"), home);
    }

    #[test]
    fn test_resolve_expands_explicit_path() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        let config = CredentialsConfig::resolve(Some("~/.aws/other")).unwrap();
        assert_eq!(config.path, home.join(".aws").join("other"));
    }

    #[test]
    #[serial]
    fn test_expand_path_env_var() {
        unsafe {
            std::env::set_var("AWSENV_TEST_DIR", "/opt/secrets");
        }

        assert_eq!(
            expand_path("$AWSENV_TEST_DIR/credentials"),
            PathBuf::from("/opt/secrets/credentials")
        );
        assert_eq!(
            expand_path("${AWSENV_TEST_DIR}/other"),
            PathBuf::from("/opt/secrets/other")
        );

        unsafe {
            std::env::remove_var("AWSENV_TEST_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_expand_path_unknown_var_left_as_is() {
        unsafe {
            std::env::remove_var("AWSENV_TEST_UNSET");
        }
        assert_eq!(
            expand_path("/data/$AWSENV_TEST_UNSET/credentials"),
            PathBuf::from("/data/$AWSENV_TEST_UNSET/credentials")
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = CredentialsConfig::with_path("creds")
            .with_fields("key", "secret")
            .with_env_names(EnvVarNames {
                access_key_id: "KEY".to_string(),
                secret_access_key: "SECRET".to_string(),
            });
        assert_eq!(config.access_key_field, "key");
        assert_eq!(config.secret_key_field, "secret");
        assert_eq!(config.env_names.access_key_id, "KEY");
        assert_eq!(config.display_path(), "creds");
    }
}
