//! A single named credential pair

use std::fmt;

use crate::config::EnvVarNames;

/// One profile from the credentials file
///
/// Fields are fixed at construction; there are no setters.
#[derive(Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    key_id: String,
    secret_key: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        key_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key_id: key_id.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aws_access_key_id(&self) -> &str {
        &self.key_id
    }

    pub fn aws_secret_access_key(&self) -> &str {
        &self.secret_key
    }

    /// True when name, key id and secret are all non-empty
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.key_id.is_empty() && !self.secret_key.is_empty()
    }

    /// Render the profile as two shell assignments
    ///
    /// ```
    /// use awsenv_core::Profile;
    ///
    /// let profile = Profile::new("default", "AKIA123", "SECRET456");
    /// assert_eq!(
    ///     profile.format(true),
    ///     "export AWS_ACCESS_KEY_ID=AKIA123\nexport AWS_SECRET_ACCESS_KEY=SECRET456"
    /// );
    /// ```
    pub fn format(&self, export: bool) -> String {
        self.format_with(&EnvVarNames::default(), export)
    }

    /// Render with custom variable names
    ///
    /// Values are emitted verbatim, without quoting. No trailing newline.
    pub fn format_with(&self, names: &EnvVarNames, export: bool) -> String {
        let prefix = if export { "export " } else { "" };
        format!(
            "{prefix}{}={}\n{prefix}{}={}",
            names.access_key_id, self.key_id, names.secret_access_key, self.secret_key
        )
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("key_id", &self.key_id)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
