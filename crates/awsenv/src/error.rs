//! Error types for aws-env
//!
//! Every variant is fatal: it is printed as a diagnostic on stderr and the
//! process exits with status 1.

use awsenv_core::CredentialsError;
use colored::Colorize;
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: Profile staging does not exist in /home/me/.aws/credentials
///
///   tip: List available profiles: aws-env --ls
/// ```
pub struct CliDiagnostic {
    message: String,
    tips: Vec<String>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tips: Vec::new(),
        }
    }

    /// Add a tip line.
    pub fn tip(mut self, description: &str) -> Self {
        self.tips.push(description.to_string());
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        for description in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
        }
    }
}

/// Main error type for the aws-env application
#[derive(Error, Debug)]
pub enum AwsEnvError {
    #[error("Unable to load credentials file from {path}")]
    CredentialsFileMissing { path: String },

    #[error("Profile {name} does not exist in {path}")]
    ProfileNotFound { name: String, path: String },

    #[error("No profiles found in {path}")]
    NoProfiles { path: String },

    #[error("{0}")]
    Credentials(CredentialsError),

    #[error("Output error: {message}")]
    Output { message: String },
}

/// Result type for aws-env operations
pub type Result<T> = std::result::Result<T, AwsEnvError>;

impl AwsEnvError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            AwsEnvError::CredentialsFileMissing { .. } => vec![
                "Create the file with: aws configure".to_string(),
                "Use another file: aws-env --credentials-file <path>".to_string(),
            ],
            AwsEnvError::ProfileNotFound { .. } => vec![
                "List available profiles: aws-env --ls".to_string(),
                "Check profile name spelling (names are case-sensitive)".to_string(),
            ],
            AwsEnvError::NoProfiles { .. } => vec![
                "Each profile needs both aws_access_key_id and aws_secret_access_key".to_string(),
            ],
            AwsEnvError::Credentials(err @ CredentialsError::Parse { .. }) => vec![
                format!(
                    "Check {} for an unterminated [section] header or keys above the first header",
                    err.path().unwrap_or("the credentials file")
                ),
            ],
            AwsEnvError::Credentials(err @ CredentialsError::Read { .. }) => vec![format!(
                "Check that {} is readable by the current user",
                err.path().unwrap_or("the credentials file")
            )],
            AwsEnvError::Credentials(CredentialsError::HomeDirUnavailable) => vec![
                "Set HOME or pass --credentials-file <path>".to_string(),
            ],
            _ => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&self.to_string());

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion);
        }

        diag.print();
    }
}

impl From<CredentialsError> for AwsEnvError {
    fn from(err: CredentialsError) -> Self {
        match err {
            CredentialsError::NotFound { path } => AwsEnvError::CredentialsFileMissing { path },
            other => AwsEnvError::Credentials(other),
        }
    }
}

impl From<anyhow::Error> for AwsEnvError {
    fn from(err: anyhow::Error) -> Self {
        AwsEnvError::Output {
            message: format!("{:#}", err),
        }
    }
}
