//! # awsenv-core
//!
//! Loads named AWS credential profiles from an INI credentials file and
//! renders them as shell environment assignments.
//!
//! ```no_run
//! use awsenv_core::{CredentialStore, CredentialsConfig};
//!
//! let config = CredentialsConfig::from_default_location()?;
//! let store = CredentialStore::load(&config)?;
//! if let Some(profile) = store.get("default") {
//!     println!("{}", profile.format(true));
//! }
//! # Ok::<(), awsenv_core::CredentialsError>(())
//! ```
//!
//! The file layout is the one used by the AWS CLI:
//!
//! ```text
//! [profile-name]
//! aws_access_key_id = <value>
//! aws_secret_access_key = <value>
//! ```

pub mod config;
pub mod credentials;
pub mod error;

pub use config::{CredentialsConfig, EnvVarNames, expand_path};
pub use credentials::{CredentialStore, Profile};
pub use error::{CredentialsError, Result};
