//! Credentials file loading and profile lookup

pub mod profile;
pub mod store;

pub use profile::Profile;
pub use store::CredentialStore;
