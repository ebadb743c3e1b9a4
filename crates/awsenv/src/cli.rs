//! CLI structure and argument definitions

use clap::{ArgAction, Parser};

/// Extract AWS credentials for a given profile as environment variables.
#[derive(Parser, Debug)]
#[command(name = "aws-env")]
#[command(
    version,
    about = "Extract AWS credentials for a given profile as environment variables."
)]
#[command(long_about = "
Extract AWS credentials for a given profile as environment variables.

Reads ~/.aws/credentials (or the file named by --credentials-file /
AWS_SHARED_CREDENTIALS_FILE) and prints AWS_ACCESS_KEY_ID and
AWS_SECRET_ACCESS_KEY assignments for the chosen profile.

EXAMPLES:
    # Switch the current shell to the 'work' profile
    eval \"$(aws-env work)\"

    # Plain KEY=value lines, e.g. for a .env file
    aws-env --no-export work > .env

    # Show which profiles are available
    aws-env --ls
")]
pub struct Cli {
    /// The profile to extract credentials for
    #[arg(default_value = "default")]
    pub profile: String,

    /// Do not use export on the variables
    #[arg(long, short = 'n')]
    pub no_export: bool,

    /// List available profiles
    #[arg(long = "ls", short = 'l', visible_alias = "list")]
    pub list: bool,

    /// Path to an alternate credentials file
    #[arg(long, short = 'f', env = "AWS_SHARED_CREDENTIALS_FILE")]
    pub credentials_file: Option<String>,

    /// Enable verbose logging (repeat for more detail)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Whether assignments get the `export ` prefix
    pub fn export(&self) -> bool {
        !self.no_export
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["aws-env"]).unwrap();
        assert_eq!(cli.profile, "default");
        assert!(cli.export());
        assert!(!cli.list);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["aws-env", "-n", "-vv", "work"]).unwrap();
        assert_eq!(cli.profile, "work");
        assert!(!cli.export());
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_list_aliases() {
        for flag in ["-l", "--ls", "--list"] {
            let cli = Cli::try_parse_from(["aws-env", flag]).unwrap();
            assert!(cli.list, "{flag} should enable list mode");
        }
    }

    #[test]
    fn test_credentials_file_flag() {
        let cli = Cli::try_parse_from(["aws-env", "-f", "/tmp/creds", "work"]).unwrap();
        assert_eq!(cli.credentials_file.as_deref(), Some("/tmp/creds"));
    }

    #[test]
    fn test_extra_positional_rejected() {
        assert!(Cli::try_parse_from(["aws-env", "one", "two"]).is_err());
    }
}
