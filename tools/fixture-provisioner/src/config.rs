//! Command-line and environment configuration

use clap::Parser;
use std::ffi::OsString;
use std::fmt;

pub const DEFAULT_REGION: &str = "us-west-2";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_TABLE_NAME: &str = "RoomsTest";
pub const DEFAULT_ACCESS_KEY_ID: &str = "FAKE_KEY";
pub const DEFAULT_SECRET_ACCESS_KEY: &str = "FAKE_SECRET";

/// Environment variables read when the matching flag is absent.
pub const ENV_VARS: [&str; 5] = [
    "AWS_REGION",
    "DYNAMODB_ENDPOINT",
    "DYNAMODB_TABLE_NAME",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
];

#[derive(Parser, Clone)]
#[command(name = "create-local-table")]
#[command(about = "Create the DynamoDB table used by the hotel acceptance tests")]
#[command(version)]
pub struct Cli {
    /// AWS region of the DynamoDB service
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// DynamoDB endpoint, usually DynamoDB Local
    #[arg(long, env = "DYNAMODB_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Name of the table to create
    #[arg(long, env = "DYNAMODB_TABLE_NAME", default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    #[arg(
        long,
        env = "AWS_ACCESS_KEY_ID",
        default_value = DEFAULT_ACCESS_KEY_ID,
        hide_env_values = true
    )]
    pub access_key_id: String,

    #[arg(
        long,
        env = "AWS_SECRET_ACCESS_KEY",
        default_value = DEFAULT_SECRET_ACCESS_KEY,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub secret_access_key: String,

    /// Succeed when the table already exists
    #[arg(long)]
    pub if_not_exists: bool,

    /// Print the table request as JSON instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse `args` and the environment. Blank values count as unset.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map(Self::with_blank_values_defaulted)
    }

    fn with_blank_values_defaulted(mut self) -> Self {
        default_if_blank(&mut self.region, DEFAULT_REGION);
        default_if_blank(&mut self.endpoint, DEFAULT_ENDPOINT);
        default_if_blank(&mut self.table_name, DEFAULT_TABLE_NAME);
        default_if_blank(&mut self.access_key_id, DEFAULT_ACCESS_KEY_ID);
        default_if_blank(&mut self.secret_access_key, DEFAULT_SECRET_ACCESS_KEY);
        self
    }
}

fn default_if_blank(value: &mut String, default: &str) {
    if value.trim().is_empty() {
        *value = default.to_string();
    }
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("table_name", &self.table_name)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("if_not_exists", &self.if_not_exists)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "create-local-table",
            "--region",
            "eu-central-1",
            "--endpoint",
            "http://dynamodb:8000",
            "--table-name",
            "RoomsCI",
            "--if-not-exists",
        ])
        .unwrap();

        assert_eq!(cli.region, "eu-central-1");
        assert_eq!(cli.endpoint, "http://dynamodb:8000");
        assert_eq!(cli.table_name, "RoomsCI");
        assert!(cli.if_not_exists);
        assert!(!cli.dry_run);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cli = Cli::try_parse_args([
            "create-local-table",
            "--region",
            "",
            "--endpoint",
            " ",
            "--table-name",
            "",
            "--access-key-id",
            "",
            "--secret-access-key",
            "",
        ])
        .unwrap();

        assert_eq!(cli.region, DEFAULT_REGION);
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.table_name, DEFAULT_TABLE_NAME);
        assert_eq!(cli.access_key_id, DEFAULT_ACCESS_KEY_ID);
        assert_eq!(cli.secret_access_key, DEFAULT_SECRET_ACCESS_KEY);
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let cli = Cli::try_parse_from([
            "create-local-table",
            "--secret-access-key",
            "s3cr3t",
        ])
        .unwrap();

        let rendered = format!("{cli:?}");
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
