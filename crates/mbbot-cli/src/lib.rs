use anyhow::{Result, anyhow};
use clap::{Args, ValueEnum};
use mbbot_client::ClientConfig;
use mbbot_client::config::DEFAULT_SERVER;
use std::time::Duration;

pub mod commands;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
        }
    }
}

/// Server and account settings, from flags or the environment
#[derive(Args, Clone, Debug)]
pub struct ConnectionArgs {
    /// Base URL of the MusicBrainz server
    #[arg(long, env = "MB_SERVER", global = true, default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Bot account name
    #[arg(long, env = "MB_USERNAME", global = true)]
    pub username: Option<String>,

    /// Bot account password
    #[arg(long, env = "MB_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Numeric editor id of the bot account (needed by edits-left)
    #[arg(long, env = "MB_EDITOR_ID", global = true)]
    pub editor_id: Option<u64>,

    /// Minimum pause between requests, in milliseconds
    #[arg(long, env = "MB_REQUEST_INTERVAL_MS", global = true, default_value_t = 1000)]
    pub interval_ms: u64,
}

impl ConnectionArgs {
    pub fn to_config(&self) -> Result<ClientConfig> {
        let username = non_empty(&self.username)
            .ok_or_else(|| anyhow!("No username given: pass --username or set MB_USERNAME"))?;
        let password = non_empty(&self.password)
            .ok_or_else(|| anyhow!("No password given: pass --password or set MB_PASSWORD"))?;

        let mut config = ClientConfig::new(username, password)
            .with_server(self.server.as_str())
            .with_request_interval(Duration::from_millis(self.interval_ms));
        if let Some(editor_id) = self.editor_id {
            config = config.with_editor_id(editor_id);
        }
        Ok(config)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Options shared by commands that enter a single edit
#[derive(Args, Clone, Debug)]
pub struct EditArgs {
    /// Edit note attached to the edit
    #[arg(short = 'm', long, default_value = "")]
    pub note: String,

    /// Enter as an auto-edit (needs auto-editor privileges)
    #[arg(long)]
    pub auto: bool,
}

/// Crates whose events reach the log
const LOG_TARGETS: [&str; 4] = ["mbbot", "mbbot_cli", "mbbot_client", "mbbot_core"];

/// `EnvFilter` directives for the workspace crates
pub fn log_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> ConnectionArgs {
        ConnectionArgs {
            server: "http://localhost:5000/".to_string(),
            username: Some("bot".to_string()),
            password: Some("secret".to_string()),
            editor_id: None,
            interval_ms: 250,
        }
    }

    #[test]
    fn test_to_config() {
        let config = connection().to_config().unwrap();
        assert_eq!(config.server, "http://localhost:5000");
        assert_eq!(config.username, "bot");
        assert_eq!(config.request_interval, Duration::from_millis(250));
        assert!(config.editor_id.is_none());
    }

    #[test]
    fn test_to_config_with_editor_id() {
        let args = ConnectionArgs {
            editor_id: Some(42),
            ..connection()
        };
        assert_eq!(args.to_config().unwrap().editor_id, Some(42));
    }

    #[test]
    fn test_blank_credentials_are_rejected() {
        let args = ConnectionArgs {
            username: Some(String::new()),
            ..connection()
        };
        let err = args.to_config().unwrap_err();
        assert!(err.to_string().contains("MB_USERNAME"));

        let args = ConnectionArgs {
            password: None,
            ..connection()
        };
        let err = args.to_config().unwrap_err();
        assert!(err.to_string().contains("MB_PASSWORD"));
    }

    #[test]
    fn test_log_directives_cover_every_crate() {
        assert_eq!(
            log_directives(false),
            "mbbot=info,mbbot_cli=info,mbbot_client=info,mbbot_core=info"
        );
        assert!(log_directives(true).contains("mbbot_core=debug"));
    }
}
