//! Flags that apply to every command

use crate::cli::{Cli, OutputFormat};

/// The flag and environment layer of the settings.
///
/// A flag beats its `JOURNAL_*` variable, which beats the config file.
/// The config file is only consulted in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.journal/config.yaml)
    pub config: Option<String>,

    /// Backend host override
    pub api_host: Option<String>,

    /// Access token for this invocation only, never persisted
    pub token: Option<String>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
            token: cli.token.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
