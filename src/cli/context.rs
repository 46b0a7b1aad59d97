//! Command execution context
//!
//! Loads the config, wires the session into the API client, and resolves the
//! output preferences every command needs.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::JournalClient;
use crate::client::rate_limit::RequestThrottle;
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::session::{ConfigTokenStore, MemoryTokenStore, Session, TokenStore};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    pub config: Config,
    /// File the config (and the persisted token) lives in
    pub config_path: PathBuf,
    /// API client (Arc-wrapped so page sources can share it)
    pub client: Arc<JournalClient>,
    pub format: OutputFormat,
    /// Default page size for list views
    pub page_size: usize,
}

impl CommandContext {
    /// Build the context from global options.
    ///
    /// A missing config file is not an error: everything falls back to
    /// defaults and the file is created on first sign-in.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_at(opts.config_ref())?;

        let store: Arc<dyn TokenStore> = match &opts.token {
            Some(token) => {
                debug!("Using access token from --token");
                Arc::new(MemoryTokenStore::new(Some(token.clone())))
            }
            None => Arc::new(ConfigTokenStore::new(config_path.clone())),
        };
        let session = Session::new(store);

        let host = config.api_host(opts.api_host_ref());
        debug!("Using API host {}", host);

        let client = JournalClient::new(host, session)?.with_throttle(RequestThrottle::new(
            config.preferences.requests_per_second,
        ));

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_config)
            })
            .unwrap_or_default();

        Ok(Self {
            page_size: config.preferences.page_size,
            config,
            config_path,
            client: Arc::new(client),
            format,
        })
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    /// Fail early for views that need a signed-in user.
    pub fn require_session(&self) -> Result<()> {
        if self.session().is_signed_in() {
            Ok(())
        } else {
            Err(ConfigError::MissingToken.into())
        }
    }
}
