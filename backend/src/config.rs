//! Server settings read from the environment.
//!
//! | variable                | default     |
//! |-------------------------|-------------|
//! | `CAMPAIGN_HOST`         | `127.0.0.1` |
//! | `CAMPAIGN_PORT`         | `8080`      |
//! | `CAMPAIGN_OPEN_BROWSER` | `true`      |

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Open the default browser on the app once the server is up.
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_open_browser() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open_browser: default_open_browser(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_builder(
            Config::builder().add_source(Environment::with_prefix("CAMPAIGN").try_parsing(true)),
        )
    }

    /// Builds and deserializes the given sources. Anything that fails to
    /// build or deserialize is logged and the defaults are used instead.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Self {
        match builder.build().and_then(|config| config.try_deserialize()) {
            Ok(config) => config,
            Err(err) => {
                warn!("Invalid server configuration ({}), using defaults", err);
                Self::default()
            }
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
