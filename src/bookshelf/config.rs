//! # Configuration
//!
//! Server configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables, and compiled defaults.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Command-line flags**: `--host`, `--port` (see [`ServerConfig::with_overrides`]).
//! 2. **Environment variables**: `BOOKSHELF_HOST`, `BOOKSHELF_PORT`, `BOOKSHELF_LOG`,
//!    `BOOKSHELF_PERMISSIVE_CORS`.
//! 3. **Config file**: the `--config` path, or `bookshelf.toml` in the OS config
//!    directory (via the `directories` crate). A missing default file is fine.
//! 4. **Compiled defaults**: `#[config(default = ...)]` below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `host` | `127.0.0.1` | Interface the HTTP listener binds to |
//! | `port` | `9000` | TCP port of the HTTP listener |
//! | `log_filter` | `info` | `tracing` filter directive, `RUST_LOG` wins when set |
//! | `permissive_cors` | `true` | Allow cross-origin requests from any origin |

use crate::error::Result;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "bookshelf.toml";

/// Configuration for the bookshelf server, stored in `bookshelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface the HTTP listener binds to.
    #[config(default = "127.0.0.1", env = "BOOKSHELF_HOST")]
    pub host: String,

    /// TCP port of the HTTP listener.
    #[config(default = 9000, env = "BOOKSHELF_PORT")]
    pub port: u16,

    /// Log filter directive (e.g. "info", "bookshelf=debug,tower_http=info").
    /// The RUST_LOG environment variable takes precedence when set.
    #[config(default = "info", env = "BOOKSHELF_LOG")]
    pub log_filter: String,

    /// Allow cross-origin requests from any origin.
    #[config(default = true, env = "BOOKSHELF_PERMISSIVE_CORS")]
    pub permissive_cors: bool,
}

/// Mirrors the `#[config(default = ...)]` values above.
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
            log_filter: "info".to_string(),
            permissive_cors: true,
        }
    }
}

impl ServerConfig {
    /// Loads the layered configuration.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )
                .into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };

        let mut builder = Self::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// A commented TOML template listing every setting and its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

/// `bookshelf.toml` inside the platform config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "bookshelf", "bookshelf")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
