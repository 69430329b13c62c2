//! Configuration loading and management.

use crate::command::blacklist::BlacklistResult;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Daemon configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Public listener the gateway filters.
    pub listen: ListenConfig,
    /// Upstream service accepted connections are relayed to.
    pub upstream: UpstreamConfig,
    /// Administrative console listener.
    #[serde(default)]
    pub console: ConsoleConfig,
    /// Reply templates for console commands.
    #[serde(default)]
    pub messages: Messages,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

/// Public listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind to (e.g., "0.0.0.0:6000").
    pub address: SocketAddr,
}

/// Upstream relay target.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Address accepted connections are relayed to (e.g., "127.0.0.1:6001").
    pub address: SocketAddr,
}

/// Administrative console configuration.
///
/// The console is unauthenticated; keep it on a loopback or otherwise
/// trusted address.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Address to bind the console to.
    pub address: SocketAddr,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([127, 0, 0, 1], 7070)),
        }
    }
}

/// Reply templates for console commands.
///
/// Placeholders (`%ip%`, `%removed%`, `%amount%`, `%usage%`, `%arg%`,
/// `%command%`) are substituted at render time. Omitted keys fall back to
/// the built-in defaults, and `reload` swaps the whole set at runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub usage: String,
    pub invalid_address: String,
    pub illegal_address: String,
    pub added: String,
    pub duplicate: String,
    pub removed: String,
    pub not_found: String,
    pub cleared: String,
    pub empty: String,
    pub size: String,
    pub unknown_subcommand: String,
    pub unknown_command: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            usage: "Usage: %usage%".into(),
            invalid_address: "Invalid IP address.".into(),
            illegal_address: "This IP address cannot be blacklisted.".into(),
            added: "Successfully added %ip% to the blacklist.".into(),
            duplicate: "%ip% is already blacklisted.".into(),
            removed: "Successfully removed %ip% from the blacklist.".into(),
            not_found: "%ip% is not blacklisted.".into(),
            cleared: "Successfully removed %removed% entries from the blacklist.".into(),
            empty: "The blacklist is currently empty.".into(),
            size: "The blacklist currently contains %amount% entries.".into(),
            unknown_subcommand: "Unknown subcommand %arg%.".into(),
            unknown_command: "Unknown command %command%.".into(),
        }
    }
}

impl Messages {
    /// Render one structured blacklist outcome into a reply line.
    pub fn blacklist_reply(&self, result: &BlacklistResult) -> String {
        match result {
            BlacklistResult::Added(ip) => self.added.replace("%ip%", &ip.to_string()),
            BlacklistResult::Duplicate(ip) => self.duplicate.replace("%ip%", &ip.to_string()),
            BlacklistResult::Removed(ip) => self.removed.replace("%ip%", &ip.to_string()),
            BlacklistResult::NotFound(ip) => self.not_found.replace("%ip%", &ip.to_string()),
            BlacklistResult::Cleared { removed } => {
                self.cleared.replace("%removed%", &removed.to_string())
            }
            BlacklistResult::AlreadyEmpty => self.empty.clone(),
            BlacklistResult::Size { entries } => self.size.replace("%amount%", &entries.to_string()),
            BlacklistResult::Usage { usage } => self.usage.replace("%usage%", usage),
            BlacklistResult::Malformed(raw) => self.invalid_address.replace("%ip%", raw),
            BlacklistResult::Forbidden(ip) => self.illegal_address.replace("%ip%", &ip.to_string()),
            BlacklistResult::UnknownSubcommand(arg) => {
                self.unknown_subcommand.replace("%arg%", arg)
            }
        }
    }

    /// Render the console-level unknown-command reply.
    pub fn unknown_command_reply(&self, name: &str) -> String {
        self.unknown_command.replace("%command%", name)
    }
}
