//! The `reload` console command.

use super::{Command, Context, Reply};
use crate::config::Config;
use async_trait::async_trait;
use tracing::{error, info};

/// Re-reads the configuration file and swaps in the new message templates.
///
/// Listener addresses are fixed at startup; only the reloadable parts of
/// the config take effect here. A file that fails to read or parse leaves
/// the running templates untouched.
pub struct ReloadCommand;

#[async_trait]
impl Command for ReloadCommand {
    async fn handle(&self, ctx: &Context<'_>, _args: &[&str]) -> Reply {
        let path = &ctx.state.config_path;

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Reload failed to read config");
                return vec![format!("Reload failed: {e}")];
            }
        };

        match Config::from_toml(&content) {
            Ok(config) => {
                *ctx.state.messages.write() = config.messages;
                info!(path = %path.display(), "Configuration reloaded");
                vec!["Successfully reloaded.".to_string()]
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Reload failed to parse config");
                vec![format!("Reload failed: {e}")]
            }
        }
    }
}
