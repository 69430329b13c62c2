//! Administrative console commands.
//!
//! The console speaks a whitespace-tokenized line protocol. Each command
//! implements [`Command`] and is dispatched by name through the
//! [`Registry`]; handlers return reply lines and never touch the socket
//! themselves.

pub mod blacklist;
pub mod reload;
pub mod status;

pub use blacklist::{BlacklistCommand, BlacklistResult, Subcommand};

use crate::state::GateState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Reply lines written back to the console session. Empty means silence.
pub type Reply = Vec<String>;

/// Context passed to each command handler.
pub struct Context<'a> {
    /// Shared daemon state.
    pub state: &'a Arc<GateState>,
    /// The dispatching registry, for per-command counts in `status`.
    pub registry: &'a Arc<Registry>,
}

/// Trait implemented by all console commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Handle one tokenized invocation. `args[0]` is the command name.
    async fn handle(&self, ctx: &Context<'_>, args: &[&str]) -> Reply;
}

/// Registry of console commands.
pub struct Registry {
    commands: HashMap<&'static str, Box<dyn Command>>,
    /// Per-command dispatch counters, reported by `status`.
    dispatch_counts: HashMap<&'static str, AtomicU64>,
}

impl Registry {
    /// Create a registry with all commands registered.
    pub fn new() -> Self {
        let mut commands: HashMap<&'static str, Box<dyn Command>> = HashMap::new();
        commands.insert("blacklist", Box::new(BlacklistCommand));
        commands.insert("reload", Box::new(reload::ReloadCommand));
        commands.insert("status", Box::new(status::StatusCommand));

        let mut dispatch_counts = HashMap::new();
        for &name in commands.keys() {
            dispatch_counts.insert(name, AtomicU64::new(0));
        }

        Self {
            commands,
            dispatch_counts,
        }
    }

    /// Per-command dispatch counts, sorted by command name for stable
    /// output.
    pub fn command_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .dispatch_counts
            .iter()
            .map(|(name, count)| (*name, count.load(Ordering::Relaxed)))
            .collect();
        stats.sort_by_key(|(name, _)| *name);
        stats
    }

    /// Tokenize and dispatch one console line.
    ///
    /// Returns `None` for blank lines. Unknown commands get a rendered
    /// reply rather than an error; only the recognized ones are counted.
    pub async fn dispatch(&self, ctx: &Context<'_>, line: &str) -> Option<Reply> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let first = tokens.first()?;
        let name = first.to_ascii_lowercase();

        match self.commands.get(name.as_str()) {
            Some(command) => {
                if let Some(count) = self.dispatch_counts.get(name.as_str()) {
                    count.fetch_add(1, Ordering::Relaxed);
                }
                Some(command.handle(ctx, &tokens).await)
            }
            None => {
                let reply = ctx.state.messages.read().unknown_command_reply(first);
                Some(vec![reply])
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
