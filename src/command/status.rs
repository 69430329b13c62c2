//! The `status` console command.

use super::{Command, Context, Reply};
use async_trait::async_trait;

/// Reports uptime, connection counters, blacklist size, and per-command
/// dispatch counts.
pub struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    async fn handle(&self, ctx: &Context<'_>, _args: &[&str]) -> Reply {
        let stats = ctx.state.stats.snapshot();

        let counts = ctx
            .registry
            .command_stats()
            .into_iter()
            .map(|(name, count)| format!("{name}={count}"))
            .collect::<Vec<_>>()
            .join(" ");

        vec![
            format!("uptime: {}s", stats.uptime.as_secs()),
            format!(
                "connections: accepted={} active={} rejected={}",
                stats.accepted, stats.active, stats.rejected
            ),
            format!("blacklist: {} entries", ctx.state.blacklist.len()),
            format!("commands: {counts}"),
        ]
    }
}
