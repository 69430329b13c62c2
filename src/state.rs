//! Process-wide shared state.

use crate::config::Messages;
use crate::security::Blacklist;
use crate::stats::GateStats;
use parking_lot::RwLock;
use std::path::PathBuf;

/// State shared by the gateway, the console, and every command handler.
///
/// Always passed explicitly as `Arc<GateState>`; nothing in the crate
/// reaches for it through a global.
#[derive(Debug)]
pub struct GateState {
    /// Blacklist registry consulted on every inbound connection.
    pub blacklist: Blacklist,
    /// Console reply templates; replaced wholesale by `reload`.
    pub messages: RwLock<Messages>,
    /// Connection counters for `status`.
    pub stats: GateStats,
    /// Config file path, kept so `reload` can re-read it.
    pub config_path: PathBuf,
}

impl GateState {
    pub fn new(messages: Messages, config_path: PathBuf) -> Self {
        Self {
            blacklist: Blacklist::new(),
            messages: RwLock::new(messages),
            stats: GateStats::new(),
            config_path,
        }
    }
}
