//! Runtime counters reported by the console `status` command.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Connection counters for the gateway.
///
/// All counters use relaxed ordering: they feed an operator-facing status
/// report, never a control decision.
#[derive(Debug)]
pub struct GateStats {
    started: Instant,
    accepted: AtomicU64,
    rejected: AtomicU64,
    active: AtomicU64,
}

impl GateStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            accepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            active: AtomicU64::new(0),
        }
    }

    /// Record a connection passed through to the upstream.
    pub fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
        self.active.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a connection rejected by the blacklist.
    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an accepted connection ending. Must be paired with a prior
    /// [`record_accepted`](Self::record_accepted).
    pub fn record_closed(&self) {
        self.active.fetch_sub(1, Ordering::Relaxed);
    }

    /// Point-in-time view of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            uptime: self.started.elapsed(),
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            active: self.active.load(Ordering::Relaxed),
        }
    }
}

impl Default for GateStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter values captured by [`GateStats::snapshot`].
#[derive(Debug, Clone, Copy)]
pub struct StatsSnapshot {
    pub uptime: Duration,
    pub accepted: u64,
    pub rejected: u64,
    pub active: u64,
}
