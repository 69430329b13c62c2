//! Shared IP blacklist consulted on every inbound connection.
//!
//! The entry set is guarded by a single `RwLock` owned by the registry, so
//! callers never synchronize externally: mutations take the write lock and
//! are strictly serialized, while the gateway's membership checks take the
//! read lock on the accept hot path. A reader observes either the pre- or
//! post-state of any mutation, never a partial one.

use parking_lot::RwLock;
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// Thread-safe registry of blacklisted IPv4 addresses.
///
/// Entries are validated upstream (see [`crate::security::address`]): the
/// set never contains loopback or unspecified addresses, and holds each
/// address at most once.
#[derive(Debug, Default)]
pub struct Blacklist {
    entries: RwLock<HashSet<Ipv4Addr>>,
}

impl Blacklist {
    /// Create an empty blacklist.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashSet::new()),
        }
    }

    /// Insert an address. Returns `false` (and changes nothing) if the
    /// address was already present.
    pub fn add(&self, addr: Ipv4Addr) -> bool {
        let added = self.entries.write().insert(addr);
        if added {
            debug!(ip = %addr, "Blacklist entry inserted");
        }
        added
    }

    /// Delete an address. Returns whether it was present.
    pub fn remove(&self, addr: Ipv4Addr) -> bool {
        let removed = self.entries.write().remove(&addr);
        if removed {
            debug!(ip = %addr, "Blacklist entry deleted");
        }
        removed
    }

    /// Empty the registry in one atomic step, returning how many entries
    /// were removed (zero if it was already empty).
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        if removed > 0 {
            debug!(removed, "Blacklist emptied");
        }
        removed
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Membership test. Safe to call at arbitrary frequency, concurrently
    /// with mutations.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.entries.read().contains(&addr)
    }

    /// Membership test for a peer address as seen by a listener.
    ///
    /// IPv4-mapped IPv6 peers (`::ffff:a.b.c.d`, the form dual-stack
    /// listeners report) are checked as their IPv4 form. Native IPv6 peers
    /// never match: the registry only holds IPv4 entries.
    pub fn contains_ip(&self, ip: &IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => self.contains(*v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped().is_some_and(|v4| self.contains(v4)),
        }
    }
}
