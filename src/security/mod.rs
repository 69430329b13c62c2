//! Security module for gatewarden.
//!
//! Provides the two halves of connection filtering:
//! - **Address validation**: strict dotted-quad parsing plus the policy
//!   check that keeps loopback and unspecified addresses out of the
//!   registry
//! - **Blacklist**: the shared, lock-guarded entry set the gateway
//!   consults on every inbound connection

pub mod address;
pub mod blacklist;

// Re-export primary types for convenience
pub use address::AddressError;
pub use blacklist::Blacklist;
