//! Integration test common infrastructure.
//!
//! Provides utilities for spawning gatewarden instances and driving the
//! console line protocol.

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::TestServer;
