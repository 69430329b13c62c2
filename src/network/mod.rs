//! Network module.
//!
//! Contains the Gateway (filtering TCP listener) and the administrative
//! Console listener.

mod console;
mod gateway;

pub use console::Console;
pub use gateway::Gateway;
