//! Test server management.
//!
//! Spawns and manages gatewarden instances for integration testing.

use std::path::PathBuf;
use std::process::{Child, Command};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

/// Render a complete config file for a test instance.
///
/// `extra` is appended verbatim, so tests can tack on a `[messages]`
/// section or other overrides.
#[allow(dead_code)]
pub fn config_toml(gate_port: u16, console_port: u16, upstream: &str, extra: &str) -> String {
    format!(
        r#"
[listen]
address = "127.0.0.1:{gate_port}"

[upstream]
address = "{upstream}"

[console]
address = "127.0.0.1:{console_port}"

{extra}
"#
    )
}

/// A test server instance.
pub struct TestServer {
    child: Child,
    gate_port: u16,
    console_port: u16,
    // Keeps the generated config alive until the server is dropped.
    _data_dir: Option<TempDir>,
}

impl TestServer {
    /// Spawn a gatewarden instance with a generated config.
    ///
    /// `upstream` is where accepted connections are relayed; console-only
    /// tests can point it at any unused address.
    pub async fn spawn(gate_port: u16, console_port: u16, upstream: &str) -> anyhow::Result<Self> {
        let data_dir = tempfile::tempdir()?;
        let config_path = data_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            config_toml(gate_port, console_port, upstream, ""),
        )?;

        Self::launch(gate_port, console_port, config_path, Some(data_dir)).await
    }

    /// Spawn with a config file owned by the caller.
    /// Used for reload testing where the test rewrites the file on disk.
    #[allow(dead_code)]
    pub async fn spawn_with_config(
        gate_port: u16,
        console_port: u16,
        config_path: PathBuf,
    ) -> anyhow::Result<Self> {
        if !config_path.exists() {
            anyhow::bail!("Config file not found: {:?}", config_path);
        }
        Self::launch(gate_port, console_port, config_path, None).await
    }

    async fn launch(
        gate_port: u16,
        console_port: u16,
        config_path: PathBuf,
        data_dir: Option<TempDir>,
    ) -> anyhow::Result<Self> {
        let child = Command::new(env!("CARGO_BIN_EXE_gatewarden"))
            .arg(&config_path)
            .spawn()?;

        let server = Self {
            child,
            gate_port,
            console_port,
            _data_dir: data_dir,
        };

        // Wait for server to start listening
        server.wait_until_ready().await?;

        Ok(server)
    }

    /// Wait until the console is accepting connections.
    async fn wait_until_ready(&self) -> anyhow::Result<()> {
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.console_port))
                .await
                .is_ok()
            {
                return Ok(());
            }
            sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("Server failed to start within 5 seconds")
    }

    /// Public gateway address.
    #[allow(dead_code)]
    pub fn gate_address(&self) -> String {
        format!("127.0.0.1:{}", self.gate_port)
    }

    /// Console address.
    pub fn console_address(&self) -> String {
        format!("127.0.0.1:{}", self.console_port)
    }

    /// Open a console session.
    pub async fn console(&self) -> anyhow::Result<super::client::TestClient> {
        super::client::TestClient::connect(&self.console_address()).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Kill the server process
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
