//! Gateway - the filtering TCP listener.
//!
//! The Gateway binds the public socket, rejects blacklisted peers before
//! any other work, and spawns a relay task per accepted connection that
//! pipes bytes to and from the upstream service.

use crate::state::GateState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, instrument, warn};

/// The Gateway accepts inbound connections and relays them upstream.
pub struct Gateway {
    listener: TcpListener,
    upstream: SocketAddr,
    state: Arc<GateState>,
}

impl Gateway {
    /// Bind the public listener.
    pub async fn bind(
        addr: SocketAddr,
        upstream: SocketAddr,
        state: Arc<GateState>,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, %upstream, "Gateway listener bound");
        Ok(Self {
            listener,
            upstream,
            state,
        })
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    // HOT PATH: blacklist check runs before any other work
                    // on the connection.
                    if self.state.blacklist.contains_ip(&addr.ip()) {
                        self.state.stats.record_rejected();
                        info!(%addr, "Connection rejected: blacklisted");
                        drop(stream);
                        continue;
                    }

                    self.state.stats.record_accepted();
                    debug!(%addr, "Connection accepted");

                    let upstream = self.upstream;
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        if let Err(e) = relay(stream, addr, upstream).await {
                            warn!(%addr, error = %e, "Relay ended with error");
                        }
                        state.stats.record_closed();
                        debug!(%addr, "Connection closed");
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}

/// Pipe bytes between the client and a fresh upstream connection until
/// either side closes.
async fn relay(
    mut client: TcpStream,
    addr: SocketAddr,
    upstream: SocketAddr,
) -> anyhow::Result<()> {
    let mut upstream = TcpStream::connect(upstream).await?;
    let (to_upstream, to_client) = tokio::io::copy_bidirectional(&mut client, &mut upstream).await?;
    debug!(%addr, to_upstream, to_client, "Relay finished");
    Ok(())
}
