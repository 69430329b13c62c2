//! Administrative console listener.
//!
//! A plain-text, line-oriented command surface bound to a trusted (by
//! default loopback) address. Each session reads whitespace-tokenized
//! lines, dispatches them through the command registry, and writes the
//! reply lines back. Commands that produce no reply produce no output at
//! all.

use crate::command::{Context, Registry};
use crate::state::GateState;
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::{Framed, LinesCodec};
use tracing::{debug, error, info, instrument, warn};

/// Maximum accepted console line length in bytes. Longer lines end the
/// session with a codec error.
const MAX_LINE_LENGTH: usize = 512;

/// The Console accepts administrative sessions and dispatches commands.
pub struct Console {
    listener: TcpListener,
    state: Arc<GateState>,
    registry: Arc<Registry>,
}

impl Console {
    /// Bind the console listener.
    pub async fn bind(
        addr: SocketAddr,
        state: Arc<GateState>,
        registry: Arc<Registry>,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "Console listener bound");
        Ok(Self {
            listener,
            state,
            registry,
        })
    }

    /// Run the console, accepting sessions forever.
    #[instrument(skip(self), name = "console")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    info!(%addr, "Console session opened");

                    let state = Arc::clone(&self.state);
                    let registry = Arc::clone(&self.registry);
                    tokio::spawn(async move {
                        if let Err(e) = session(stream, addr, state, registry).await {
                            warn!(%addr, error = %e, "Console session error");
                        }
                        info!(%addr, "Console session closed");
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept console session");
                }
            }
        }
    }
}

/// Drive one console session until the peer disconnects.
async fn session(
    stream: TcpStream,
    addr: SocketAddr,
    state: Arc<GateState>,
    registry: Arc<Registry>,
) -> anyhow::Result<()> {
    let mut framed = Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_LENGTH));

    while let Some(line) = framed.next().await {
        let line = line?;
        debug!(%addr, line = %line, "Console command");

        let ctx = Context {
            state: &state,
            registry: &registry,
        };
        let Some(reply) = registry.dispatch(&ctx, &line).await else {
            continue;
        };
        for text in reply {
            framed.send(text).await?;
        }
    }

    Ok(())
}
