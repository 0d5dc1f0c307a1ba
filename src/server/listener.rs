use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Accept loop. One connection is handled to completion before the next
/// accept, so a snooze delay blocks the whole loop: callers get serialized,
/// deterministic timing, which is the point of this server.
///
/// The shutdown signal is only checked at the accept point. A connection
/// already being handled, including one mid-delay, always finishes; the
/// first signal just stops new accepts.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("snooze is listening on {}", addr);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!("stop signal received, shutting down");
                break;
            }

            accepted = listener.accept() => {
                match accepted {
                    Ok((socket, peer)) => {
                        debug!("accepted connection from {}", peer);
                        Connection::new(socket, cfg.default_message.clone())
                            .run()
                            .await;
                    }
                    Err(e) => {
                        error!("accept failed: {}", e);
                    }
                }
            }
        }
    }

    Ok(())
}
