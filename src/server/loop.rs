// Accept loop
// Accepts connections until a shutdown signal arrives, then drops the
// listener so the socket is released before the process exits.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until `shutdown` fires.
///
/// Accept errors are logged and the loop continues; only the shutdown
/// signal ends it. The listener is dropped on return.
///
/// The `Notified` future is created once and kept pinned across loop
/// iterations: `notify_waiters` does not store a permit, so a wakeup
/// arriving while a connection is being accepted would otherwise be
/// lost.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    let notified = shutdown.notified();
    tokio::pin!(notified);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut notified => {
                drop(listener);
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
