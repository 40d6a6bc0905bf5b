// Server loop module
// Accepts connections until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` until `shutdown` completes, returning its output
///
/// Connections already being served keep running in their own tasks; only
/// accepting stops.
pub async fn start_server_loop<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> F::Output
where
    F: Future,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => handle_connection(stream, peer_addr, &state),
                    Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
                }
            }

            output = &mut shutdown => return output,
        }
    }
}
