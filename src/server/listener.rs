use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::Connection;
use crate::sensor::Accelerometer;
use crate::server::AppState;

/// Binds the listen address and serves until the process ends.
/// A bind failure is fatal and propagates.
pub async fn run<A>(addr: &str, state: Arc<AppState<A>>) -> anyhow::Result<()>
where
    A: Accelerometer + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    serve(listener, state).await
}

/// Accept loop: one spawned task per connection, no connection limit.
pub async fn serve<A>(listener: TcpListener, state: Arc<AppState<A>>) -> anyhow::Result<()>
where
    A: Accelerometer + Send + 'static,
{
    loop {
        let (socket, peer) = listener.accept().await?;
        tracing::debug!("accepted connection from {peer}");

        let state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = Connection::new(socket, state).run().await {
                tracing::warn!("connection error from {peer}: {e}");
            }
        });
    }
}
