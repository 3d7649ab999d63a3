use tokio::net::TcpListener;
use tracing::info;
use crate::http::connection::Connection;
use crate::config::Config;

/// Binds the listening socket and accepts connections forever.
///
/// A bind failure is fatal and propagates out to `main`. Each accepted
/// socket gets its own task running one connection driver; connections
/// share nothing but the (immutable) document root path.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let root = cfg.root.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, root);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
