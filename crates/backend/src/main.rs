pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use shared::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let site = config.site_config();
    let static_dir = config.static_dir();
    let addr = config.socket_addr()?;

    tracing::info!("CMS base URL: {}", site.cms_base_url);
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "index.html not found in {}, only the API will respond",
            static_dir.display()
        );
    }

    let app = routes::configure_routes(AppState::new(site), &static_dir);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
