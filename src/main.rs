use mimalloc::MiMalloc;
use student_registry::{Config, RegistryState, provision::provision, registry_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        listen = %cfg.server.listen,
        database = %cfg.database.file_path().display(),
        export_assets = cfg.provision.export_assets,
        loglevel = %cfg.loglevel
    );

    let storage = provision(&cfg).await?;

    let state = RegistryState::new(storage);
    let app = registry_router(state);

    let listener = TcpListener::bind(cfg.server.listen).await?;
    info!("HTTP server listening on {}", cfg.server.listen);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
