use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tourdesk_core::{
    application::{ports::time::Clock, services::ApplicationServices},
    config::AppConfig,
    domain::tour::TourRepository,
    infrastructure::{repositories::InMemoryTourRepository, seed, time::SystemClock},
    presentation::http::{error::ErrorResponder, routes::build_router_with_origins, state::HttpState},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let tour_repo: Arc<dyn TourRepository> = Arc::new(InMemoryTourRepository::new(clock));
    if config.seed_demo_tours() {
        seed::seed_demo_tours(tour_repo.as_ref()).await?;
    }

    let services = Arc::new(ApplicationServices::new(Arc::clone(&tour_repo)));
    let state = HttpState { services };
    let responder = ErrorResponder::new(config.message_exposure());
    tracing::info!(exposure = ?responder.exposure(), "error responder configured");

    let app = build_router_with_origins(state, responder, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
