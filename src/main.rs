use anyhow::Result;
use recipe_hub_core::{
    application::{
        ports::{error_sink::ErrorSink, time::Clock},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::user::UserRepository,
    infrastructure::{
        logging::{TracingErrorSink, init_tracing},
        repositories::InMemoryUserRepository,
        time::SystemClock,
    },
    presentation::http::{routes::build_router_with_body_limit, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;

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

    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let error_sink: Arc<dyn ErrorSink> = Arc::new(TracingErrorSink);

    let services = Arc::new(ApplicationServices::new(user_repo, clock, error_sink));

    let state = HttpState {
        services,
        max_validation_depth: config.max_validation_depth(),
    };

    let app = build_router_with_body_limit(state, config.max_body_bytes());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
