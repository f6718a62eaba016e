use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{ServiceExt, extract::Request};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tencowry_favorites::{
    app::build_app,
    config::{AppConfig, AppStatus},
    db::{create_pool, run_migrations},
    state::AppState,
    store::PgStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tencowry_favorites=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    if config.status == AppStatus::Production {
        tracing::info!("running in production mode");
    }

    let pool = match create_pool(&config).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "cannot reach the favorites database");
            return Err(err);
        }
    };
    run_migrations(&pool).await?;

    let state = AppState::new(Arc::new(PgStore::new(pool)), config.favorites.clone());
    tracing::info!(
        duplicate_scope = %config.favorites.duplicate_scope,
        default_user = %config.favorites.default_user_id,
        "favorites service configured"
    );

    let app = build_app(state);

    let addr = SocketAddr::from((
        config
            .host
            .parse::<std::net::IpAddr>()
            .with_context(|| format!("invalid APP_HOST `{}`", config.host))?,
        config.port,
    ));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
