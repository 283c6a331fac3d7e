use crate::cmd::load_snapshot;
use crate::modules::handlers::{category::category, liveness, pie::pie, readiness};
use anyhow::Result;
use atcoder_progress_libs::DataSnapshot;
use axum::{extract::Extension, routing, Router, Server};
use clap::Args;
use std::{ffi::OsString, net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;

#[derive(Debug, Args)]
pub struct ServerArgs {
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    data_dir: Option<OsString>,
}

pub async fn run(args: ServerArgs) -> Result<()> {
    let snapshot = load_snapshot(args.data_dir).await?;
    let app = create_router(snapshot);

    let port = match args.port {
        Some(port) => port,
        None => {
            tracing::warn!("API server will be launched at default port number 8000");
            8000u16
        }
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server start at port {}", port);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("server stopped unexpectedly: {:?}", e);
            anyhow::anyhow!(e)
        })?;

    Ok(())
}

pub fn create_router(snapshot: DataSnapshot) -> Router {
    Router::new()
        .route("/api/category", routing::get(category))
        .route("/api/pie", routing::get(pie))
        .route("/api/liveness", routing::get(liveness))
        .route("/api/readiness", routing::get(readiness))
        .layer(Extension(Arc::new(snapshot)))
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler.");
    };

    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("SIGINT signal received, starting graceful shutdown.");
}
