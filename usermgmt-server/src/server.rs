// File: usermgmt-server/src/server.rs

//! Builds the axum router over the controllers and runs it until ctrl-c.

use std::time::Duration;

use axum::{response::Redirect, routing::get, Router};
use axum_server::{Handle, Server};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use usermgmt_core::Error;

use crate::context::ServerContext;
use crate::controllers::{self, AppState};

/// Grace period given to in-flight requests on shutdown.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

pub fn build_router(ctx: &ServerContext) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/users") }))
        .merge(controllers::users::routes())
        .merge(controllers::logs::routes())
        .with_state(AppState::new(ctx))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

pub async fn run_server(ctx: ServerContext) -> Result<(), Error> {
    let addr = ctx.config.addr;
    let app = build_router(&ctx);

    let handle = Handle::new();
    let handle_clone = handle.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        info!("Shutdown requested, draining connections.");
        handle_clone.graceful_shutdown(Some(SHUTDOWN_GRACE));
    });

    info!("usermgmt listening on http://{}", addr);
    Server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    info!("HTTP server shut down.");
    Ok(())
}
