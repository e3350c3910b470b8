use anyhow::Context;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use prometheus::{Encoder, TextEncoder};
use routes::{answers_router, questions_router, ApiResponse};
use serde::Serialize;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;

pub const WELCOME_MESSAGE: &str = "Witaj w Merito Fiszki API!";

#[derive(FromRef, Clone)]
pub struct AppState {
    pool: SqlitePool,
}

#[derive(Serialize)]
struct Message {
    message: &'static str,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

pub fn build_router(pool: SqlitePool) -> Router {
    let state = AppState { pool };

    Router::new()
        .route("/", get(index))
        .route("/metrics", get(metrics))
        .route("/health", get(health).with_state(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(answers_router(state))
        .fallback(|| async {
            tracing::info!("Fallback");
            StatusCode::NOT_FOUND
        })
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(pool: SqlitePool, addr: &str) -> anyhow::Result<()> {
    let app = build_router(pool);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {error}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn index() -> Json<Message> {
    Json(Message {
        message: WELCOME_MESSAGE,
    })
}

async fn health(State(pool): State<SqlitePool>) -> ApiResponse<Json<Health>> {
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(ApiError::StoreUnavailable)?;
    Ok(Json(Health { status: "ok" }))
}

async fn metrics() -> ApiResponse<Response> {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    encoder.encode(&metrics, &mut buf)?;
    Ok((
        [(header::CONTENT_TYPE, encoder.format_type().to_owned())],
        buf,
    )
        .into_response())
}
