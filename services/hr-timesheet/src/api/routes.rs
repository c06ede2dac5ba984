//! API 路由
//!
//! 显式路由表：方法 + 路径 + 处理器，校验在应用层完成

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use tally_adapter_postgres::check_connection;
use tally_errors::AppError;

use crate::api::dto::{EntryRequest, EntryResponse};
use crate::application::ServiceHandler;
use crate::domain::value_objects::EntryId;

/// 工时记录路由
pub fn timesheet_routes(handler: Arc<ServiceHandler>) -> Router {
    Router::new()
        .route("/api/timesheets", get(list_entries).post(create_entry))
        .route("/api/timesheets/{id}", put(update_entry).delete(delete_entry))
        .with_state(handler)
}

/// 运维路由（健康检查/就绪检查）
pub fn ops_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(pool)
}

async fn list_entries(
    State(handler): State<Arc<ServiceHandler>>,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let entries = handler.list_entries().await?;

    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

async fn create_entry(
    State(handler): State<Arc<ServiceHandler>>,
    Json(req): Json<EntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let saved = handler.create_entry(req.into()).await?;

    let id = saved
        .id
        .ok_or_else(|| AppError::internal("Storage did not assign an entry id"))?;
    let location = format!("/api/timesheets/{}", id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(EntryResponse::from(saved)),
    ))
}

async fn update_entry(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<i64>,
    Json(req): Json<EntryRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let updated = handler.update_entry(EntryId::from(id), req.into()).await?;

    Ok(Json(EntryResponse::from(updated)))
}

async fn delete_entry(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    handler.delete_entry(EntryId::from(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: Vec<ServiceCheck>,
}

#[derive(Debug, Serialize)]
pub struct ServiceCheck {
    pub name: String,
    pub healthy: bool,
}

async fn readiness_check(State(pool): State<PgPool>) -> impl IntoResponse {
    let postgres_healthy = check_connection(&pool).await.is_ok();

    let response = ReadinessResponse {
        ready: postgres_healthy,
        checks: vec![ServiceCheck {
            name: "postgres".to_string(),
            healthy: postgres_healthy,
        }],
    };

    let code = if response.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
