//! hr-timesheet Service - 工时记录服务入口

use std::net::SocketAddr;
use std::sync::Arc;

use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use hr_timesheet::api;
use hr_timesheet::application::ServiceHandler;
use hr_timesheet::infrastructure::persistence::{migrations, PostgresTimesheetEntryRepository};
use tally_adapter_postgres::{create_pool, MigrationManager, PostgresConfig};
use tally_config::AppConfig;
use tally_errors::AppError;
use tally_telemetry::{init_tracing, init_tracing_json};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );

    // 创建数据库连接池
    let pg_config = PostgresConfig::new(config.database.url.expose_secret().as_str())
        .with_max_connections(config.database.max_connections);
    let pool = create_pool(&pg_config).await?;

    // 应用数据库迁移
    let result = MigrationManager::new(pool.clone())
        .migrate(&migrations())
        .await?;
    if !result.is_success() {
        return Err(AppError::database(format!(
            "Migrations failed: {:?}",
            result.errors
        ))
        .into());
    }

    // 组装 Repository 与 Handler
    let entry_repo = Arc::new(PostgresTimesheetEntryRepository::new(pool.clone()));
    let handler = Arc::new(ServiceHandler::new(entry_repo));

    // 构建路由（先创建带状态的路由，再合并运维路由）
    let app = api::timesheet_routes(handler)
        .merge(api::ops_routes(pool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!(%addr, "Starting hr-timesheet service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}

/// 等待关闭信号
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
