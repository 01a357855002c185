//! Operational routes: liveness, readiness against the registry schema, build identity.

use crate::db::{ADDRESSES_TABLE, CUSTOMERS_TABLE};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::{Connection, PgPool};

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

#[derive(Serialize)]
struct PoolStats {
    size: u32,
    idle: usize,
}

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    schema: &'static str,
    pool: PoolStats,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
}

/// Result of a readiness check, before it becomes a response.
enum Check {
    Ready,
    SchemaMissing(&'static str),
    Unreachable,
}

async fn check_registry(pool: &PgPool) -> Check {
    let mut conn = match pool.acquire().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!(error = %e, "readiness: no connection");
            return Check::Unreachable;
        }
    };
    if let Err(e) = conn.ping().await {
        tracing::warn!(error = %e, "readiness: ping failed");
        return Check::Unreachable;
    }
    for table in [ADDRESSES_TABLE, CUSTOMERS_TABLE] {
        let present: Result<bool, _> = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
            .bind(table)
            .fetch_one(&mut *conn)
            .await;
        match present {
            Ok(true) => {}
            Ok(false) => return Check::SchemaMissing(table),
            Err(e) => {
                tracing::warn!(error = %e, table, "readiness: schema lookup failed");
                return Check::Unreachable;
            }
        }
    }
    Check::Ready
}

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let check = check_registry(&state.pool).await;
    let pool = PoolStats {
        size: state.pool.size(),
        idle: state.pool.num_idle(),
    };
    let (status, body) = match check {
        Check::Ready => (
            StatusCode::OK,
            Readiness { status: "ok", database: "ok", schema: "ok", pool },
        ),
        Check::SchemaMissing(table) => {
            tracing::warn!(table, "readiness: registry table missing");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Readiness { status: "degraded", database: "ok", schema: "missing", pool },
            )
        }
        Check::Unreachable => (
            StatusCode::SERVICE_UNAVAILABLE,
            Readiness { status: "degraded", database: "unavailable", schema: "unknown", pool },
        ),
    };
    (status, Json(body))
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
    })
}

/// GET /health, GET /ready (connection, ping and registry tables), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
