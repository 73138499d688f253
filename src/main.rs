use anyhow::Context;
use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use url::Url;

use admin_bff::config;
use admin_bff::handlers;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up API_BASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    Url::parse(&config.upstream.base_url)
        .with_context(|| format!("invalid API_BASE_URL: {}", config.upstream.base_url))?;
    tracing::info!(
        "Starting admin BFF in {:?} mode, fronting {}",
        config.environment,
        config.upstream.base_url
    );

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("admin BFF listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(catalog_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router {
    use axum::routing::post;
    use handlers::{auth, profile};

    Router::new()
        .route("/auth/login", post(auth::login_post))
        .route(
            "/api/profile",
            get(profile::profile_get).put(profile::profile_put),
        )
}

fn admin_routes() -> Router {
    use axum::routing::put;
    use handlers::{dashboard, users};

    Router::new()
        .route("/api/dashboard", get(dashboard::dashboard_get))
        .route("/api/users", get(users::users_get))
        .route("/api/users/:id", get(users::user_get))
        .route("/api/users/:id/role", put(users::user_role_put))
        .route("/api/users/:id/status", put(users::user_status_put))
}

fn catalog_routes() -> Router {
    use handlers::activities;

    Router::new()
        .route("/api/activities", get(activities::activities_get))
        .route("/api/schedules", get(activities::schedules_get))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Admin BFF",
            "version": version,
            "description": "Backend-for-frontend gateway for the admin panel",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "login": "/auth/login (public - token acquisition)",
                "dashboard": "/api/dashboard (bearer token)",
                "users": "/api/users[/:id[/role|/status]] (bearer token)",
                "profile": "/api/profile (bearer token)",
                "activities": "/api/activities (bearer token)",
                "schedules": "/api/schedules (bearer token)",
            }
        }
    }))
}

/// Process liveness only; no upstream dependency.
async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now()
        }
    }))
}
