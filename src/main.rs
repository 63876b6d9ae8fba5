use axum::{http::header, http::HeaderValue, http::Method, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod api;
mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;
mod services;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = crate::config::config();
    tracing::info!("Starting CookShare API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("COOKSHARE_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("CookShare API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        // Protected API (session required)
        .merge(post_routes())
        .merge(learning_plan_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn auth_routes() -> Router {
    use axum::routing::post;
    use handlers::public::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
}

fn post_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::protected::posts;

    Router::new()
        .route("/api/posts", post(posts::create))
        .route("/api/posts/byLoggedInUser", get(posts::by_logged_in_user))
        .route("/api/posts/public", get(posts::public_posts))
        .route("/api/posts/:id", put(posts::update).delete(posts::delete))
        .route("/api/posts/:id/visibility", put(posts::update_visibility))
        .route_layer(axum::middleware::from_fn(middleware::auth::jwt_auth_middleware))
}

fn learning_plan_routes() -> Router {
    use axum::routing::post;
    use handlers::protected::learning_plans;

    Router::new()
        .route(
            "/api/learningplans",
            post(learning_plans::create).get(learning_plans::list),
        )
        .route("/api/learningplans/:id", get(learning_plans::get))
        .route_layer(axum::middleware::from_fn(middleware::auth::jwt_auth_middleware))
}

/// CORS is restricted to the configured frontend origins; credentials are
/// allowed, so a wildcard origin is never used.
fn cors_layer() -> CorsLayer {
    let security = &config::config().security;
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "CookShare API",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "auth": "/api/auth/register, /api/auth/login (public)",
            "posts": "/api/posts, /api/posts/byLoggedInUser, /api/posts/public, /api/posts/:id[/visibility] (protected)",
            "learning_plans": "/api/learningplans[/:id] (protected)",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
