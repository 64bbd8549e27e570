use dotenvy::dotenv;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod handlers {
    pub mod waitlist_handlers;
}
mod models {
    pub mod waitlist_models;
}
mod repositories {
    pub mod waitlist_repository;
}
mod schema;

use config::Config;
use db::establish_pool;
use handlers::waitlist_handlers;
use repositories::waitlist_repository::WaitlistRepository;

const POOL_SIZE: u32 = 8;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    waitlist_repository: Arc<WaitlistRepository>,
}

pub fn app(state: Arc<AppState>, frontend_dist: Option<&str>) -> Router {
    let api = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/join-waitlist", post(waitlist_handlers::join_waitlist))
        .with_state(state);

    // Unknown paths get index.html so client-side routes still load
    let router = match frontend_dist {
        Some(dir) => {
            let index = Path::new(dir).join("index.html");
            api.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => api,
    };

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // dev frontend runs on its own port
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Set up database connection pool
    let pool = establish_pool(&config.database_url, POOL_SIZE)?;
    let state = Arc::new(AppState {
        waitlist_repository: Arc::new(WaitlistRepository::new(pool)),
    });

    if let Some(dir) = &config.frontend_dist {
        tracing::info!("Serving frontend from {}", dir);
    }
    let app = app(state, config.frontend_dist.as_deref());

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.server_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;
    tracing::info!("Listening on {}", config.server_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbPool;
    use crate::schema::waitlist;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use diesel::prelude::*;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app(frontend_dist: Option<&str>) -> (Router, DbPool) {
        let pool = establish_pool(":memory:", 1).unwrap();
        let state = Arc::new(AppState {
            waitlist_repository: Arc::new(WaitlistRepository::new(pool.clone())),
        });
        (app(state, frontend_dist), pool)
    }

    fn join_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/join-waitlist")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn stored_emails(pool: &DbPool) -> Vec<String> {
        waitlist::table
            .select(waitlist::email)
            .load(&mut pool.get().unwrap())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (app, _pool) = test_app(None);

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn join_stores_normalized_email() {
        let (app, pool) = test_app(None);

        let response = app
            .oneshot(join_request(r#"{"email": " A@B.com "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Joined the waitlist");
        assert_eq!(stored_emails(&pool), vec!["a@b.com".to_string()]);
    }

    #[tokio::test]
    async fn joining_twice_succeeds_without_duplicates() {
        let (app, pool) = test_app(None);

        for body in [r#"{"email": "a@b.com"}"#, r#"{"email": "A@b.com"}"#] {
            let response = app.clone().oneshot(join_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(stored_emails(&pool).len(), 1);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let (app, pool) = test_app(None);

        let response = app
            .oneshot(join_request(r#"{"email": "not-an-email"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
        assert!(stored_emails(&pool).is_empty());
    }

    #[tokio::test]
    async fn malformed_bodies_are_failures() {
        let (app, pool) = test_app(None);

        let missing_field = app.clone().oneshot(join_request(r#"{"mail": "a@b.com"}"#)).await.unwrap();
        assert!(missing_field.status().is_client_error());

        let not_json = app.clone().oneshot(join_request("a@b.com")).await.unwrap();
        assert!(not_json.status().is_client_error());

        let no_content_type = app
            .oneshot(
                Request::post("/api/join-waitlist")
                    .body(Body::from(r#"{"email": "a@b.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(no_content_type.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        assert!(stored_emails(&pool).is_empty());
    }

    #[tokio::test]
    async fn cors_preflight_allows_json_posts() {
        let (app, _pool) = test_app(None);

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/join-waitlist")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn serves_frontend_with_index_fallback() {
        let dist = std::env::temp_dir().join(format!("peerai-dist-{}", std::process::id()));
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html>landing</html>").unwrap();
        let (app, _pool) = test_app(dist.to_str());

        for uri in ["/", "/some/client/route"] {
            let response = app
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(&bytes[..], b"<html>landing</html>");
        }

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        std::fs::remove_dir_all(&dist).ok();
    }
}
