use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::{handlers, system};

/// All application routes
///
/// `static_dir` holds the built frontend and answers every path the API
/// does not. Paths without a file get `index.html` with status 200, so
/// client-side routes survive a reload.
pub fn configure_routes(static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // DASHBOARDS (protected)
        // ========================================
        .route(
            "/api/d100/inventory_snapshot",
            get(handlers::d100_inventory::get_inventory_snapshot)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .fallback_service(spa_service(static_dir))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}

fn spa_service(static_dir: &str) -> ServeDir<ServeFile> {
    let index = Path::new(static_dir).join("index.html");
    ServeDir::new(static_dir).fallback(ServeFile::new(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn temp_dist(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("dist-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>erp shell</html>").unwrap();
        std::fs::write(dir.join("styles.css"), "body {}").unwrap();
        dir
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_client_routes_are_served_the_app_shell() {
        let dist = temp_dist("client-routes");
        let static_dir = dist.to_string_lossy().into_owned();

        for uri in ["/", "/home", "/inventory-dashboard", "/products/123", "/no-such-page"] {
            let (status, body) = get(configure_routes(&static_dir), uri).await;
            assert_eq!(status, StatusCode::OK, "GET {}", uri);
            assert!(body.contains("erp shell"), "GET {} -> {}", uri, body);
        }

        let _ = std::fs::remove_dir_all(dist);
    }

    #[tokio::test]
    async fn test_existing_assets_are_served_as_files() {
        let dist = temp_dist("assets");
        let static_dir = dist.to_string_lossy().into_owned();

        let (status, body) = get(configure_routes(&static_dir), "/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");

        let _ = std::fs::remove_dir_all(dist);
    }

    #[tokio::test]
    async fn test_api_routes_are_not_shadowed_by_the_shell() {
        let dist = temp_dist("api");
        let static_dir = dist.to_string_lossy().into_owned();

        let (status, body) = get(configure_routes(&static_dir), "/health").await;
        assert_eq!((status, body.as_str()), (StatusCode::OK, "ok"));

        let (status, _) = get(configure_routes(&static_dir), "/api/d100/inventory_snapshot").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let _ = std::fs::remove_dir_all(dist);
    }
}
