//! Axum application setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/config", get(handlers::get_config))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);
    println!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use mixsight::AnalyzerConfig;
    use tower::ServiceExt;

    const REQUEST: &str = r#"{
        "dataset_name": "sales",
        "columns": [{
            "name": "revenue",
            "kind": "integer",
            "count": 100,
            "null_count": 0,
            "stats": {"type": "numeric", "min": 100, "max": 20000, "mean": 5000,
                      "median": 4800, "std_dev": 1200, "sum": 500000}
        }],
        "document": {
            "name": "review",
            "profile": {"themes": ["revenue growth"], "keywords": ["revenue"],
                        "sentiment": {"label": "positive", "polarity": 0.6}}
        }
    }"#;

    fn app() -> Router {
        create_router(AppState::new(AnalyzerConfig::default()))
    }

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_analyze(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_config_reports_policy() {
        let request = Request::builder()
            .uri("/api/config")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["correlation"]["min_samples"], 3);
        assert_eq!(body["narrative"]["top_insights"], 3);
    }

    #[tokio::test]
    async fn test_analyze_returns_result() {
        let (status, body) = send(post_analyze(REQUEST)).await;
        assert_eq!(status, StatusCode::OK);

        let correlations = body["correlations"].as_array().unwrap();
        assert_eq!(correlations.len(), 3);
        assert_eq!(correlations[0]["signal_kind"], "keyword");
        assert_eq!(correlations[0]["strength"], 1.0);
        assert!(body["narrative"].as_str().unwrap().starts_with("Analysis of dataset 'sales'"));
    }

    #[tokio::test]
    async fn test_analyze_invalid_profile_is_400() {
        let bad = REQUEST.replace("\"null_count\": 0", "\"null_count\": 500");
        let (status, body) = send(post_analyze(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
    }

    #[tokio::test]
    async fn test_analyze_malformed_json_is_400() {
        let (status, body) = send(post_analyze("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_input");
    }

    #[tokio::test]
    async fn test_analyze_empty_body_is_400() {
        let (status, body) = send(post_analyze(Body::empty())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::builder()
            .uri("/api/missing")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
