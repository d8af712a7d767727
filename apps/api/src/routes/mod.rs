pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::generation::handlers as generation;
use crate::state::AppState;
use crate::store::handlers as store;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session data
        .route(
            "/api/v1/profile",
            get(store::handle_get_profile).patch(store::handle_patch_profile),
        )
        .route(
            "/api/v1/inputs",
            get(store::handle_get_inputs).patch(store::handle_patch_inputs),
        )
        // Generation
        .route("/api/v1/status", get(generation::handle_status))
        .route("/api/v1/generate/:kind", post(generation::handle_generate))
        // Artifacts
        .route("/api/v1/artifacts", get(store::handle_list_artifacts))
        .route("/api/v1/artifacts/:kind", get(store::handle_get_artifact))
        .route(
            "/api/v1/artifacts/:kind/pdf",
            get(export::handle_download_pdf),
        )
        .route(
            "/api/v1/artifacts/:kind/export",
            post(export::handle_export),
        )
        .route(
            "/api/v1/portfolio/preview",
            get(store::handle_portfolio_preview),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::generation::orchestrator::tests::ScriptedClient;
    use crate::state::tests::test_state;

    fn router(client: Arc<ScriptedClient>) -> Router {
        build_router(test_state(client, std::path::Path::new("unused")))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn patch_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(Arc::new(ScriptedClient::replying("unused")));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["generation"]["state"], "idle");
    }

    #[tokio::test]
    async fn test_generate_resume_end_to_end() {
        let client = Arc::new(ScriptedClient::replying("Ada Lovelace\nAnalyst"));
        let app = router(client.clone());

        let response = app
            .clone()
            .oneshot(patch_json(
                "/api/v1/profile",
                r#"{"name":"Ada","raw_experience":"Wrote the first program"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(post_empty("/api/v1/generate/resume"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["kind"], "resume");
        assert_eq!(body["content"], "Ada Lovelace\nAnalyst");
        assert!(client.last_prompt().unwrap().contains("Wrote the first program"));

        let response = app
            .oneshot(
                Request::get("/api/v1/artifacts/resume/pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    }

    #[tokio::test]
    async fn test_generate_without_required_field_is_bad_request() {
        let client = Arc::new(ScriptedClient::replying("unused"));
        let app = router(client.clone());

        let response = app
            .oneshot(post_empty("/api/v1/generate/cover-letter"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_kind_is_rejected() {
        let app = router(Arc::new(ScriptedClient::replying("unused")));
        let response = app
            .oneshot(post_empty("/api/v1/generate/memoir"))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_portfolio_preview_is_sandboxed() {
        let client = Arc::new(ScriptedClient::replying("```html\n<html>OK</html>\n```"));
        let app = router(client);

        app.clone()
            .oneshot(patch_json("/api/v1/profile", r#"{"name":"Ada"}"#))
            .await
            .unwrap();
        let response = app
            .clone()
            .oneshot(post_empty("/api/v1/generate/portfolio"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::get("/api/v1/portfolio/preview")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_SECURITY_POLICY],
            "sandbox allow-scripts"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<html>OK</html>");
    }
}
