pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::scoring::handlers as ats;
use crate::state::AppState;
use crate::store::handlers as resumes;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/score", post(ats::handle_score))
        .route(
            "/api/v1/ats/preliminary-score",
            post(ats::handle_preliminary_score),
        )
        .route("/api/v1/ats/analyze", post(ats::handle_analyze))
        // Assistant API
        .route("/api/v1/assistant/chat", post(ats::handle_chat))
        .route("/api/v1/assistant/suggestions", get(ats::handle_list_topics))
        .route(
            "/api/v1/assistant/suggestions/:topic",
            get(ats::handle_topic_suggestion),
        )
        // Resume API
        .route(
            "/api/v1/resumes",
            get(resumes::handle_list_resumes)
                .post(resumes::handle_create_resume)
                .delete(resumes::handle_clear_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume).put(resumes::handle_update_resume),
        )
        .route("/api/v1/resumes/:id/like", post(resumes::handle_toggle_like))
        .route(
            "/api/v1/resumes/:id/active",
            patch(resumes::handle_set_active),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::Config;
    use crate::scoring::analyzer::RuleBasedAnalyzer;
    use crate::store::blob::MemoryBlobStore;
    use crate::store::ResumeStore;

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(ResumeStore::new(Arc::new(MemoryBlobStore::new()), 2)),
            analyzer: Arc::new(RuleBasedAnalyzer::default()),
            config: Config::default(),
        })
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn new_resume(name: &str) -> Value {
        json!({
            "fullName": name,
            "jobTitle": "Software Engineer",
            "email": "someone@example.com",
            "skills": ["Rust", "SQL"]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["maxResumesPerUser"], 5);
    }

    #[tokio::test]
    async fn test_score_empty_draft() {
        let (status, body) =
            send(&app(), Method::POST, "/api/v1/ats/score", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["atsScore"], 0);
        assert_eq!(body["tier"], "needs_work");
    }

    #[tokio::test]
    async fn test_preliminary_score_empty_draft() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/ats/preliminary-score",
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["atsScore"], 60);
        assert_eq!(body["tier"], "fair");
    }

    #[tokio::test]
    async fn test_analyze_engineer() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/ats/analyze",
            Some(json!({ "jobTitle": "Software Engineer", "skills": [], "summary": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let keywords: Vec<&str> = body["keywordSuggestions"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(keywords.contains(&"API integration"));
        assert!(body["enhancedSummary"]
            .as_str()
            .unwrap()
            .starts_with("Experienced Software Engineer"));
    }

    #[tokio::test]
    async fn test_assistant_chat_returns_feed_filter() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/assistant/chat",
            Some(json!({ "message": "Show me React developers" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filter"], "React");
    }

    #[tokio::test]
    async fn test_assistant_chat_rejects_blank_message() {
        let (status, _) = send(
            &app(),
            Method::POST,
            "/api/v1/assistant/chat",
            Some(json!({ "message": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_assistant_topics() {
        let app = app();
        let (status, menu) = send(&app, Method::GET, "/api/v1/assistant/suggestions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(menu.as_array().unwrap().len(), 5);
        assert_eq!(menu[0]["topic"], "skills");

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/assistant/suggestions/certifications",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topic"], "certifications");
        assert!(body["suggestion"].as_str().unwrap().contains("AWS"));
    }

    #[tokio::test]
    async fn test_create_list_and_get() {
        let app = app();
        let user = Uuid::new_v4();

        let (status, created) = send(
            &app,
            Method::POST,
            &format!("/api/v1/resumes?user_id={user}"),
            Some(new_resume("Alex")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        // name 10 + email 5 + skills 4
        assert_eq!(created["atsScore"], 19);
        assert_eq!(created["isActive"], true);
        assert_eq!(created["likes"], 0);
        let id = created["id"].as_str().unwrap().to_string();

        let (status, listed) =
            send(&app, Method::GET, &format!("/api/v1/resumes?user_id={user}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, fetched) = send(
            &app,
            Method::GET,
            &format!("/api/v1/resumes/{id}?user_id={user}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["fullName"], "Alex");
    }

    #[tokio::test]
    async fn test_create_requires_email() {
        let (status, body) = send(
            &app(),
            Method::POST,
            &format!("/api/v1/resumes?user_id={}", Uuid::new_v4()),
            Some(json!({ "fullName": "Alex", "jobTitle": "Engineer" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_beyond_limit_is_rejected() {
        let app = app();
        let uri = format!("/api/v1/resumes?user_id={}", Uuid::new_v4());
        for name in ["A", "B"] {
            let (status, _) = send(&app, Method::POST, &uri, Some(new_resume(name))).await;
            assert_eq!(status, StatusCode::CREATED);
        }
        let (status, body) = send(&app, Method::POST, &uri, Some(new_resume("C"))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "RESUME_LIMIT_REACHED");
    }

    #[tokio::test]
    async fn test_create_with_existing_id_is_conflict() {
        let app = app();
        let uri = format!("/api/v1/resumes?user_id={}", Uuid::new_v4());
        let mut body = new_resume("Alex");
        body["id"] = json!("abc");
        let (status, _) = send(&app, Method::POST, &uri, Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, error) = send(&app, Method::POST, &uri, Some(body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(error["error"]["code"], "RESUME_EXISTS");

        let (_, listed) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_is_404() {
        let (status, body) = send(
            &app(),
            Method::GET,
            &format!("/api/v1/resumes/nope?user_id={}", Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_rescores() {
        let app = app();
        let user = Uuid::new_v4();
        let (_, created) = send(
            &app,
            Method::POST,
            &format!("/api/v1/resumes?user_id={user}"),
            Some(new_resume("Alex")),
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let mut updated_body = new_resume("Alex");
        updated_body["phone"] = json!("(555) 123-4567");
        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/resumes/{id}?user_id={user}"),
            Some(updated_body),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["atsScore"], 24);
        assert_eq!(updated["isActive"], true);
    }

    #[tokio::test]
    async fn test_update_unknown_is_404() {
        let (status, _) = send(
            &app(),
            Method::PUT,
            &format!("/api/v1/resumes/ghost?user_id={}", Uuid::new_v4()),
            Some(new_resume("Alex")),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_like_toggles() {
        let app = app();
        let user = Uuid::new_v4();
        let (_, created) = send(
            &app,
            Method::POST,
            &format!("/api/v1/resumes?user_id={user}"),
            Some(new_resume("Alex")),
        )
        .await;
        let uri = format!(
            "/api/v1/resumes/{}/like?user_id={user}",
            created["id"].as_str().unwrap()
        );

        let (status, liked) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(liked["success"], true);
        assert_eq!(liked["likes"], 1);
        assert_eq!(liked["isLiked"], true);

        let (_, unliked) = send(&app, Method::POST, &uri, None).await;
        assert_eq!(unliked["likes"], 0);
        assert_eq!(unliked["isLiked"], false);
    }

    #[tokio::test]
    async fn test_like_unknown_is_404() {
        let (status, _) = send(
            &app(),
            Method::POST,
            &format!("/api/v1/resumes/ghost/like?user_id={}", Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_activation_moves_home_feed() {
        let app = app();
        let user = Uuid::new_v4();
        let create_uri = format!("/api/v1/resumes?user_id={user}");
        let (_, first) = send(&app, Method::POST, &create_uri, Some(new_resume("First"))).await;
        let (_, second) = send(&app, Method::POST, &create_uri, Some(new_resume("Second"))).await;
        let second_id = second["id"].as_str().unwrap();

        let (status, activated) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/resumes/{second_id}/active?user_id={user}"),
            Some(json!({ "isActive": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(activated["isActive"], true);

        let (_, home) = send(
            &app,
            Method::GET,
            &format!("/api/v1/resumes?user_id={user}&tab=home"),
            None,
        )
        .await;
        let home = home.as_array().unwrap();
        assert_eq!(home.len(), 1);
        assert_eq!(home[0]["id"], second["id"]);

        let (_, first_now) = send(
            &app,
            Method::GET,
            &format!("/api/v1/resumes/{}?user_id={user}", first["id"].as_str().unwrap()),
            None,
        )
        .await;
        assert_eq!(first_now["isActive"], false);
    }

    #[tokio::test]
    async fn test_clear_empties_collection() {
        let app = app();
        let uri = format!("/api/v1/resumes?user_id={}", Uuid::new_v4());
        send(&app, Method::POST, &uri, Some(new_resume("Alex"))).await;

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, listed) = send(&app, Method::GET, &uri, None).await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_feed_search() {
        let app = app();
        let user = Uuid::new_v4();
        let create_uri = format!("/api/v1/resumes?user_id={user}");
        send(&app, Method::POST, &create_uri, Some(new_resume("Alex"))).await;
        send(&app, Method::POST, &create_uri, Some(new_resume("Sam"))).await;

        let (status, found) = send(
            &app,
            Method::GET,
            &format!("/api/v1/resumes?user_id={user}&q=sam"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let found = found.as_array().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["fullName"], "Sam");
    }
}
