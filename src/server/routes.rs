use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Html,
};
use serde::Serialize;
use serde_json::Value;

use crate::document::Document;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type RouteResult = Result<Json<Value>, (StatusCode, Json<ErrorResponse>)>;

fn internal_error(e: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

const LANDING_PAGE: &str = r#"<!doctype html>
<html>
<head><title>Onboardly</title></head>
<body>
<h1>Onboardly</h1>
<p>Employee onboarding record keeper.</p>
<ul>
<li><code>GET /api/employees</code></li>
<li><code>POST /api/employees</code></li>
<li><code>GET /api/feedback</code></li>
<li><code>POST /api/feedback</code></li>
</ul>
</body>
</html>
"#;

pub async fn index(State(_state): State<Arc<AppState>>) -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn list_employees(State(state): State<Arc<AppState>>) -> RouteResult {
    let doc = Document::load(&state.data_path);
    Ok(Json(Value::Array(doc.employees)))
}

pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(employee): Json<Value>,
) -> RouteResult {
    let mut doc = Document::load(&state.data_path);
    let stored = doc.push_employee(employee);
    doc.save(&state.data_path).map_err(internal_error)?;
    Ok(Json(stored))
}

pub async fn list_feedback(State(state): State<Arc<AppState>>) -> RouteResult {
    let doc = Document::load(&state.data_path);
    Ok(Json(Value::Array(doc.feedback)))
}

pub async fn create_feedback(
    State(state): State<Arc<AppState>>,
    Json(feedback): Json<Value>,
) -> RouteResult {
    let mut doc = Document::load(&state.data_path);
    let stored = doc.push_feedback(feedback);
    doc.save(&state.data_path).map_err(internal_error)?;
    Ok(Json(stored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(dir: &tempfile::TempDir) -> Arc<AppState> {
        Arc::new(AppState {
            data_path: dir.path().join("data.json"),
        })
    }

    #[tokio::test]
    async fn test_post_then_get_employee() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);

        let created = create_employee(State(state.clone()), Json(json!({"name": "Ann"})))
            .await
            .unwrap();
        assert_eq!(created.0, json!({"name": "Ann", "id": 1}));

        let listed = list_employees(State(state)).await.unwrap();
        assert_eq!(listed.0, json!([{"name": "Ann", "id": 1}]));
    }

    #[tokio::test]
    async fn test_employee_ids_increment_with_count() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);

        for expected in 1..=3 {
            let created = create_employee(State(state.clone()), Json(json!({"name": "x"})))
                .await
                .unwrap();
            assert_eq!(created.0["id"], expected);
        }
    }

    #[tokio::test]
    async fn test_feedback_echoed_unvalidated() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir);

        let body = json!({"employee_id": 99, "rating": 42, "comments": "loud"});
        let created = create_feedback(State(state.clone()), Json(body.clone()))
            .await
            .unwrap();
        assert_eq!(created.0, body);

        let listed = list_feedback(State(state)).await.unwrap();
        assert_eq!(listed.0, json!([body]));
    }

    #[tokio::test]
    async fn test_get_on_missing_file_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let listed = list_employees(State(state(&dir))).await.unwrap();
        assert_eq!(listed.0, json!([]));
    }
}
