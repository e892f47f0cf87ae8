//! HTTP boundary: CSV upload endpoint and health probe.
//!
//! All errors are boundary errors; the scorer itself never fails. Error
//! bodies are `{"error": "..."}` with 400 for a missing/unselected upload
//! and 500 for decode or parse failures.

use axum::{
    extract::Multipart,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::batch::{self, BatchSummary};

/// Boundary error body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn internal_error(err: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// API routes, without the static/docs/CORS layers main adds on top.
pub fn router() -> Router {
    Router::new()
        .route("/analyze_sentiment", post(analyze_sentiment))
        .route("/health", get(health))
}

/// Analyze an uploaded CSV of comments.
///
/// Expects a multipart form with the CSV under the `file` field. Each row's
/// fields are joined into one comment; the response carries the three tallies
/// and the per-comment labels in row order.
#[utoipa::path(
    post,
    path = "/analyze_sentiment",
    tag = "sentiment",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "CSV file under the `file` form field, one comment per row"
    ),
    responses(
        (status = 200, description = "Batch scored", body = BatchSummary),
        (status = 400, description = "Missing or unselected file", body = ErrorResponse),
        (status = 500, description = "Decode or parse failure", body = ErrorResponse)
    )
)]
pub async fn analyze_sentiment(mut multipart: Multipart) -> Result<Json<BatchSummary>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(internal_error)? {
        // Form fields without a filename are not file parts.
        if field.name() != Some("file") || field.file_name().is_none() {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(internal_error)?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| bad_request("No file part"))?;
    if filename.is_empty() {
        return Err(bad_request("No selected file"));
    }

    let text = String::from_utf8(data.to_vec()).map_err(internal_error)?;
    let rows = batch::rows_from_csv(&text).map_err(internal_error)?;
    let summary = batch::summarize_rows(rows);

    tracing::info!(
        rows = summary.comments.len(),
        positive = summary.positive,
        negative = summary.negative,
        neutral = summary.neutral,
        "analyzed batch from {}",
        filename
    );

    Ok(Json(summary))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "sentiment",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const BOUNDARY: &str = "csv-test-boundary";

    fn multipart_request(field_name: &str, filename: Option<&str>, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let disposition = match filename {
            Some(name) => format!(
                "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{name}\"\r\n"
            ),
            None => format!("Content-Disposition: form-data; name=\"{field_name}\"\r\n"),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"Content-Type: text/csv\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/analyze_sentiment")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_csv_upload() {
        let request = multipart_request("file", Some("comments.csv"), b"great\nterrible\nokay\n");
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["positive"], 1);
        assert_eq!(body["negative"], 1);
        assert_eq!(body["neutral"], 1);

        let comments = body["comments"].as_array().unwrap();
        assert_eq!(comments.len(), 3);
        assert_eq!(comments[0]["comment"], "great");
        assert_eq!(comments[0]["sentiment"], "Positive");
        // The raw score is internal; it must not leak into the response.
        assert!(comments[0].get("score").is_none());
    }

    #[tokio::test]
    async fn test_empty_rows_excluded_from_response() {
        let request = multipart_request("file", Some("comments.csv"), b"great\n\n   \nterrible\n");
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["comments"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_part() {
        let request = multipart_request("attachment", Some("comments.csv"), b"great\n");
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "No file part");
    }

    #[tokio::test]
    async fn test_plain_form_field_is_not_a_file_part() {
        // A `file` field without a filename is a plain form value, not an
        // upload.
        let request = multipart_request("file", None, b"great\n");
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "No file part");
    }

    #[tokio::test]
    async fn test_no_selected_file() {
        let request = multipart_request("file", Some(""), b"");
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "No selected file");
    }

    #[tokio::test]
    async fn test_invalid_utf8_payload() {
        let request = multipart_request("file", Some("comments.csv"), &[0xff, 0xfe, 0x00, 0x80]);
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("utf-8"));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }
}
