//! Link intake service: validates requests and relays them to the backing service.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{LinkCreateRequest, UpstreamResponse};
use crate::domain::repositories::LinkBackend;
use crate::domain::validation::validate;
use crate::error::{AppError, UpstreamError};
use crate::utils::code_generator::generate_code;

/// Result of forwarding a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The backend answered with a 2xx status.
    Deleted,
    /// The backend answered with any other status; relayed to the caller.
    Rejected(UpstreamResponse),
}

/// Service for validating and forwarding link operations.
///
/// Holds no mutable state. Every operation fetches fresh data from the
/// backend and nothing is cached between requests.
pub struct LinkService<B: LinkBackend> {
    backend: Arc<B>,
}

impl<B: LinkBackend> LinkService<B> {
    /// Creates a new link service.
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Lists all links, relaying the backend response verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the backend cannot be reached.
    pub async fn list_links(&self) -> Result<UpstreamResponse, AppError> {
        Ok(self.backend.list_links().await?)
    }

    /// Validates a creation payload and forwards it to the backend.
    ///
    /// The payload is forwarded as received, including any extra fields. The
    /// backend response is relayed unchanged, so a duplicate short code comes
    /// back with the backend's own conflict status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidBody`] if the payload is not a JSON object.
    /// Returns [`AppError::Validation`] with the first violated rule.
    /// Returns [`AppError::Upstream`] if the backend cannot be reached.
    pub async fn create_link(&self, payload: Value) -> Result<UpstreamResponse, AppError> {
        let object = payload.as_object().ok_or(AppError::InvalidBody)?;
        let request = LinkCreateRequest::from_json(object);

        if let Err(e) = validate(&request) {
            tracing::debug!(short_code = %request.short_code, reason = %e, "Rejected link creation");
            return Err(e.into());
        }

        let response = self.backend.create_link(&payload).await?;

        if response.is_success() {
            tracing::info!(short_code = %request.short_code, "Link created");
        }

        Ok(response)
    }

    /// Forwards a delete request for `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the backend cannot be reached.
    pub async fn delete_link(&self, short_code: &str) -> Result<DeleteOutcome, AppError> {
        let response = self.backend.delete_link(short_code).await?;

        if response.is_success() {
            tracing::info!(short_code, "Link deleted");
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::Rejected(response))
        }
    }

    /// Generates a candidate short code. No backend call, no uniqueness check.
    pub fn generate_code(&self) -> String {
        generate_code()
    }

    /// Probes the backend health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the backend cannot be reached.
    pub async fn backend_health(&self) -> Result<UpstreamResponse, UpstreamError> {
        self.backend.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkBackend;
    use crate::domain::validation::{RequiredField, ValidationError};
    use axum::http::StatusCode;
    use serde_json::json;

    fn service(mock: MockLinkBackend) -> LinkService<MockLinkBackend> {
        LinkService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_list_links_relays_backend_response() {
        let mut mock_backend = MockLinkBackend::new();
        mock_backend
            .expect_list_links()
            .times(1)
            .returning(|| Ok(UpstreamResponse::json(StatusCode::OK, "[]")));

        let result = service(mock_backend).list_links().await.unwrap();

        assert_eq!(result.status, StatusCode::OK);
        assert_eq!(&result.body[..], b"[]");
    }

    #[tokio::test]
    async fn test_list_links_upstream_failure() {
        let mut mock_backend = MockLinkBackend::new();
        mock_backend
            .expect_list_links()
            .times(1)
            .returning(|| Err(UpstreamError::Unreachable("connection refused".to_string())));

        let err = service(mock_backend).list_links().await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(UpstreamError::Unreachable(_))));
    }

    #[tokio::test]
    async fn test_create_link_forwards_payload() {
        let mut mock_backend = MockLinkBackend::new();
        mock_backend
            .expect_create_link()
            .withf(|payload| {
                payload["short_code"] == "demo"
                    && payload["long_url"] == "https://example.com"
                    && payload["note"] == "kept"
            })
            .times(1)
            .returning(|_| {
                Ok(UpstreamResponse::json(
                    StatusCode::CREATED,
                    r#"{"short_code":"demo"}"#,
                ))
            });

        let result = service(mock_backend)
            .create_link(json!({
                "short_code": "demo",
                "long_url": "https://example.com",
                "note": "kept"
            }))
            .await
            .unwrap();

        assert_eq!(result.status, StatusCode::CREATED);
        assert_eq!(&result.body[..], br#"{"short_code":"demo"}"#);
    }

    #[tokio::test]
    async fn test_create_link_validation_failure_skips_backend() {
        let mut mock_backend = MockLinkBackend::new();
        mock_backend.expect_create_link().times(0);

        let err = service(mock_backend)
            .create_link(json!({ "short_code": "a!b", "long_url": "https://x.com" }))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidShortCode)
        ));
    }

    #[tokio::test]
    async fn test_create_link_missing_fields_in_order() {
        let service = service(MockLinkBackend::new());

        let err = service.create_link(json!({})).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingField(RequiredField::ShortCode))
        ));

        let err = service
            .create_link(json!({ "short_code": "demo" }))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingField(RequiredField::LongUrl))
        ));
    }

    #[tokio::test]
    async fn test_create_link_rejects_non_object_payload() {
        let service = service(MockLinkBackend::new());

        let err = service
            .create_link(json!(["demo", "https://example.com"]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidBody));
    }

    #[tokio::test]
    async fn test_create_link_relays_conflict() {
        let mut mock_backend = MockLinkBackend::new();
        mock_backend.expect_create_link().times(1).returning(|_| {
            Ok(UpstreamResponse::new(
                StatusCode::CONFLICT,
                Some("text/plain; charset=utf-8".to_string()),
                "Short code already exists or database error\n",
            ))
        });

        let result = service(mock_backend)
            .create_link(json!({ "short_code": "demo", "long_url": "https://example.com" }))
            .await
            .unwrap();

        assert_eq!(result.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_delete_link_success() {
        let mut mock_backend = MockLinkBackend::new();
        mock_backend
            .expect_delete_link()
            .withf(|code| code == "demo")
            .times(1)
            .returning(|_| Ok(UpstreamResponse::new(StatusCode::NO_CONTENT, None, "")));

        let outcome = service(mock_backend).delete_link("demo").await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
    }

    #[tokio::test]
    async fn test_delete_link_rejected() {
        let mut mock_backend = MockLinkBackend::new();
        mock_backend.expect_delete_link().times(1).returning(|_| {
            Ok(UpstreamResponse::json(
                StatusCode::NOT_FOUND,
                r#"{"error":"not found"}"#,
            ))
        });

        let outcome = service(mock_backend).delete_link("missing").await.unwrap();

        match outcome {
            DeleteOutcome::Rejected(response) => {
                assert_eq!(response.status, StatusCode::NOT_FOUND)
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_link_timeout() {
        let mut mock_backend = MockLinkBackend::new();
        mock_backend
            .expect_delete_link()
            .times(1)
            .returning(|_| Err(UpstreamError::Timeout));

        let err = service(mock_backend).delete_link("demo").await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(UpstreamError::Timeout)));
    }

    #[test]
    fn test_generate_code_makes_no_backend_call() {
        let code = service(MockLinkBackend::new()).generate_code();
        assert_eq!(code.len(), 6);
    }
}
