//! Request and response models for the marketplace backend.

use mechlink_lifecycle::QuoteItem;
use serde::{Deserialize, Serialize};

/// Body for `POST /api/requests/{id}/accept/`.
#[derive(Debug, Serialize)]
pub struct AcceptBody {
    pub mechanic_id: i64,
}

/// Body for `POST /api/requests/{id}/quote/`.
#[derive(Debug, Serialize)]
pub struct QuoteBody {
    pub quoted_items: Vec<QuoteItem>,
    pub providers_note: Option<String>,
}

/// Body for `POST /api/requests/cancel/`.
#[derive(Debug, Serialize)]
pub struct CancelRequestBody {
    pub request_id: i64,
    pub reason: String,
}

/// Body for `POST /api/bookings/cancel/`.
#[derive(Debug, Serialize)]
pub struct CancelBookingBody {
    pub booking_id: i64,
    pub reason: String,
    pub cancelled_by_id: i64,
}

/// Body for `POST /api/bookings/complete/`.
#[derive(Debug, Serialize)]
pub struct CompleteBody {
    pub booking_id: i64,
}

/// List response shape shared by the request and booking queries.
#[derive(Debug, Deserialize)]
pub struct JobsPage<T> {
    pub jobs: Vec<T>,
    pub total: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request-list tabs exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTab {
    Pending,
    Available,
    Quoted,
}

impl RequestTab {
    /// Path segment of `GET /api/requests/mechanic/{tab}/`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            RequestTab::Pending => "pending",
            RequestTab::Available => "available",
            RequestTab::Quoted => "quoted",
        }
    }
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The server's own wording, when it sent any.
    pub fn into_message(self) -> Option<String> {
        let non_blank = |m: Option<String>| m.filter(|m| !m.trim().is_empty());
        non_blank(self.error).or_else(|| non_blank(self.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechlink_lifecycle::Request;

    #[test]
    fn test_jobs_page_decodes_with_optional_message() {
        let page: JobsPage<Request> =
            serde_json::from_str(r#"{"jobs": [], "total": 0}"#).unwrap();
        assert_eq!(page.total, 0);
        assert!(page.jobs.is_empty());
        assert!(page.message.is_none());

        let page: JobsPage<Request> =
            serde_json::from_str(r#"{"jobs": [], "total": 0, "message": "No jobs yet"}"#).unwrap();
        assert_eq!(page.message.as_deref(), Some("No jobs yet"));
    }

    #[test]
    fn test_error_body_prefers_error_field() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "not found", "message": "ignored"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("not found"));

        let body: ErrorBody = serde_json::from_str(r#"{"message": "fallback"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("fallback"));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "  "}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }

    #[test]
    fn test_quote_body_serializes_wire_field_names() {
        let body = QuoteBody {
            quoted_items: vec![QuoteItem {
                item: "Labor".to_string(),
                price: 500.0,
            }],
            providers_note: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["quoted_items"][0]["item"], "Labor");
        assert_eq!(json["quoted_items"][0]["price"], 500.0);
        assert!(json["providers_note"].is_null());
    }
}
