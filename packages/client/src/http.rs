//! Typed HTTP client over the marketplace REST API.
//!
//! One method per backend endpoint. Methods report success or a decoded
//! failure; applying the resulting lifecycle transition is the dispatcher's
//! job, never this layer's.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use mechlink_lifecycle::{Booking, BookingStatus, Quote, Request};

use crate::api::{
    AcceptBody, CancelBookingBody, CancelRequestBody, CompleteBody, ErrorBody, JobsPage, QuoteBody,
    RequestTab,
};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::Session;

/// Marketplace API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.header("Authorization", session.bearer())
    }

    /// Send a mutating call; any 2xx is success, everything else is decoded
    /// into a server error carrying the backend's own message when present.
    async fn post_action<B: Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let response = self
            .authed(self.http.post(self.url(path)), session)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(%status, path, "action confirmed");
            return Ok(());
        }
        Err(Self::server_error(response).await)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let response = self
            .authed(self.http.get(self.url(path)), session)
            .query(query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::server_error(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn server_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        tracing::warn!(status, %message, "server rejected action");
        ClientError::server(status, message)
    }

    // --- request actions ---

    pub async fn accept_request(
        &self,
        session: &Session,
        request_id: i64,
        mechanic_id: i64,
    ) -> ClientResult<()> {
        self.post_action(
            session,
            &format!("/api/requests/{request_id}/accept/"),
            &AcceptBody { mechanic_id },
        )
        .await
    }

    pub async fn decline_request(&self, session: &Session, request_id: i64) -> ClientResult<()> {
        self.post_action(
            session,
            &format!("/api/requests/{request_id}/decline/"),
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn quote_request(
        &self,
        session: &Session,
        request_id: i64,
        quote: &Quote,
    ) -> ClientResult<()> {
        self.post_action(
            session,
            &format!("/api/requests/{request_id}/quote/"),
            &QuoteBody {
                quoted_items: quote.items.clone(),
                providers_note: quote.note.clone(),
            },
        )
        .await
    }

    pub async fn cancel_request(
        &self,
        session: &Session,
        request_id: i64,
        reason: &str,
    ) -> ClientResult<()> {
        self.post_action(
            session,
            "/api/requests/cancel/",
            &CancelRequestBody {
                request_id,
                reason: reason.to_string(),
            },
        )
        .await
    }

    // --- booking actions ---

    pub async fn cancel_booking(
        &self,
        session: &Session,
        booking_id: i64,
        reason: &str,
    ) -> ClientResult<()> {
        self.post_action(
            session,
            "/api/bookings/cancel/",
            &CancelBookingBody {
                booking_id,
                reason: reason.to_string(),
                cancelled_by_id: session.user_id,
            },
        )
        .await
    }

    pub async fn complete_booking(&self, session: &Session, booking_id: i64) -> ClientResult<()> {
        self.post_action(session, "/api/bookings/complete/", &CompleteBody { booking_id })
            .await
    }

    // --- list queries ---

    pub async fn requests(
        &self,
        session: &Session,
        tab: RequestTab,
    ) -> ClientResult<JobsPage<Request>> {
        let path = format!("/api/requests/mechanic/{}/", tab.path_segment());
        self.get_json(session, &path, &[]).await
    }

    pub async fn bookings(
        &self,
        session: &Session,
        status: BookingStatus,
    ) -> ClientResult<JobsPage<Booking>> {
        self.get_json(
            session,
            "/api/bookings/mechanic/",
            &[("status", status.as_str())],
        )
        .await
    }
}
