//! Action dispatcher: the one path through which a surface mutates a record.
//!
//! Uniform contract for every action:
//! 1. run the local transition guard; a guard failure sends nothing;
//! 2. mark the record in flight; a second mutation against the same record
//!    is refused until the first resolves;
//! 3. send the backend call with the session credential attached;
//! 4. apply the transition to the local record only after a confirmed 2xx.
//!
//! Local copies of a status are a cache. Nothing here advances state
//! optimistically; list surfaces refetch rather than trust stale records.

use std::collections::HashSet;
use std::sync::Mutex;

use chrono::Utc;

use mechlink_lifecycle::{transitions, Booking, BookingStatus, Quote, QuoteDraft, Request};

use crate::api::{JobsPage, RequestTab};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::session::{Session, SessionStore};

/// Identity of a record with a mutation awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RecordKey {
    Request(i64),
    Booking(i64),
}

pub struct Dispatcher {
    api: ApiClient,
    session: Session,
    in_flight: Mutex<HashSet<RecordKey>>,
}

impl Dispatcher {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self {
            api,
            session,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Build a dispatcher from config and the persisted session. A missing
    /// session surfaces as an authentication error before any call is made.
    pub async fn connect(config: &ClientConfig, store: &SessionStore) -> ClientResult<Self> {
        let session = store.require().await?;
        Ok(Self::new(ApiClient::new(config)?, session))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // --- request actions ---

    /// Accept a pending request. The backend creates the booking; locally the
    /// request only moves to `accepted` once the backend confirms.
    pub async fn accept_request(&self, request: &mut Request) -> ClientResult<()> {
        let next = transitions::accept_request(request)?;
        let _guard = self.begin(RecordKey::Request(request.id))?;
        self.api
            .accept_request(&self.session, request.id, self.session.user_id)
            .await?;
        request.status = next;
        Ok(())
    }

    pub async fn decline_request(&self, request: &mut Request) -> ClientResult<()> {
        let next = transitions::decline_request(request)?;
        let _guard = self.begin(RecordKey::Request(request.id))?;
        self.api.decline_request(&self.session, request.id).await?;
        request.status = next;
        Ok(())
    }

    /// Submit a quote drafted against a direct pending request. Returns the
    /// validated quote (with its derived total) for display.
    pub async fn quote_request(
        &self,
        request: &mut Request,
        draft: &QuoteDraft,
    ) -> ClientResult<Quote> {
        let (next, quote) = transitions::quote_request(request, draft)?;
        let _guard = self.begin(RecordKey::Request(request.id))?;
        self.api
            .quote_request(&self.session, request.id, &quote)
            .await?;
        request.status = next;
        Ok(quote)
    }

    pub async fn cancel_request(&self, request: &mut Request, reason: &str) -> ClientResult<()> {
        let next = transitions::cancel_request(request, reason)?;
        let _guard = self.begin(RecordKey::Request(request.id))?;
        self.api
            .cancel_request(&self.session, request.id, reason.trim())
            .await?;
        request.status = next;
        Ok(())
    }

    // --- booking actions ---

    pub async fn cancel_booking(&self, booking: &mut Booking, reason: &str) -> ClientResult<()> {
        let next = transitions::cancel_booking(booking, reason)?;
        let _guard = self.begin(RecordKey::Booking(booking.id))?;
        self.api
            .cancel_booking(&self.session, booking.id, reason.trim())
            .await?;
        booking.status = next;
        Ok(())
    }

    /// Complete a booking with payment. The amount and proof reference are
    /// validated locally; the backend receives only the completion call.
    pub async fn complete_booking(
        &self,
        booking: &mut Booking,
        amount: &str,
        proof: &str,
    ) -> ClientResult<()> {
        let next = transitions::complete_booking(booking, amount, proof)?;
        let _guard = self.begin(RecordKey::Booking(booking.id))?;
        self.api.complete_booking(&self.session, booking.id).await?;
        booking.status = next;
        booking.completed_at = Some(Utc::now());
        Ok(())
    }

    /// Confirm a follow-up job reschedule. Status-preserving: the backend
    /// contract defines no resulting state, only a notification side effect.
    pub async fn reschedule_backjob(&self, booking: &Booking) -> ClientResult<()> {
        transitions::reschedule_backjob(booking)?;
        tracing::info!(booking_id = booking.id, "backjob reschedule confirmed");
        Ok(())
    }

    // --- list queries ---

    pub async fn requests(&self, tab: RequestTab) -> ClientResult<JobsPage<Request>> {
        self.api.requests(&self.session, tab).await
    }

    pub async fn bookings(&self, status: BookingStatus) -> ClientResult<JobsPage<Booking>> {
        self.api.bookings(&self.session, status).await
    }

    fn begin(&self, key: RecordKey) -> ClientResult<InFlightGuard<'_>> {
        let mut keys = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !keys.insert(key) {
            return Err(ClientError::InFlight);
        }
        Ok(InFlightGuard {
            keys: &self.in_flight,
            key,
        })
    }
}

/// Releases the in-flight slot on every outcome, success or failure.
struct InFlightGuard<'a> {
    keys: &'a Mutex<HashSet<RecordKey>>,
    key: RecordKey,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}
