//! Legal status transitions for requests and bookings.
//!
//! Every mutating surface checks these guards before any network call and
//! applies the returned status only after the backend confirms the action.
//! A guard failure means no request is sent and no local state changes.

use thiserror::Error;

use crate::quote::{Quote, QuoteDraft, QuoteError};
use crate::record::{Booking, Request};
use crate::status::{BookingStatus, RequestKind, RequestStatus};

/// Reasons a transition is refused before reaching the backend.
/// Messages are user-facing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError {
    #[error("This request is no longer pending")]
    RequestNotPending,
    #[error("Quotes can only be sent for direct requests")]
    QuoteNotDirect,
    #[error(transparent)]
    Quote(#[from] QuoteError),
    #[error("Please provide a reason")]
    EmptyReason,
    #[error("This booking is not in progress")]
    BookingNotActive,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please attach a proof of payment")]
    MissingProof,
    #[error("Only follow-up jobs can be rescheduled")]
    NotBackjob,
}

/// Accepting is legal only while the request is still pending.
pub fn accept_request(request: &Request) -> Result<RequestStatus, TransitionError> {
    require_pending(request)?;
    Ok(RequestStatus::Accepted)
}

/// Declining is legal only while the request is still pending.
pub fn decline_request(request: &Request) -> Result<RequestStatus, TransitionError> {
    require_pending(request)?;
    Ok(RequestStatus::Declined)
}

/// Quoting is legal only for pending direct requests and only with at least
/// one valid line item. Returns the validated quote alongside the new status.
pub fn quote_request(
    request: &Request,
    draft: &QuoteDraft,
) -> Result<(RequestStatus, Quote), TransitionError> {
    require_pending(request)?;
    if request.kind != RequestKind::Direct {
        return Err(TransitionError::QuoteNotDirect);
    }
    let quote = draft.validate()?;
    Ok((RequestStatus::Quoted, quote))
}

/// Cancelling a request requires a non-empty trimmed reason. Legal from any
/// non-terminal state.
pub fn cancel_request(request: &Request, reason: &str) -> Result<RequestStatus, TransitionError> {
    require_reason(reason)?;
    if request.status.is_terminal() || request.status == RequestStatus::Unknown {
        return Err(TransitionError::RequestNotPending);
    }
    Ok(RequestStatus::Cancelled)
}

/// Cancelling a booking requires a non-empty trimmed reason and an active
/// booking.
pub fn cancel_booking(booking: &Booking, reason: &str) -> Result<BookingStatus, TransitionError> {
    require_reason(reason)?;
    if booking.status != BookingStatus::Active {
        return Err(TransitionError::BookingNotActive);
    }
    Ok(BookingStatus::Cancelled)
}

/// Completion-with-payment requires a parseable non-zero amount and an
/// attached proof-of-payment reference.
pub fn complete_booking(
    booking: &Booking,
    amount: &str,
    proof: &str,
) -> Result<BookingStatus, TransitionError> {
    if booking.status != BookingStatus::Active {
        return Err(TransitionError::BookingNotActive);
    }
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| TransitionError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(TransitionError::InvalidAmount);
    }
    if proof.trim().is_empty() {
        return Err(TransitionError::MissingProof);
    }
    Ok(BookingStatus::Completed)
}

/// Rescheduling is only offered on follow-up jobs. The enumerated status does
/// not change; the backend contract for a resulting state is still open.
pub fn reschedule_backjob(booking: &Booking) -> Result<BookingStatus, TransitionError> {
    if booking.status != BookingStatus::Backjob {
        return Err(TransitionError::NotBackjob);
    }
    Ok(BookingStatus::Backjob)
}

fn require_pending(request: &Request) -> Result<(), TransitionError> {
    if request.status != RequestStatus::Pending {
        return Err(TransitionError::RequestNotPending);
    }
    Ok(())
}

fn require_reason(reason: &str) -> Result<(), TransitionError> {
    if reason.trim().is_empty() {
        return Err(TransitionError::EmptyReason);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::DraftRow;
    use crate::record::PartyRef;
    use chrono::Utc;

    fn request(status: RequestStatus, kind: RequestKind) -> Request {
        Request {
            id: 42,
            kind,
            status,
            client: PartyRef {
                id: 3,
                name: "Alma R.".to_string(),
            },
            summary: "Brakes grinding".to_string(),
            created_at: Utc::now(),
            target: None,
        }
    }

    fn booking(status: BookingStatus) -> Booking {
        Booking {
            id: 99,
            request_id: 42,
            status,
            fee: 1300.0,
            booked_at: Utc::now(),
            completed_at: None,
            client: PartyRef {
                id: 3,
                name: "Alma R.".to_string(),
            },
            provider: PartyRef {
                id: 9,
                name: "Eastside Auto".to_string(),
            },
            service: "Brake pad replacement".to_string(),
            location: None,
        }
    }

    #[test]
    fn test_accept_and_decline_require_pending() {
        let pending = request(RequestStatus::Pending, RequestKind::Custom);
        assert_eq!(accept_request(&pending), Ok(RequestStatus::Accepted));
        assert_eq!(decline_request(&pending), Ok(RequestStatus::Declined));

        for status in [
            RequestStatus::Quoted,
            RequestStatus::Accepted,
            RequestStatus::Declined,
            RequestStatus::Cancelled,
            RequestStatus::Unknown,
        ] {
            let req = request(status, RequestKind::Custom);
            assert_eq!(accept_request(&req), Err(TransitionError::RequestNotPending));
            assert_eq!(
                decline_request(&req),
                Err(TransitionError::RequestNotPending)
            );
        }
    }

    #[test]
    fn test_quote_requires_direct_kind() {
        let draft = QuoteDraft::new(vec![DraftRow::new("Labor", "500.00")], "");

        let custom = request(RequestStatus::Pending, RequestKind::Custom);
        assert_eq!(
            quote_request(&custom, &draft),
            Err(TransitionError::QuoteNotDirect)
        );

        let direct = request(RequestStatus::Pending, RequestKind::Direct);
        let (status, quote) = quote_request(&direct, &draft).unwrap();
        assert_eq!(status, RequestStatus::Quoted);
        assert_eq!(quote.total(), 500.00);
    }

    #[test]
    fn test_quote_with_no_valid_items_is_refused() {
        let direct = request(RequestStatus::Pending, RequestKind::Direct);
        let draft = QuoteDraft::new(vec![DraftRow::new("", "800.00")], "");
        assert_eq!(
            quote_request(&direct, &draft),
            Err(TransitionError::Quote(QuoteError::NoValidItems))
        );
    }

    #[test]
    fn test_cancel_requires_reason() {
        let req = request(RequestStatus::Pending, RequestKind::Custom);
        assert_eq!(cancel_request(&req, "   "), Err(TransitionError::EmptyReason));
        assert_eq!(
            cancel_request(&req, "client unavailable"),
            Ok(RequestStatus::Cancelled)
        );

        let b = booking(BookingStatus::Active);
        assert_eq!(cancel_booking(&b, ""), Err(TransitionError::EmptyReason));
        assert_eq!(
            cancel_booking(&b, "shop closed"),
            Ok(BookingStatus::Cancelled)
        );
    }

    #[test]
    fn test_cancel_covers_quoted_but_not_terminal_or_unknown() {
        let quoted = request(RequestStatus::Quoted, RequestKind::Direct);
        assert_eq!(
            cancel_request(&quoted, "client found another shop"),
            Ok(RequestStatus::Cancelled)
        );

        for status in [
            RequestStatus::Accepted,
            RequestStatus::Declined,
            RequestStatus::Cancelled,
            RequestStatus::Unknown,
        ] {
            let req = request(status, RequestKind::Custom);
            assert_eq!(
                cancel_request(&req, "too late"),
                Err(TransitionError::RequestNotPending)
            );
        }
    }

    #[test]
    fn test_completed_booking_never_returns_to_active() {
        let done = booking(BookingStatus::Completed);
        assert_eq!(
            cancel_booking(&done, "changed my mind"),
            Err(TransitionError::BookingNotActive)
        );
        assert_eq!(
            complete_booking(&done, "1300.00", "receipt.jpg"),
            Err(TransitionError::BookingNotActive)
        );
    }

    #[test]
    fn test_complete_requires_amount_and_proof() {
        let b = booking(BookingStatus::Active);
        assert_eq!(
            complete_booking(&b, "0", "receipt.jpg"),
            Err(TransitionError::InvalidAmount)
        );
        assert_eq!(
            complete_booking(&b, "12x", "receipt.jpg"),
            Err(TransitionError::InvalidAmount)
        );
        assert_eq!(
            complete_booking(&b, "1300.00", "  "),
            Err(TransitionError::MissingProof)
        );
        assert_eq!(
            complete_booking(&b, "1300.00", "receipt.jpg"),
            Ok(BookingStatus::Completed)
        );
    }

    #[test]
    fn test_reschedule_only_on_backjob_and_keeps_status() {
        let b = booking(BookingStatus::Backjob);
        assert_eq!(reschedule_backjob(&b), Ok(BookingStatus::Backjob));

        let active = booking(BookingStatus::Active);
        assert_eq!(reschedule_backjob(&active), Err(TransitionError::NotBackjob));
    }
}
