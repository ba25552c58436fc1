//! Mechlink Lifecycle Package
//!
//! The shared request/booking lifecycle model for the Mechlink repair
//! marketplace. Every surface that shows or mutates a job record goes through
//! this crate to decide which statuses exist, which actions are legal from
//! which status, and how a status is presented to the user.
//!
//! Everything here is pure: no I/O, no async, no clocks.

pub mod quote;
pub mod record;
pub mod status;
pub mod transitions;
pub mod view;

// Re-export commonly used types
pub use quote::{DraftRow, Quote, QuoteDraft, QuoteError, QuoteItem};
pub use record::{Booking, JobRecord, PartyRef, Request};
pub use status::{BookingStatus, RequestKind, RequestStatus};
pub use transitions::TransitionError;
pub use view::{booking_view, request_view, Badge, JobAction, StatusView};
