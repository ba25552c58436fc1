//! Pure projection from lifecycle status to what a surface shows: display
//! label, badge styling hook, and the action set offered for the record.

use crate::status::{BookingStatus, RequestKind, RequestStatus};

/// Styling hook for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Pending,
    Quoted,
    Accepted,
    Declined,
    Active,
    Completed,
    Backjob,
    Cancelled,
    Neutral,
}

impl Badge {
    /// CSS-style class name, kept stable for theming.
    pub fn class_name(&self) -> &'static str {
        match self {
            Badge::Pending => "status-pending",
            Badge::Quoted => "status-quoted",
            Badge::Accepted => "status-accepted",
            Badge::Declined => "status-declined",
            Badge::Active => "status-active",
            Badge::Completed => "status-completed",
            Badge::Backjob => "status-backjob",
            Badge::Cancelled => "status-cancelled",
            Badge::Neutral => "status-unknown",
        }
    }
}

/// An action a surface may offer on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobAction {
    Accept,
    Decline,
    Quote,
    Cancel,
    Contact,
    Start,
    Reschedule,
}

impl JobAction {
    pub fn label(&self) -> &'static str {
        match self {
            JobAction::Accept => "Accept",
            JobAction::Decline => "Decline",
            JobAction::Quote => "Send Quote",
            JobAction::Cancel => "Cancel",
            JobAction::Contact => "Contact",
            JobAction::Start => "Start Job",
            JobAction::Reschedule => "Reschedule",
        }
    }
}

/// What a surface shows for one status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub label: &'static str,
    pub badge: Badge,
    pub actions: Vec<JobAction>,
}

/// Projection for request records. Total over the status enumeration,
/// including the unknown fallback; never mutates, never performs I/O.
pub fn request_view(status: RequestStatus, kind: RequestKind) -> StatusView {
    match status {
        RequestStatus::Pending => {
            let mut actions = vec![JobAction::Decline];
            if kind == RequestKind::Direct {
                actions.push(JobAction::Quote);
            }
            actions.push(JobAction::Accept);
            StatusView {
                label: "Pending Response",
                badge: Badge::Pending,
                actions,
            }
        }
        RequestStatus::Quoted => StatusView {
            label: "Quote Sent",
            badge: Badge::Quoted,
            actions: vec![JobAction::Cancel],
        },
        RequestStatus::Accepted => StatusView {
            label: "Accepted",
            badge: Badge::Accepted,
            actions: vec![],
        },
        RequestStatus::Declined => StatusView {
            label: "Declined",
            badge: Badge::Declined,
            actions: vec![],
        },
        RequestStatus::Cancelled => StatusView {
            label: "Cancelled",
            badge: Badge::Cancelled,
            actions: vec![],
        },
        RequestStatus::Unknown => unknown_view(),
    }
}

/// Projection for booking records.
pub fn booking_view(status: BookingStatus) -> StatusView {
    match status {
        BookingStatus::Active => StatusView {
            label: "In Progress",
            badge: Badge::Active,
            actions: vec![JobAction::Contact, JobAction::Start],
        },
        BookingStatus::Completed => StatusView {
            label: "Completed",
            badge: Badge::Completed,
            actions: vec![JobAction::Contact],
        },
        BookingStatus::Backjob => StatusView {
            label: "Follow-up Job",
            badge: Badge::Backjob,
            actions: vec![JobAction::Reschedule, JobAction::Contact],
        },
        BookingStatus::Cancelled => StatusView {
            label: "Cancelled",
            badge: Badge::Cancelled,
            actions: vec![],
        },
        BookingStatus::Unknown => unknown_view(),
    }
}

fn unknown_view() -> StatusView {
    StatusView {
        label: "Unknown",
        badge: Badge::Neutral,
        actions: vec![],
    }
}
