use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{BookingStatus, RequestKind, RequestStatus};

/// Reference to a marketplace party (client, mechanic, or shop).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyRef {
    pub id: i64,
    pub name: String,
}

/// A client's ask for service, before a mechanic is committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: i64,
    /// Wire name avoids clashing with the [`JobRecord`] union tag.
    #[serde(rename = "request_kind")]
    pub kind: RequestKind,
    pub status: RequestStatus,
    pub client: PartyRef,
    pub summary: String,
    pub created_at: DateTime<Utc>,
    /// Target mechanic or shop for direct requests.
    #[serde(default)]
    pub target: Option<PartyRef>,
}

/// A confirmed, scheduled-or-in-progress job resulting from an accepted
/// request or accepted quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub request_id: i64,
    pub status: BookingStatus,
    pub fee: f64,
    pub booked_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub client: PartyRef,
    pub provider: PartyRef,
    pub service: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Tagged union carried between surfaces in place of the duck-typed job
/// objects the backend mixes into one `jobs` list. The tag is validated at
/// the deserialization boundary; an unrecognized tag is a decode error, not a
/// crash deeper in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum JobRecord {
    Request(Request),
    Booking(Booking),
}

impl JobRecord {
    pub fn id(&self) -> i64 {
        match self {
            JobRecord::Request(r) => r.id,
            JobRecord::Booking(b) => b.id,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            JobRecord::Request(r) => &r.summary,
            JobRecord::Booking(b) => &b.service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn party(id: i64, name: &str) -> PartyRef {
        PartyRef {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_job_record_round_trips_with_kind_tag() {
        let record = JobRecord::Request(Request {
            id: 42,
            kind: RequestKind::Direct,
            status: RequestStatus::Pending,
            client: party(3, "Alma R."),
            summary: "Brakes grinding on front left".to_string(),
            created_at: Utc::now(),
            target: Some(party(9, "Eastside Auto")),
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "request");
        assert_eq!(json["request_kind"], "direct");

        let back: JobRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.id(), 42);
    }

    #[test]
    fn test_unrecognized_union_tag_is_a_decode_error() {
        let err = serde_json::from_str::<JobRecord>(r#"{"kind":"invoice","id":1}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_booking_decodes_with_unknown_status() {
        let json = r#"{
            "id": 7,
            "request_id": 42,
            "status": "on-hold",
            "fee": 1300.0,
            "booked_at": "2025-11-02T08:30:00Z",
            "client": {"id": 3, "name": "Alma R."},
            "provider": {"id": 9, "name": "Eastside Auto"},
            "service": "Brake pad replacement"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Unknown);
        assert_eq!(booking.completed_at, None);
        assert_eq!(booking.location, None);
    }
}
