use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of a service request before a mechanic is committed.
///
/// The enumeration is closed: any status string the backend sends that is not
/// listed here maps to [`RequestStatus::Unknown`] instead of failing the
/// decode, and the unknown state never enables an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    Quoted,
    Accepted,
    Declined,
    Cancelled,
    Unknown,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Quoted => "quoted",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Declined => "declined",
            RequestStatus::Cancelled => "cancelled",
            RequestStatus::Unknown => "unknown",
        }
    }

    /// Lenient mapping from the backend's status strings. Some backend
    /// records carry the misspelling `qouted`; both spellings name the same
    /// state, and only `quoted` is ever written back.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "pending" => RequestStatus::Pending,
            "quoted" | "qouted" => RequestStatus::Quoted,
            "accepted" => RequestStatus::Accepted,
            "declined" => RequestStatus::Declined,
            "cancelled" => RequestStatus::Cancelled,
            _ => RequestStatus::Unknown,
        }
    }

    /// Terminal states end the record's active life.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestStatus::Accepted | RequestStatus::Declined | RequestStatus::Cancelled
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RequestStatus::from_wire(&raw))
    }
}

/// Status of a confirmed booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Active,
    Completed,
    Backjob,
    Cancelled,
    Unknown,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::Completed => "completed",
            BookingStatus::Backjob => "backjob",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "active" => BookingStatus::Active,
            "completed" => BookingStatus::Completed,
            "backjob" => BookingStatus::Backjob,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Unknown,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BookingStatus::from_wire(&raw))
    }
}

/// How a request reached the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Client described the work themselves; open to any mechanic.
    Custom,
    /// Sent directly to one mechanic or shop; the only kind that can be quoted.
    Direct,
    Emergency,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Custom => "custom",
            RequestKind::Direct => "direct",
            RequestKind::Emergency => "emergency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_status_falls_back_to_unknown() {
        let status: RequestStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, RequestStatus::Unknown);

        let status: BookingStatus = serde_json::from_str("\"paused\"").unwrap();
        assert_eq!(status, BookingStatus::Unknown);
    }

    #[test]
    fn test_qouted_misspelling_is_the_same_state() {
        let status: RequestStatus = serde_json::from_str("\"qouted\"").unwrap();
        assert_eq!(status, RequestStatus::Quoted);

        // Only the canonical spelling is ever written.
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"quoted\"");
    }

    #[test]
    fn test_wire_names_round_trip() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Quoted,
            RequestStatus::Accepted,
            RequestStatus::Declined,
            RequestStatus::Cancelled,
        ] {
            assert_eq!(RequestStatus::from_wire(status.as_str()), status);
        }
        for status in [
            BookingStatus::Active,
            BookingStatus::Completed,
            BookingStatus::Backjob,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::from_wire(status.as_str()), status);
        }
        assert_eq!(
            serde_json::to_string(&RequestKind::Direct).unwrap(),
            "\"direct\""
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(!RequestStatus::Quoted.is_terminal());
        assert!(RequestStatus::Accepted.is_terminal());
        assert!(RequestStatus::Declined.is_terminal());
        assert!(RequestStatus::Cancelled.is_terminal());
    }
}
