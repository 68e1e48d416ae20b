use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use utoipa::ToSchema;
use uuid::Uuid;

/// The salon's fixed service catalog. Booking intake only ever submits
/// one of these ids.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Haircut,
    Coloring,
    Styling,
    Treatment,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Haircut => "haircut",
            ServiceKind::Coloring => "coloring",
            ServiceKind::Styling => "styling",
            ServiceKind::Treatment => "treatment",
        }
    }
}

impl Display for ServiceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One appointment as inserted by the booking intake.
///
/// Records are immutable: the dispatcher reads them and never writes back.
/// `id` and `created_at` are assigned here when the producer omits them.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingRecord {
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    /// Scheduled appointment instant (date + time-of-day slot).
    pub date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Appointment time as it appears in customer-facing message bodies.
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y at %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_deserializes_from_intake_fields() {
        let payload = serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "phone": "+15551234567",
            "service": "haircut",
            "date": "2025-06-01T10:00:00Z"
        });

        let record: BookingRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(record.service, ServiceKind::Haircut);
        assert_eq!(record.phone, "+15551234567");
        // Producer omitted id and created_at; both get assigned on the way in.
        assert!(!record.id.is_nil());
        assert!(record.created_at <= Utc::now());
    }

    #[test]
    fn unknown_service_is_rejected() {
        let payload = serde_json::json!({
            "name": "Ana",
            "email": "ana@example.com",
            "phone": "+15551234567",
            "service": "massage",
            "date": "2025-06-01T10:00:00Z"
        });

        assert!(serde_json::from_value::<BookingRecord>(payload).is_err());
    }

    #[test]
    fn service_ids_round_trip() {
        for (kind, id) in [
            (ServiceKind::Haircut, "haircut"),
            (ServiceKind::Coloring, "coloring"),
            (ServiceKind::Styling, "styling"),
            (ServiceKind::Treatment, "treatment"),
        ] {
            assert_eq!(kind.to_string(), id);
            let parsed: ServiceKind =
                serde_json::from_value(serde_json::Value::String(id.into())).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn date_formats_for_message_bodies() {
        let record = BookingRecord {
            id: Uuid::nil(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: "+15551234567".into(),
            service: ServiceKind::Haircut,
            date: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
            created_at: Utc::now(),
        };

        assert_eq!(record.formatted_date(), "June 1, 2025 at 10:00");
    }
}
