//! Ticket model and booking types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::enums::TicketStatus;

/// Ticket record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ticket {
    pub id: i64,
    /// Owning attendee
    pub user_id: i64,
    pub event_id: i64,
    /// Ticket number, also the QR code payload. Unique.
    pub qr_code: String,
    pub price: Decimal,
    pub purchase_date: DateTime<Utc>,
    /// Ticket type (REGULAR, VIP, ...)
    pub ticket_type: String,
    /// Status (ACTIVE, CHECKED_IN, CANCELLED, INVALID)
    pub status: String,
    /// Number of successful check-ins so far (0 until first admission)
    pub check_in_count: i32,
}

impl Ticket {
    /// Typed view of the status column
    pub fn status(&self) -> TicketStatus {
        TicketStatus::from(self.status.as_str())
    }
}

/// Book tickets request: issues `quantity` tickets for a user/event pair
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookTicketRequest {
    pub user_id: Option<i64>,
    pub event_id: Option<i64>,
    /// Number of tickets to issue (defaults to 1, minimum 1)
    pub quantity: Option<i32>,
    /// Ticket type (defaults to REGULAR)
    pub ticket_type: Option<String>,
}

/// Update ticket request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTicket {
    pub ticket_type: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for listing tickets
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TicketQuery {
    /// Restrict to one event
    pub event_id: Option<i64>,
    /// Restrict to one owner
    pub user_id: Option<i64>,
    /// Exact ticket number (QR code value) lookup
    pub number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_request_binds_camel_case_fields() {
        // Payload shape posted by the event details page
        let request: BookTicketRequest = serde_json::from_value(serde_json::json!({
            "userId": 7,
            "eventId": 5,
            "quantity": 2,
            "ticketType": "VIP"
        }))
        .expect("frontend booking payload");

        assert_eq!(request.user_id, Some(7));
        assert_eq!(request.event_id, Some(5));
        assert_eq!(request.quantity, Some(2));
        assert_eq!(request.ticket_type.as_deref(), Some("VIP"));
    }
}
