//! Event model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Event record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Unit price charged when booking a ticket for this event
    pub ticket_price: Decimal,
    /// Venue capacity (admission limit)
    pub capacity: Option<i32>,
    pub organizer: Option<String>,
    pub organizer_display_name: Option<String>,
    pub organizer_email: Option<String>,
    pub organizer_phone: Option<String>,
    pub description: Option<String>,
}

/// Create event request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEvent {
    pub name: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub ticket_price: Option<Decimal>,
    pub capacity: Option<i32>,
    pub organizer: Option<String>,
    pub organizer_display_name: Option<String>,
    pub organizer_email: Option<String>,
    pub organizer_phone: Option<String>,
    pub description: Option<String>,
}

/// Update event request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub ticket_price: Option<Decimal>,
    pub capacity: Option<i32>,
    pub organizer: Option<String>,
    pub organizer_display_name: Option<String>,
    pub organizer_email: Option<String>,
    pub organizer_phone: Option<String>,
    pub description: Option<String>,
}
