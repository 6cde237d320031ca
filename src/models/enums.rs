//! Shared domain enums (stored as text columns, matching the original schema)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Active,
    CheckedIn,
    Cancelled,
    Invalid,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Active => "ACTIVE",
            TicketStatus::CheckedIn => "CHECKED_IN",
            TicketStatus::Cancelled => "CANCELLED",
            TicketStatus::Invalid => "INVALID",
        }
    }
}

impl From<&str> for TicketStatus {
    fn from(v: &str) -> Self {
        match v {
            "ACTIVE" => TicketStatus::Active,
            "CHECKED_IN" => TicketStatus::CheckedIn,
            "CANCELLED" => TicketStatus::Cancelled,
            _ => TicketStatus::Invalid,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// User role codes (stored in users.role)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Attendee,
    Organizer,
    Staff,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Attendee => "ATTENDEE",
            UserRole::Organizer => "ORGANIZER",
            UserRole::Staff => "STAFF",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl From<&str> for UserRole {
    fn from(v: &str) -> Self {
        match v {
            "ORGANIZER" => UserRole::Organizer,
            "STAFF" => UserRole::Staff,
            "ADMIN" => UserRole::Admin,
            _ => UserRole::Attendee,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
