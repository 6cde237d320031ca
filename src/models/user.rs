//! User model (attendees, organizers, gate staff)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique login email
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Role (ATTENDEE, ORGANIZER, STAFF, ADMIN)
    pub role: String,
    /// Contact phone number
    pub contact: Option<String>,
}

/// Create user request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    /// Role (defaults to ATTENDEE)
    pub role: Option<String>,
    pub contact: Option<String>,
}

/// Update user request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub contact: Option<String>,
}
