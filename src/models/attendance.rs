//! Attendance log model (append-only audit trail of gate scans)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One attendance log row. Written once per verification attempt, successful
/// or not, and never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AttendanceLog {
    pub id: i64,
    /// Ticket, when the scanned number resolved to one
    pub ticket_id: Option<i64>,
    pub event_id: i64,
    /// Attendee owning the ticket, when resolved
    pub user_id: Option<i64>,
    /// Raw scanned ticket number, kept even when the lookup failed
    pub ticket_number: String,
    /// Scan timestamp
    pub start_time: DateTime<Utc>,
    /// Outcome (CHECKED_IN, DUPLICATE, INVALID)
    pub status: String,
    /// Successful check-ins prior to this attempt (0 on first admission)
    pub re_entry: i32,
    pub gate: Option<String>,
    /// Staff member operating the gate
    pub staff_user_id: Option<i64>,
}

/// Recent scan enriched with attendee display fields for the staff dashboard
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub log_id: i64,
    pub ticket_id: Option<i64>,
    pub ticket_number: String,
    pub attendee_name: Option<String>,
    pub attendee_email: Option<String>,
    pub scan_time: DateTime<Utc>,
    pub status: String,
    pub gate: Option<String>,
}
