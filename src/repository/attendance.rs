//! Attendance repository: the transactional recorder behind gate scans

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        attendance::{AttendanceLog, ScanRecord},
        checkin::{ScanAttempt, ScanDecision, TicketScanResponse},
        enums::TicketStatus,
        ticket::Ticket,
    },
};

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: Pool<Postgres>,
}

impl AttendanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Process one verification attempt as a single atomic unit.
    ///
    /// The ticket row is locked (`FOR UPDATE`) before the decision is
    /// evaluated, so two racing scans of the same ticket number serialize:
    /// the second observes the first's committed CHECKED_IN state and
    /// resolves to DUPLICATE (or a re-entry admission, per policy).
    /// Exactly one attendance log row is written per attempt, including
    /// attempts whose ticket number resolves to nothing.
    pub async fn process_scan(
        &self,
        scan: &ScanAttempt,
        allow_re_entry: bool,
    ) -> AppResult<TicketScanResponse> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let ticket = sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE qr_code = $1 FOR UPDATE",
        )
        .bind(&scan.ticket_number)
        .fetch_optional(&mut *tx)
        .await?;

        let decision = ScanDecision::evaluate(ticket.as_ref(), scan.event_id, allow_re_entry);

        if let Some(ticket) = ticket.as_ref() {
            if decision.admitted() {
                sqlx::query(
                    "UPDATE tickets SET status = $1, check_in_count = check_in_count + 1 WHERE id = $2",
                )
                .bind(TicketStatus::CheckedIn.as_str())
                .bind(ticket.id)
                .execute(&mut *tx)
                .await?;
            }
        }

        let log_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO attendance_log (
                ticket_id, event_id, user_id, ticket_number,
                start_time, status, re_entry, gate, staff_user_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(ticket.as_ref().map(|t| t.id))
        .bind(scan.event_id)
        .bind(ticket.as_ref().map(|t| t.user_id))
        .bind(&scan.ticket_number)
        .bind(now)
        .bind(decision.outcome.as_str())
        .bind(decision.re_entry)
        .bind(&scan.gate)
        .bind(scan.staff_user_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(TicketScanResponse {
            ticket_number: scan.ticket_number.clone(),
            ticket_id: ticket.as_ref().map(|t| t.id),
            log_id: Some(log_id),
            status: decision.outcome,
            reason: decision.reason.to_string(),
            re_entry: decision.re_entry,
            scan_time: now,
        })
    }

    /// List attendance log rows for an event, newest first
    pub async fn list_for_event(&self, event_id: i64, limit: i64) -> AppResult<Vec<AttendanceLog>> {
        let logs = sqlx::query_as::<_, AttendanceLog>(
            "SELECT * FROM attendance_log WHERE event_id = $1 ORDER BY start_time DESC, id DESC LIMIT $2",
        )
        .bind(event_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    /// Most recent scans for an event, enriched with attendee name/email
    pub async fn recent_scans(&self, event_id: i64, limit: i64) -> AppResult<Vec<ScanRecord>> {
        let scans = sqlx::query_as::<_, ScanRecord>(
            r#"
            SELECT a.id as log_id, a.ticket_id, a.ticket_number,
                   u.name as attendee_name, u.email as attendee_email,
                   a.start_time as scan_time, a.status, a.gate
            FROM attendance_log a
            LEFT JOIN users u ON a.user_id = u.id
            WHERE a.event_id = $1
            ORDER BY a.start_time DESC, a.id DESC
            LIMIT $2
            "#,
        )
        .bind(event_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(scans)
    }
}
