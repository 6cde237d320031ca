//! Tickets repository

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::TicketStatus,
        ticket::{Ticket, TicketQuery, UpdateTicket},
    },
};

#[derive(Clone)]
pub struct TicketsRepository {
    pool: Pool<Postgres>,
}

impl TicketsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List tickets, optionally restricted to one event and/or one owner,
    /// or resolved from an exact ticket number
    pub async fn list(&self, query: &TicketQuery) -> AppResult<Vec<Ticket>> {
        if let Some(ref number) = query.number {
            return Ok(self.find_by_number(number).await?.into_iter().collect());
        }

        let tickets = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT * FROM tickets
            WHERE ($1::bigint IS NULL OR event_id = $1)
              AND ($2::bigint IS NULL OR user_id = $2)
            ORDER BY purchase_date DESC, id
            "#,
        )
        .bind(query.event_id)
        .bind(query.user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(tickets)
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Ticket> {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", id)))
    }

    /// Resolve a ticket number (QR code value) to a ticket. Exact,
    /// case-sensitive match; pure read.
    pub async fn find_by_number(&self, ticket_number: &str) -> AppResult<Option<Ticket>> {
        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE qr_code = $1")
            .bind(ticket_number)
            .fetch_optional(&self.pool)
            .await?;
        Ok(ticket)
    }

    /// Issue one ticket for a user/event pair with a freshly generated QR code
    pub async fn issue(
        &self,
        user_id: i64,
        event_id: i64,
        ticket_type: &str,
        price: Decimal,
    ) -> AppResult<Ticket> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (
                user_id, event_id, qr_code, price, purchase_date,
                ticket_type, status, check_in_count
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, 0)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .bind(Uuid::new_v4().to_string())
        .bind(price)
        .bind(Utc::now())
        .bind(ticket_type)
        .bind(TicketStatus::Active.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(ticket)
    }

    /// Update a ticket's type or status
    pub async fn update(&self, id: i64, data: &UpdateTicket) -> AppResult<Ticket> {
        let current = self.get_by_id(id).await?;

        let ticket = sqlx::query_as::<_, Ticket>(
            "UPDATE tickets SET ticket_type = $1, status = $2 WHERE id = $3 RETURNING *",
        )
        .bind(data.ticket_type.as_ref().unwrap_or(&current.ticket_type))
        .bind(data.status.as_ref().unwrap_or(&current.status))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(ticket)
    }

    /// Delete a ticket
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Ticket {} not found", id)));
        }
        Ok(())
    }

    /// Count tickets sold for an event (any non-cancelled status)
    pub async fn count_sold(&self, event_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tickets WHERE event_id = $1 AND status != $2",
        )
        .bind(event_id)
        .bind(TicketStatus::Cancelled.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Count tickets currently checked in for an event
    pub async fn count_checked_in(&self, event_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tickets WHERE event_id = $1 AND status = $2",
        )
        .bind(event_id)
        .bind(TicketStatus::CheckedIn.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
