//! Events repository

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::event::{CreateEvent, Event, UpdateEvent},
};

#[derive(Clone)]
pub struct EventsRepository {
    pool: Pool<Postgres>,
}

impl EventsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all events
    pub async fn list(&self) -> AppResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY start_date DESC NULLS LAST, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    /// Get event by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Event> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    /// Create an event
    pub async fn create(&self, data: &CreateEvent) -> AppResult<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                name, location, category, start_date, end_date,
                ticket_price, capacity,
                organizer, organizer_display_name, organizer_email, organizer_phone,
                description
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.location)
        .bind(&data.category)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.ticket_price.unwrap_or(Decimal::ZERO))
        .bind(data.capacity)
        .bind(&data.organizer)
        .bind(&data.organizer_display_name)
        .bind(&data.organizer_email)
        .bind(&data.organizer_phone)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(event)
    }

    /// Update an event
    pub async fn update(&self, id: i64, data: &UpdateEvent) -> AppResult<Event> {
        let current = self.get_by_id(id).await?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name = $1, location = $2, category = $3, start_date = $4, end_date = $5,
                ticket_price = $6, capacity = $7,
                organizer = $8, organizer_display_name = $9, organizer_email = $10,
                organizer_phone = $11, description = $12
            WHERE id = $13
            RETURNING *
            "#,
        )
        .bind(data.name.as_ref().unwrap_or(&current.name))
        .bind(data.location.as_ref().or(current.location.as_ref()))
        .bind(data.category.as_ref().or(current.category.as_ref()))
        .bind(data.start_date.or(current.start_date))
        .bind(data.end_date.or(current.end_date))
        .bind(data.ticket_price.unwrap_or(current.ticket_price))
        .bind(data.capacity.or(current.capacity))
        .bind(data.organizer.as_ref().or(current.organizer.as_ref()))
        .bind(
            data.organizer_display_name
                .as_ref()
                .or(current.organizer_display_name.as_ref()),
        )
        .bind(data.organizer_email.as_ref().or(current.organizer_email.as_ref()))
        .bind(data.organizer_phone.as_ref().or(current.organizer_phone.as_ref()))
        .bind(data.description.as_ref().or(current.description.as_ref()))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(event)
    }

    /// Delete an event
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }
        Ok(())
    }
}
