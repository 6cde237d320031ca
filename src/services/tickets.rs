//! Ticket management service (CRUD and booking)

use crate::{
    error::{AppError, AppResult},
    models::ticket::{BookTicketRequest, Ticket, TicketQuery, UpdateTicket},
    repository::Repository,
};

pub const BOOKING_IDS_REQUIRED: &str = "Both userId and eventId are required to book tickets";

const DEFAULT_TICKET_TYPE: &str = "REGULAR";

#[derive(Clone)]
pub struct TicketsService {
    repository: Repository,
}

impl TicketsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List tickets
    pub async fn list(&self, query: &TicketQuery) -> AppResult<Vec<Ticket>> {
        self.repository.tickets.list(query).await
    }

    /// Get a ticket by ID
    pub async fn get(&self, id: i64) -> AppResult<Ticket> {
        self.repository.tickets.get_by_id(id).await
    }

    /// Book tickets: issue `quantity` ACTIVE tickets for a user/event pair,
    /// priced from the event, each with a fresh QR code.
    pub async fn book_tickets(&self, request: BookTicketRequest) -> AppResult<Vec<Ticket>> {
        let (user_id, event_id) = match (request.user_id, request.event_id) {
            (Some(u), Some(e)) => (u, e),
            _ => return Err(AppError::Validation(BOOKING_IDS_REQUIRED.to_string())),
        };

        // Verify both sides of the booking exist
        let user = self.repository.users.get_by_id(user_id).await?;
        let event = self.repository.events.get_by_id(event_id).await?;

        let quantity = request.quantity.unwrap_or(1).max(1);
        let ticket_type = request
            .ticket_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TICKET_TYPE);

        let mut tickets = Vec::with_capacity(quantity as usize);
        for _ in 0..quantity {
            let ticket = self
                .repository
                .tickets
                .issue(user.id, event.id, ticket_type, event.ticket_price)
                .await?;
            tickets.push(ticket);
        }

        tracing::info!(
            user_id,
            event_id,
            quantity,
            ticket_type,
            "tickets booked"
        );
        Ok(tickets)
    }

    /// Update a ticket
    pub async fn update(&self, id: i64, data: UpdateTicket) -> AppResult<Ticket> {
        self.repository.tickets.update(id, &data).await
    }

    /// Delete a ticket
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.tickets.delete(id).await
    }
}
