//! Ticket endpoints (listing and booking)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::ticket::{BookTicketRequest, Ticket, TicketQuery, UpdateTicket},
};

/// List tickets, optionally filtered by event or owner
#[utoipa::path(
    get,
    path = "/tickets",
    tag = "tickets",
    params(TicketQuery),
    responses(
        (status = 200, description = "Tickets", body = Vec<Ticket>)
    )
)]
pub async fn list_tickets(
    State(state): State<crate::AppState>,
    Query(query): Query<TicketQuery>,
) -> AppResult<Json<Vec<Ticket>>> {
    let tickets = state.services.tickets.list(&query).await?;
    Ok(Json(tickets))
}

/// Get a ticket by ID
#[utoipa::path(
    get,
    path = "/tickets/{id}",
    tag = "tickets",
    params(("id" = i64, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket", body = Ticket),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn get_ticket(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.get(id).await?;
    Ok(Json(ticket))
}

/// Book tickets for a user/event pair
#[utoipa::path(
    post,
    path = "/tickets/book",
    tag = "tickets",
    request_body = BookTicketRequest,
    responses(
        (status = 201, description = "Tickets issued", body = Vec<Ticket>),
        (status = 400, description = "Missing userId or eventId"),
        (status = 404, description = "User or event not found")
    )
)]
pub async fn book_tickets(
    State(state): State<crate::AppState>,
    Json(request): Json<BookTicketRequest>,
) -> AppResult<(StatusCode, Json<Vec<Ticket>>)> {
    let tickets = state.services.tickets.book_tickets(request).await?;
    Ok((StatusCode::CREATED, Json(tickets)))
}

/// Update a ticket's type or status
#[utoipa::path(
    put,
    path = "/tickets/{id}",
    tag = "tickets",
    params(("id" = i64, Path, description = "Ticket ID")),
    request_body = UpdateTicket,
    responses(
        (status = 200, description = "Ticket updated", body = Ticket),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn update_ticket(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTicket>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.update(id, request).await?;
    Ok(Json(ticket))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    tag = "tickets",
    params(("id" = i64, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn delete_ticket(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.tickets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
