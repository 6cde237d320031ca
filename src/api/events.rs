//! Event management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::event::{CreateEvent, Event, UpdateEvent},
};

/// List all events
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    responses(
        (status = 200, description = "Events", body = Vec<Event>)
    )
)]
pub async fn list_events(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = state.services.events.list().await?;
    Ok(Json(events))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event", body = Event),
        (status = 404, description = "Event not found")
    )
)]
pub async fn get_event(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Event>> {
    let event = state.services.events.get(id).await?;
    Ok(Json(event))
}

/// Create an event
#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = Event)
    )
)]
pub async fn create_event(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = state.services.events.create(request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Update an event
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    request_body = UpdateEvent,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 404, description = "Event not found")
    )
)]
pub async fn update_event(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let event = state.services.events.update(id, request).await?;
    Ok(Json(event))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "events",
    params(("id" = i64, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found")
    )
)]
pub async fn delete_event(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.events.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
