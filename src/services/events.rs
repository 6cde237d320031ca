//! Event management service

use crate::{
    error::AppResult,
    models::event::{CreateEvent, Event, UpdateEvent},
    repository::Repository,
};

#[derive(Clone)]
pub struct EventsService {
    repository: Repository,
}

impl EventsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all events
    pub async fn list(&self) -> AppResult<Vec<Event>> {
        self.repository.events.list().await
    }

    /// Get an event by ID
    pub async fn get(&self, id: i64) -> AppResult<Event> {
        self.repository.events.get_by_id(id).await
    }

    /// Create an event
    pub async fn create(&self, data: CreateEvent) -> AppResult<Event> {
        self.repository.events.create(&data).await
    }

    /// Update an event
    pub async fn update(&self, id: i64, data: UpdateEvent) -> AppResult<Event> {
        self.repository.events.update(id, &data).await
    }

    /// Delete an event
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.events.delete(id).await
    }
}
