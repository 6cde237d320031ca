//! User management service

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Get a user by ID
    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Get a user by email
    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        self.repository.users.get_by_email(email).await
    }

    /// Create a user
    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        self.repository.users.create(&data).await
    }

    /// Update a user
    pub async fn update(&self, id: i64, data: UpdateUser) -> AppResult<User> {
        self.repository.users.update(id, &data).await
    }

    /// Delete a user
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.users.delete(id).await
    }
}
