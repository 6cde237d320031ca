//! Users repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::UserRole,
        user::{CreateUser, UpdateUser, User},
    },
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Get user by email
    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    /// Create a user
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let role = data.role.as_deref().unwrap_or(UserRole::Attendee.as_str());

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, role, contact)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password)
        .bind(role)
        .bind(&data.contact)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Email {} is already registered", data.email))
            }
            _ => AppError::from(e),
        })?;
        Ok(user)
    }

    /// Update a user
    pub async fn update(&self, id: i64, data: &UpdateUser) -> AppResult<User> {
        let current = self.get_by_id(id).await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, email = $2, password = $3, role = $4, contact = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(data.name.as_ref().unwrap_or(&current.name))
        .bind(data.email.as_ref().unwrap_or(&current.email))
        .bind(data.password.as_ref().or(current.password.as_ref()))
        .bind(data.role.as_ref().unwrap_or(&current.role))
        .bind(data.contact.as_ref().or(current.contact.as_ref()))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    /// Delete a user
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }
}
