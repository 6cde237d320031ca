//! Repository layer for database operations

pub mod attendance;
pub mod events;
pub mod tickets;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub events: events::EventsRepository,
    pub tickets: tickets::TicketsRepository,
    pub attendance: attendance::AttendanceRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            events: events::EventsRepository::new(pool.clone()),
            tickets: tickets::TicketsRepository::new(pool.clone()),
            attendance: attendance::AttendanceRepository::new(pool.clone()),
            pool,
        }
    }
}
