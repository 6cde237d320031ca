//! Business logic services

pub mod checkin;
pub mod dashboard;
pub mod events;
pub mod tickets;
pub mod users;

use crate::{config::CheckInConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub events: events::EventsService,
    pub tickets: tickets::TicketsService,
    pub checkin: checkin::CheckInService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, checkin_config: CheckInConfig) -> Self {
        Self {
            users: users::UsersService::new(repository.clone()),
            events: events::EventsService::new(repository.clone()),
            tickets: tickets::TicketsService::new(repository.clone()),
            checkin: checkin::CheckInService::new(repository.clone(), checkin_config),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
