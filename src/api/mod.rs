//! API handlers for the ticketing REST endpoints

pub mod checkin;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod openapi;
pub mod tickets;
pub mod users;
