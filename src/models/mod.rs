//! Data models for the ticketing server

pub mod attendance;
pub mod checkin;
pub mod enums;
pub mod event;
pub mod ticket;
pub mod user;

// Re-export commonly used types
pub use attendance::AttendanceLog;
pub use checkin::{BulkCheckInRequest, BulkCheckInResponse, ScanOutcome, TicketScanResponse};
pub use enums::{TicketStatus, UserRole};
pub use event::Event;
pub use ticket::Ticket;
pub use user::User;
