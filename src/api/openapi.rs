//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{checkin, dashboard, events, health, tickets, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ticketing API",
        version = "0.1.0",
        description = "Event ticketing and gate check-in REST API"
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Events
        events::list_events,
        events::get_event,
        events::create_event,
        events::update_event,
        events::delete_event,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Tickets
        tickets::list_tickets,
        tickets::get_ticket,
        tickets::book_tickets,
        tickets::update_ticket,
        tickets::delete_ticket,
        // Check-in
        checkin::scan_ticket,
        checkin::manual_verify_ticket,
        checkin::bulk_check_in,
        checkin::event_attendance_log,
        // Dashboard
        dashboard::staff_dashboard,
    ),
    components(
        schemas(
            // Events
            crate::models::event::Event,
            crate::models::event::CreateEvent,
            crate::models::event::UpdateEvent,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Tickets
            crate::models::ticket::Ticket,
            crate::models::ticket::BookTicketRequest,
            crate::models::ticket::UpdateTicket,
            crate::models::enums::TicketStatus,
            crate::models::enums::UserRole,
            // Check-in
            checkin::ScanTicketRequest,
            crate::models::checkin::ManualTicketVerificationRequest,
            crate::models::checkin::BulkCheckInRequest,
            crate::models::checkin::BulkCheckInResponse,
            crate::models::checkin::TicketScanResponse,
            crate::models::checkin::ScanOutcome,
            crate::models::attendance::AttendanceLog,
            crate::models::attendance::ScanRecord,
            // Dashboard
            dashboard::EventInfo,
            dashboard::StaffDashboardResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Event management"),
        (name = "users", description = "User management"),
        (name = "tickets", description = "Ticket booking and management"),
        (name = "checkin", description = "Gate check-in and verification"),
        (name = "dashboard", description = "Staff dashboard")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
