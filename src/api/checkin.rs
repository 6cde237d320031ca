//! Gate check-in endpoints (QR scan, manual entry, bulk)

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::{
        attendance::AttendanceLog,
        checkin::{
            BulkCheckInRequest, BulkCheckInResponse, ManualTicketVerificationRequest,
            TicketScanResponse,
        },
    },
};

/// Request payload for a QR code scan at the gate
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanTicketRequest {
    /// QR code payload (the ticket number)
    pub qr_code: Option<String>,
    pub staff_user_id: Option<i64>,
    pub gate: Option<String>,
    pub event_id: Option<i64>,
}

/// Verify a ticket from a QR code scan
#[utoipa::path(
    post,
    path = "/tickets/scan",
    tag = "checkin",
    request_body = ScanTicketRequest,
    responses(
        (status = 200, description = "Scan processed", body = TicketScanResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn scan_ticket(
    State(state): State<crate::AppState>,
    Json(request): Json<ScanTicketRequest>,
) -> AppResult<Json<TicketScanResponse>> {
    // A QR scan is the same verification as manual entry, the code payload
    // being the ticket number.
    let result = state
        .services
        .checkin
        .verify_ticket(ManualTicketVerificationRequest {
            ticket_number: request.qr_code,
            staff_user_id: request.staff_user_id,
            gate: request.gate,
            event_id: request.event_id,
        })
        .await?;
    Ok(Json(result))
}

/// Verify a manually entered ticket number
#[utoipa::path(
    post,
    path = "/tickets/manual-verify",
    tag = "checkin",
    request_body = ManualTicketVerificationRequest,
    responses(
        (status = 200, description = "Verification processed", body = TicketScanResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn manual_verify_ticket(
    State(state): State<crate::AppState>,
    Json(request): Json<ManualTicketVerificationRequest>,
) -> AppResult<Json<TicketScanResponse>> {
    let result = state.services.checkin.verify_ticket(request).await?;
    Ok(Json(result))
}

/// Check in a batch of ticket numbers in one call
#[utoipa::path(
    post,
    path = "/tickets/bulk-check-in",
    tag = "checkin",
    request_body = BulkCheckInRequest,
    responses(
        (status = 200, description = "Batch processed", body = BulkCheckInResponse),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn bulk_check_in(
    State(state): State<crate::AppState>,
    Json(request): Json<BulkCheckInRequest>,
) -> AppResult<Json<BulkCheckInResponse>> {
    let response = state.services.checkin.bulk_check_in(request).await?;
    Ok(Json(response))
}

/// Query parameters for the attendance log
#[derive(Deserialize, IntoParams, ToSchema)]
pub struct AttendanceLogQuery {
    /// Maximum rows to return (default 100)
    pub limit: Option<i64>,
}

/// Attendance audit trail for an event, newest first
#[utoipa::path(
    get,
    path = "/events/{id}/attendance",
    tag = "checkin",
    params(
        ("id" = i64, Path, description = "Event ID"),
        AttendanceLogQuery
    ),
    responses(
        (status = 200, description = "Attendance log entries", body = Vec<AttendanceLog>)
    )
)]
pub async fn event_attendance_log(
    State(state): State<crate::AppState>,
    Path(event_id): Path<i64>,
    Query(query): Query<AttendanceLogQuery>,
) -> AppResult<Json<Vec<AttendanceLog>>> {
    let limit = query.limit.unwrap_or(100).clamp(1, 1000);
    let logs = state.services.checkin.attendance_log(event_id, limit).await?;
    Ok(Json(logs))
}
