//! Staff dashboard endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, models::attendance::ScanRecord};

/// Event header shown on the staff dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub event_id: i64,
    pub title: String,
    pub event_start: Option<DateTime<Utc>>,
    pub event_end: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

/// Staff view of one event: admission counters and recent scans
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffDashboardResponse {
    pub current_event: EventInfo,
    pub total_capacity: i64,
    pub tickets_sold: i64,
    pub checked_in: i64,
    pub pending: i64,
    pub recent_scans: Vec<ScanRecord>,
}

/// Query parameters for the staff dashboard
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct StaffDashboardQuery {
    #[serde(rename = "eventId")]
    pub event_id: i64,
}

/// Staff dashboard for one event
#[utoipa::path(
    get,
    path = "/dashboard/staff",
    tag = "dashboard",
    params(StaffDashboardQuery),
    responses(
        (status = 200, description = "Staff dashboard", body = StaffDashboardResponse),
        (status = 404, description = "Event not found")
    )
)]
pub async fn staff_dashboard(
    State(state): State<crate::AppState>,
    Query(query): Query<StaffDashboardQuery>,
) -> AppResult<Json<StaffDashboardResponse>> {
    let dashboard = state.services.dashboard.staff_dashboard(query.event_id).await?;
    Ok(Json(dashboard))
}
