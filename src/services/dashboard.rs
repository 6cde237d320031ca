//! Staff dashboard aggregation service

use crate::{
    api::dashboard::{EventInfo, StaffDashboardResponse},
    error::AppResult,
    repository::Repository,
};

/// How many recent scans the staff dashboard shows
const RECENT_SCANS_LIMIT: i64 = 20;

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Build the staff view for one event: capacity, sold, checked-in,
    /// pending and the most recent gate scans with attendee details.
    pub async fn staff_dashboard(&self, event_id: i64) -> AppResult<StaffDashboardResponse> {
        let event = self.repository.events.get_by_id(event_id).await?;

        let tickets_sold = self.repository.tickets.count_sold(event_id).await?;
        let checked_in = self.repository.tickets.count_checked_in(event_id).await?;
        let recent_scans = self
            .repository
            .attendance
            .recent_scans(event_id, RECENT_SCANS_LIMIT)
            .await?;

        Ok(StaffDashboardResponse {
            current_event: EventInfo {
                event_id: event.id,
                title: event.name,
                event_start: event.start_date,
                event_end: event.end_date,
                location: event.location,
            },
            total_capacity: event.capacity.unwrap_or(0) as i64,
            tickets_sold,
            checked_in,
            pending: tickets_sold - checked_in,
            recent_scans,
        })
    }
}
