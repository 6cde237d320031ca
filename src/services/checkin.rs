//! Gate check-in service: single-ticket verification and bulk orchestration

use crate::{
    config::CheckInConfig,
    error::{AppError, AppResult},
    models::{
        attendance::AttendanceLog,
        checkin::{
            BulkCheckInRequest, BulkCheckInResponse, ManualTicketVerificationRequest, ScanAttempt,
            TicketScanResponse,
        },
    },
    repository::Repository,
};

/// Required-field messages, named once so the API surface stays consistent
pub const TICKET_NUMBER_REQUIRED: &str = "ticketNumber is required";
pub const STAFF_USER_ID_REQUIRED: &str = "staffUserId is required";
pub const EVENT_ID_REQUIRED: &str = "eventId is required";

#[derive(Clone)]
pub struct CheckInService {
    repository: Repository,
    allow_re_entry: bool,
}

impl CheckInService {
    pub fn new(repository: Repository, config: CheckInConfig) -> Self {
        Self {
            repository,
            allow_re_entry: config.allow_re_entry,
        }
    }

    /// Validate a single-ticket verification request into a scan attempt
    fn validate(request: &ManualTicketVerificationRequest) -> AppResult<ScanAttempt> {
        let ticket_number = request
            .ticket_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::Validation(TICKET_NUMBER_REQUIRED.to_string()))?;
        let staff_user_id = request
            .staff_user_id
            .ok_or_else(|| AppError::Validation(STAFF_USER_ID_REQUIRED.to_string()))?;
        let event_id = request
            .event_id
            .ok_or_else(|| AppError::Validation(EVENT_ID_REQUIRED.to_string()))?;

        Ok(ScanAttempt {
            ticket_number: ticket_number.to_string(),
            event_id,
            staff_user_id,
            gate: request.gate.clone(),
        })
    }

    /// Verify one ticket and record the attempt. Used for both QR scans and
    /// manual entry; per-ticket rejections come back as outcomes, not errors.
    pub async fn verify_ticket(
        &self,
        request: ManualTicketVerificationRequest,
    ) -> AppResult<TicketScanResponse> {
        let scan = Self::validate(&request)?;
        let result = self
            .repository
            .attendance
            .process_scan(&scan, self.allow_re_entry)
            .await?;
        tracing::debug!(
            ticket_number = %result.ticket_number,
            status = result.status.as_str(),
            reason = %result.reason,
            "ticket scan processed"
        );
        Ok(result)
    }

    /// Check in a batch of ticket numbers. Each surviving number after
    /// normalisation is verified independently; a single ticket's rejection
    /// never aborts the batch. Only storage failures propagate.
    pub async fn bulk_check_in(
        &self,
        request: BulkCheckInRequest,
    ) -> AppResult<BulkCheckInResponse> {
        if request.staff_user_id.is_none() {
            return Err(AppError::Validation(STAFF_USER_ID_REQUIRED.to_string()));
        }
        if request.event_id.is_none() {
            return Err(AppError::Validation(EVENT_ID_REQUIRED.to_string()));
        }

        let numbers = request.normalise_ticket_numbers();
        let mut results = Vec::with_capacity(numbers.len());
        for number in &numbers {
            let single = ManualTicketVerificationRequest::from_bulk(number, &request);
            results.push(self.verify_ticket(single).await?);
        }

        let response = BulkCheckInResponse::from_results(results);
        tracing::info!(
            total = response.total_processed,
            successful = response.successful,
            duplicates = response.duplicates,
            invalid = response.invalid,
            "bulk check-in processed"
        );
        Ok(response)
    }

    /// Attendance audit trail for an event, newest first
    pub async fn attendance_log(&self, event_id: i64, limit: i64) -> AppResult<Vec<AttendanceLog>> {
        self.repository.attendance.list_for_event(event_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checkin::{ScanDecision, ScanOutcome};
    use crate::models::ticket::Ticket;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tokio_test::assert_ok;

    /// In-memory stand-in for the attendance recorder, applying the same
    /// evaluate-under-lock discipline as the SQL transaction: the ticket map
    /// stays locked from the status read through the status write.
    struct MemoryGate {
        tickets: Mutex<HashMap<String, Ticket>>,
        allow_re_entry: bool,
    }

    impl MemoryGate {
        fn new(tickets: Vec<Ticket>, allow_re_entry: bool) -> Self {
            Self {
                tickets: Mutex::new(
                    tickets.into_iter().map(|t| (t.qr_code.clone(), t)).collect(),
                ),
                allow_re_entry,
            }
        }

        async fn process_scan(&self, scan: &ScanAttempt) -> TicketScanResponse {
            let mut tickets = self.tickets.lock().await;
            let decision = ScanDecision::evaluate(
                tickets.get(&scan.ticket_number),
                scan.event_id,
                self.allow_re_entry,
            );
            if decision.admitted() {
                if let Some(ticket) = tickets.get_mut(&scan.ticket_number) {
                    ticket.status = "CHECKED_IN".to_string();
                    ticket.check_in_count += 1;
                }
            }
            TicketScanResponse {
                ticket_number: scan.ticket_number.clone(),
                ticket_id: tickets.get(&scan.ticket_number).map(|t| t.id),
                log_id: None,
                status: decision.outcome,
                reason: decision.reason.to_string(),
                re_entry: decision.re_entry,
                scan_time: Utc::now(),
            }
        }

        /// Same per-number flow as `CheckInService::bulk_check_in`
        async fn bulk(&self, request: &BulkCheckInRequest) -> BulkCheckInResponse {
            let mut results = Vec::new();
            for number in request.normalise_ticket_numbers() {
                let single = ManualTicketVerificationRequest::from_bulk(&number, request);
                let scan = CheckInService::validate(&single).expect("valid request");
                results.push(self.process_scan(&scan).await);
            }
            BulkCheckInResponse::from_results(results)
        }
    }

    fn ticket(id: i64, number: &str, event_id: i64, status: &str) -> Ticket {
        Ticket {
            id,
            user_id: id * 10,
            event_id,
            qr_code: number.to_string(),
            price: Decimal::ZERO,
            purchase_date: Utc::now(),
            ticket_type: "REGULAR".to_string(),
            status: status.to_string(),
            check_in_count: if status == "CHECKED_IN" { 1 } else { 0 },
        }
    }

    fn bulk_request(numbers: &[&str]) -> BulkCheckInRequest {
        BulkCheckInRequest {
            ticket_numbers: numbers.iter().map(|n| n.to_string()).collect(),
            staff_user_id: Some(1),
            gate: Some("main".to_string()),
            event_id: Some(5),
        }
    }

    #[test]
    fn validate_rejects_missing_fields() {
        let blank = ManualTicketVerificationRequest {
            ticket_number: Some("   ".to_string()),
            staff_user_id: Some(1),
            gate: None,
            event_id: Some(5),
        };
        assert!(matches!(
            CheckInService::validate(&blank),
            Err(AppError::Validation(msg)) if msg == TICKET_NUMBER_REQUIRED
        ));

        let no_staff = ManualTicketVerificationRequest {
            ticket_number: Some("A1".to_string()),
            staff_user_id: None,
            gate: None,
            event_id: Some(5),
        };
        assert!(matches!(
            CheckInService::validate(&no_staff),
            Err(AppError::Validation(msg)) if msg == STAFF_USER_ID_REQUIRED
        ));

        let no_event = ManualTicketVerificationRequest {
            ticket_number: Some("A1".to_string()),
            staff_user_id: Some(1),
            gate: None,
            event_id: None,
        };
        assert!(matches!(
            CheckInService::validate(&no_event),
            Err(AppError::Validation(msg)) if msg == EVENT_ID_REQUIRED
        ));
    }

    #[test]
    fn validate_trims_the_ticket_number() {
        let request = ManualTicketVerificationRequest {
            ticket_number: Some("  A1  ".to_string()),
            staff_user_id: Some(1),
            gate: Some("north".to_string()),
            event_id: Some(5),
        };
        let scan = CheckInService::validate(&request).expect("valid request");
        assert_eq!(scan.ticket_number, "A1");
        assert_eq!(scan.event_id, 5);
        assert_eq!(scan.staff_user_id, 1);
        assert_eq!(scan.gate.as_deref(), Some("north"));
    }

    #[tokio::test]
    async fn example_batch_dedups_and_classifies() {
        // ["A1","A1"," ","B2"] with B2 nonexistent: two processed, one
        // admitted, one invalid, no duplicates.
        let gate = MemoryGate::new(vec![ticket(1, "A1", 5, "ACTIVE")], false);
        let response = gate.bulk(&bulk_request(&["A1", "A1", " ", "B2"])).await;

        assert_eq!(response.total_processed, 2);
        assert_eq!(response.successful, 1);
        assert_eq!(response.invalid, 1);
        assert_eq!(response.duplicates, 0);
        assert_eq!(response.results[0].ticket_number, "A1");
        assert_eq!(response.results[0].status, ScanOutcome::CheckedIn);
        assert_eq!(response.results[1].ticket_number, "B2");
        assert_eq!(response.results[1].status, ScanOutcome::Invalid);
    }

    #[tokio::test]
    async fn second_batch_reports_duplicates() {
        let gate = MemoryGate::new(vec![ticket(1, "A1", 5, "ACTIVE")], false);
        let first = gate.bulk(&bulk_request(&["A1"])).await;
        assert_eq!(first.successful, 1);

        let second = gate.bulk(&bulk_request(&["A1"])).await;
        assert_eq!(second.total_processed, 1);
        assert_eq!(second.duplicates, 1);
        assert_eq!(second.results[0].status, ScanOutcome::Duplicate);
    }

    #[tokio::test]
    async fn re_entry_policy_admits_again_with_incremented_counter() {
        let gate = MemoryGate::new(vec![ticket(1, "A1", 5, "ACTIVE")], true);
        let first = gate.bulk(&bulk_request(&["A1"])).await;
        assert_eq!(first.results[0].re_entry, 0);

        let second = gate.bulk(&bulk_request(&["A1"])).await;
        assert_eq!(second.successful, 1);
        assert_eq!(second.duplicates, 0);
        assert_eq!(second.results[0].status, ScanOutcome::CheckedIn);
        assert_eq!(second.results[0].re_entry, 1);
    }

    #[tokio::test]
    async fn mixed_batch_counts_sum_to_total() {
        let gate = MemoryGate::new(
            vec![
                ticket(1, "A1", 5, "ACTIVE"),
                ticket(2, "C3", 5, "CHECKED_IN"),
                ticket(3, "D4", 7, "ACTIVE"),
                ticket(4, "E5", 5, "CANCELLED"),
            ],
            false,
        );
        let response = gate
            .bulk(&bulk_request(&["A1", "C3", "D4", "E5", "NOPE"]))
            .await;

        assert_eq!(response.total_processed, 5);
        assert_eq!(response.successful, 1);
        assert_eq!(response.duplicates, 1);
        assert_eq!(response.invalid, 3);
        assert_eq!(
            response.total_processed,
            response.successful + response.duplicates + response.invalid
        );
        assert_eq!(response.results.len() as i32, response.total_processed);
    }

    #[tokio::test]
    async fn concurrent_scans_admit_exactly_once() {
        let gate = Arc::new(MemoryGate::new(vec![ticket(1, "A1", 5, "ACTIVE")], false));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let gate = Arc::clone(&gate);
            handles.push(tokio::spawn(async move {
                let scan = ScanAttempt {
                    ticket_number: "A1".to_string(),
                    event_id: 5,
                    staff_user_id: 1,
                    gate: None,
                };
                gate.process_scan(&scan).await
            }));
        }

        let mut admitted = 0;
        let mut duplicates = 0;
        for handle in handles {
            let result = assert_ok!(handle.await);
            match result.status {
                ScanOutcome::CheckedIn => admitted += 1,
                ScanOutcome::Duplicate => duplicates += 1,
                ScanOutcome::Invalid => panic!("unexpected invalid outcome"),
            }
        }
        assert_eq!(admitted, 1);
        assert_eq!(duplicates, 7);
    }
}
