//! Gate check-in types: scan requests/responses, the bulk batch shapes and
//! the verification decision table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::TicketStatus;
use super::ticket::Ticket;

/// Outcome of a single verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanOutcome {
    /// Entry permitted (first admission or permitted re-entry)
    CheckedIn,
    /// Ticket already admitted and re-entry is not permitted
    Duplicate,
    /// Ticket unresolvable, for another event, or in a terminal status
    Invalid,
}

impl ScanOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanOutcome::CheckedIn => "CHECKED_IN",
            ScanOutcome::Duplicate => "DUPLICATE",
            ScanOutcome::Invalid => "INVALID",
        }
    }
}

/// Human-readable reasons attached to scan outcomes
pub mod reason {
    pub const CHECKED_IN: &str = "checked in";
    pub const RE_ENTRY: &str = "re-entry permitted";
    pub const NOT_FOUND: &str = "ticket not found";
    pub const WRONG_EVENT: &str = "ticket belongs to a different event";
    pub const CANCELLED: &str = "ticket is cancelled";
    pub const NOT_VALID: &str = "ticket is not valid";
    pub const ALREADY_CHECKED_IN: &str = "ticket already checked in";
}

/// Verification engine result for one resolved (or unresolved) ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanDecision {
    pub outcome: ScanOutcome,
    pub reason: &'static str,
    /// Successful check-ins prior to this attempt, recorded on the log row
    pub re_entry: i32,
}

impl ScanDecision {
    /// Decide whether a scanned ticket is admitted for `event_id`.
    ///
    /// The event membership check comes before the status check, so a
    /// cancelled or already-admitted ticket presented at the wrong event is
    /// reported as a mismatch. A CHECKED_IN ticket is a DUPLICATE unless the
    /// re-entry policy is enabled, in which case it is admitted again.
    pub fn evaluate(ticket: Option<&Ticket>, event_id: i64, allow_re_entry: bool) -> Self {
        let ticket = match ticket {
            Some(t) => t,
            None => {
                return Self {
                    outcome: ScanOutcome::Invalid,
                    reason: reason::NOT_FOUND,
                    re_entry: 0,
                }
            }
        };

        if ticket.event_id != event_id {
            return Self {
                outcome: ScanOutcome::Invalid,
                reason: reason::WRONG_EVENT,
                re_entry: ticket.check_in_count,
            };
        }

        match ticket.status() {
            TicketStatus::Active => Self {
                outcome: ScanOutcome::CheckedIn,
                reason: reason::CHECKED_IN,
                re_entry: ticket.check_in_count,
            },
            TicketStatus::CheckedIn if allow_re_entry => Self {
                outcome: ScanOutcome::CheckedIn,
                reason: reason::RE_ENTRY,
                re_entry: ticket.check_in_count,
            },
            TicketStatus::CheckedIn => Self {
                outcome: ScanOutcome::Duplicate,
                reason: reason::ALREADY_CHECKED_IN,
                re_entry: ticket.check_in_count,
            },
            TicketStatus::Cancelled => Self {
                outcome: ScanOutcome::Invalid,
                reason: reason::CANCELLED,
                re_entry: ticket.check_in_count,
            },
            TicketStatus::Invalid => Self {
                outcome: ScanOutcome::Invalid,
                reason: reason::NOT_VALID,
                re_entry: ticket.check_in_count,
            },
        }
    }

    /// Whether the ticket row is mutated (status transition + counter bump)
    pub fn admitted(&self) -> bool {
        self.outcome == ScanOutcome::CheckedIn
    }
}

/// Request payload for verifying a ticket via manual entry rather than QR scan
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualTicketVerificationRequest {
    pub ticket_number: Option<String>,
    pub staff_user_id: Option<i64>,
    pub gate: Option<String>,
    pub event_id: Option<i64>,
}

impl ManualTicketVerificationRequest {
    /// Convenience factory deriving a single-ticket request from one entry of
    /// a bulk batch, carrying the batch's staff/gate/event context so both
    /// entry points behave identically.
    pub fn from_bulk(ticket_number: &str, bulk: &BulkCheckInRequest) -> Self {
        Self {
            ticket_number: Some(ticket_number.to_string()),
            staff_user_id: bulk.staff_user_id,
            gate: bulk.gate.clone(),
            event_id: bulk.event_id,
        }
    }
}

/// Request payload for checking in multiple tickets in one call
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkCheckInRequest {
    #[serde(default)]
    pub ticket_numbers: Vec<String>,
    pub staff_user_id: Option<i64>,
    pub gate: Option<String>,
    pub event_id: Option<i64>,
}

impl BulkCheckInRequest {
    /// Sanitise the submitted ticket numbers: trim whitespace, drop blank
    /// entries, deduplicate preserving first-seen order.
    pub fn normalise_ticket_numbers(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for raw in &self.ticket_numbers {
            let number = raw.trim();
            if number.is_empty() || seen.iter().any(|n| n == number) {
                continue;
            }
            seen.push(number.to_string());
        }
        seen
    }
}

/// Per-ticket result of a verification attempt
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketScanResponse {
    pub ticket_number: String,
    pub ticket_id: Option<i64>,
    /// Attendance log row written for this attempt
    pub log_id: Option<i64>,
    pub status: ScanOutcome,
    pub reason: String,
    /// Successful check-ins prior to this attempt
    pub re_entry: i32,
    pub scan_time: DateTime<Utc>,
}

/// Aggregated response for a bulk check-in request
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkCheckInResponse {
    pub total_processed: i32,
    pub successful: i32,
    pub duplicates: i32,
    pub invalid: i32,
    pub results: Vec<TicketScanResponse>,
}

impl BulkCheckInResponse {
    /// Fold ordered per-ticket results into the aggregate counts. By
    /// construction `total_processed == successful + duplicates + invalid
    /// == results.len()`.
    pub fn from_results(results: Vec<TicketScanResponse>) -> Self {
        let mut successful = 0;
        let mut duplicates = 0;
        let mut invalid = 0;
        for r in &results {
            match r.status {
                ScanOutcome::CheckedIn => successful += 1,
                ScanOutcome::Duplicate => duplicates += 1,
                ScanOutcome::Invalid => invalid += 1,
            }
        }
        Self {
            total_processed: results.len() as i32,
            successful,
            duplicates,
            invalid,
            results,
        }
    }
}

/// Fully validated single scan, ready for the attendance recorder
#[derive(Debug, Clone)]
pub struct ScanAttempt {
    pub ticket_number: String,
    pub event_id: i64,
    pub staff_user_id: i64,
    pub gate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn ticket(event_id: i64, status: &str, check_in_count: i32) -> Ticket {
        Ticket {
            id: 1,
            user_id: 10,
            event_id,
            qr_code: "TICKET-1".to_string(),
            price: Decimal::ZERO,
            purchase_date: Utc::now(),
            ticket_type: "REGULAR".to_string(),
            status: status.to_string(),
            check_in_count,
        }
    }

    #[test]
    fn active_ticket_is_admitted_with_zero_re_entry() {
        let t = ticket(5, "ACTIVE", 0);
        let d = ScanDecision::evaluate(Some(&t), 5, false);
        assert_eq!(d.outcome, ScanOutcome::CheckedIn);
        assert_eq!(d.reason, reason::CHECKED_IN);
        assert_eq!(d.re_entry, 0);
        assert!(d.admitted());
    }

    #[test]
    fn missing_ticket_is_invalid_not_found() {
        let d = ScanDecision::evaluate(None, 5, true);
        assert_eq!(d.outcome, ScanOutcome::Invalid);
        assert_eq!(d.reason, reason::NOT_FOUND);
        assert!(!d.admitted());
    }

    #[test]
    fn wrong_event_is_invalid_regardless_of_status() {
        for status in ["ACTIVE", "CHECKED_IN", "CANCELLED"] {
            let t = ticket(5, status, 0);
            let d = ScanDecision::evaluate(Some(&t), 7, true);
            assert_eq!(d.outcome, ScanOutcome::Invalid, "status {}", status);
            assert_eq!(d.reason, reason::WRONG_EVENT);
        }
    }

    #[test]
    fn checked_in_ticket_is_duplicate_when_re_entry_disabled() {
        let t = ticket(5, "CHECKED_IN", 1);
        let d = ScanDecision::evaluate(Some(&t), 5, false);
        assert_eq!(d.outcome, ScanOutcome::Duplicate);
        assert_eq!(d.reason, reason::ALREADY_CHECKED_IN);
        assert_eq!(d.re_entry, 1);
    }

    #[test]
    fn checked_in_ticket_is_admitted_again_when_re_entry_enabled() {
        let t = ticket(5, "CHECKED_IN", 2);
        let d = ScanDecision::evaluate(Some(&t), 5, true);
        assert_eq!(d.outcome, ScanOutcome::CheckedIn);
        assert_eq!(d.reason, reason::RE_ENTRY);
        assert_eq!(d.re_entry, 2);
        assert!(d.admitted());
    }

    #[test]
    fn cancelled_ticket_is_invalid_never_duplicate() {
        let t = ticket(5, "CANCELLED", 0);
        let d = ScanDecision::evaluate(Some(&t), 5, true);
        assert_eq!(d.outcome, ScanOutcome::Invalid);
        assert_eq!(d.reason, reason::CANCELLED);
    }

    #[test]
    fn unknown_status_is_invalid() {
        let t = ticket(5, "REFUNDED", 0);
        let d = ScanDecision::evaluate(Some(&t), 5, false);
        assert_eq!(d.outcome, ScanOutcome::Invalid);
        assert_eq!(d.reason, reason::NOT_VALID);
    }

    #[test]
    fn normalise_trims_filters_and_dedups_in_order() {
        let request = BulkCheckInRequest {
            ticket_numbers: vec![
                "A1".to_string(),
                " A1 ".to_string(),
                "  ".to_string(),
                String::new(),
                "B2".to_string(),
                "A1".to_string(),
            ],
            staff_user_id: Some(1),
            gate: None,
            event_id: Some(5),
        };
        assert_eq!(request.normalise_ticket_numbers(), vec!["A1", "B2"]);
    }

    #[test]
    fn ticket_numbers_remain_case_sensitive() {
        let request = BulkCheckInRequest {
            ticket_numbers: vec!["abc".to_string(), "ABC".to_string()],
            staff_user_id: Some(1),
            gate: None,
            event_id: Some(5),
        };
        assert_eq!(request.normalise_ticket_numbers(), vec!["abc", "ABC"]);
    }

    #[test]
    fn from_bulk_carries_the_batch_context() {
        let bulk = BulkCheckInRequest {
            ticket_numbers: vec!["A1".to_string()],
            staff_user_id: Some(42),
            gate: Some("north".to_string()),
            event_id: Some(5),
        };
        let single = ManualTicketVerificationRequest::from_bulk("A1", &bulk);
        assert_eq!(single.ticket_number.as_deref(), Some("A1"));
        assert_eq!(single.staff_user_id, Some(42));
        assert_eq!(single.gate.as_deref(), Some("north"));
        assert_eq!(single.event_id, Some(5));
    }

    #[test]
    fn from_results_counts_sum_to_total() {
        let now = Utc::now();
        let result = |status: ScanOutcome| TicketScanResponse {
            ticket_number: "T".to_string(),
            ticket_id: None,
            log_id: None,
            status,
            reason: String::new(),
            re_entry: 0,
            scan_time: now,
        };
        let response = BulkCheckInResponse::from_results(vec![
            result(ScanOutcome::CheckedIn),
            result(ScanOutcome::Invalid),
            result(ScanOutcome::Duplicate),
            result(ScanOutcome::CheckedIn),
        ]);
        assert_eq!(response.total_processed, 4);
        assert_eq!(response.successful, 2);
        assert_eq!(response.duplicates, 1);
        assert_eq!(response.invalid, 1);
        assert_eq!(
            response.total_processed,
            response.successful + response.duplicates + response.invalid
        );
        assert_eq!(response.results.len() as i32, response.total_processed);
    }

    #[test]
    fn responses_serialize_with_camel_case_keys() {
        // Wire format consumed by the gate frontend
        let response = BulkCheckInResponse::from_results(vec![TicketScanResponse {
            ticket_number: "A1".to_string(),
            ticket_id: Some(1),
            log_id: Some(7),
            status: ScanOutcome::CheckedIn,
            reason: reason::CHECKED_IN.to_string(),
            re_entry: 0,
            scan_time: Utc::now(),
        }]);
        let json = serde_json::to_value(&response).expect("serializable");
        assert_eq!(json["totalProcessed"], 1);
        assert_eq!(json["successful"], 1);
        assert_eq!(json["results"][0]["ticketNumber"], "A1");
        assert_eq!(json["results"][0]["status"], "CHECKED_IN");
        assert_eq!(json["results"][0]["reEntry"], 0);
    }
}
