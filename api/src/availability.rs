//! Availability lookup endpoint and slot types

use crate::client::ApiClient;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Tri-state status of a bookable time interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    /// Slot can be selected for booking
    Available,
    /// Slot has already been taken
    Booked,
    /// Slot is blocked by the provider
    Blocked,
}

/// A bookable time interval for a service on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Slot identifier
    pub id: String,
    /// Interval start (ISO datetime)
    pub start_time: String,
    /// Interval end (ISO datetime)
    pub end_time: String,
    /// Slot status at fetch time; the backend remains the final arbiter
    pub status: SlotStatus,
}

impl TimeSlot {
    /// Whether this slot can be offered for selection
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

/// One day of the availability matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    /// Whether any slot on this day can be booked
    pub is_bookable: bool,
    /// Ordered slots for the day
    pub time_slots: Vec<TimeSlot>,
}

impl DayAvailability {
    /// Slots that may be offered for selection (AVAILABLE only).
    #[must_use]
    pub fn selectable_slots(&self) -> Vec<&TimeSlot> {
        if !self.is_bookable {
            return Vec::new();
        }
        self.time_slots.iter().filter(|s| s.is_selectable()).collect()
    }
}

/// Request window for the availability lookup
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    /// Inclusive window start (`YYYY-MM-DD`)
    pub start_date: String,
    /// Inclusive window end (`YYYY-MM-DD`)
    pub end_date: String,
}

impl ApiClient {
    /// Fetch a service's bookable date/slot matrix for the given window.
    ///
    /// The backend produces the sequence per request window; callers must
    /// not assume chronological order and should sort before relying on it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, rejected requests, or
    /// undecodable responses.
    pub async fn fetch_availability(
        &self,
        service_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<DayAvailability>, ApiError> {
        self.post_json(
            &format!("/booking/availability/{service_id}"),
            &AvailabilityRequest {
                start_date: start_date.to_string(),
                end_date: end_date.to_string(),
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, status: SlotStatus) -> TimeSlot {
        TimeSlot {
            id: id.to_string(),
            start_time: "2025-06-02T09:00:00Z".to_string(),
            end_time: "2025-06-02T10:00:00Z".to_string(),
            status,
        }
    }

    #[test]
    fn selectable_slots_exclude_booked_and_blocked() {
        let day = DayAvailability {
            date: "2025-06-02".to_string(),
            is_bookable: true,
            time_slots: vec![
                slot("s1", SlotStatus::Available),
                slot("s2", SlotStatus::Booked),
                slot("s3", SlotStatus::Blocked),
                slot("s4", SlotStatus::Available),
            ],
        };

        let ids: Vec<&str> = day.selectable_slots().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s4"]);
    }

    #[test]
    fn unbookable_day_offers_no_slots() {
        let day = DayAvailability {
            date: "2025-06-02".to_string(),
            is_bookable: false,
            time_slots: vec![slot("s1", SlotStatus::Available)],
        };
        assert!(day.selectable_slots().is_empty());
    }

    #[test]
    fn slot_status_uses_screaming_case_on_the_wire() {
        let day: DayAvailability = match serde_json::from_str(
            r#"{"date":"2025-06-02","isBookable":true,"timeSlots":[
                {"id":"s1","startTime":"2025-06-02T09:00:00Z","endTime":"2025-06-02T10:00:00Z","status":"AVAILABLE"},
                {"id":"s2","startTime":"2025-06-02T10:00:00Z","endTime":"2025-06-02T11:00:00Z","status":"BOOKED"}
            ]}"#,
        ) {
            Ok(day) => day,
            Err(e) => unreachable!("fixture should parse: {e}"),
        };

        assert_eq!(day.time_slots[0].status, SlotStatus::Available);
        assert_eq!(day.time_slots[1].status, SlotStatus::Booked);
    }
}
