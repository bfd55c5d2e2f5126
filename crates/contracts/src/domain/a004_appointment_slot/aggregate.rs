use crate::domain::common::LocationId;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Bookable date/time pair at a location
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppointmentSlot {
    pub date: NaiveDate,
    /// Time of day, "HH:MM"
    pub time: String,
}

impl AppointmentSlot {
    pub fn new(date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            date,
            time: time.into(),
        }
    }

    pub fn parsed_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.time.trim(), "%H:%M").ok()
    }

    pub fn matches(&self, date: NaiveDate, time: &str) -> bool {
        self.date == date && self.time.trim() == time.trim()
    }
}

/// Slots resolved for one location
///
/// Tagged with the location so a response that arrives after the user picked
/// another location can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailableSlots {
    pub location_id: Option<LocationId>,
    pub slots: Vec<AppointmentSlot>,
}

impl AvailableSlots {
    /// Keep well-formed slots, ordered by date then time
    pub fn new(location_id: LocationId, mut slots: Vec<AppointmentSlot>) -> Self {
        slots.retain(|slot| slot.parsed_time().is_some());
        slots.sort();
        slots.dedup();
        Self {
            location_id: Some(location_id),
            slots,
        }
    }

    pub fn is_for(&self, location_id: &LocationId) -> bool {
        self.location_id.as_ref() == Some(location_id)
    }

    pub fn contains(&self, date: NaiveDate, time: &str) -> bool {
        self.slots.iter().any(|slot| slot.matches(date, time))
    }

    /// Distinct available days
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self.slots.iter().map(|slot| slot.date).collect();
        days.dedup();
        days
    }

    pub fn times_on(&self, date: NaiveDate) -> Vec<String> {
        self.slots
            .iter()
            .filter(|slot| slot.date == date)
            .map(|slot| slot.time.clone())
            .collect()
    }
}
