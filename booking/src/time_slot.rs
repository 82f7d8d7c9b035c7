use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of bookable slots per day
pub const SLOT_COUNT: u32 = 18;

const FIRST_SLOT_MINUTES: u32 = 9 * 60;
const SLOT_LENGTH_MINUTES: u32 = 30;

/// One of the fixed half-hour consultation slots, 9:00 AM through 5:30 PM.
///
/// Only values produced by [`TimeSlot::all`] exist; parsing and
/// deserialization reject any other label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Every slot in chronological order
    pub fn all() -> Vec<TimeSlot> {
        (0..SLOT_COUNT)
            .map(|index| FIRST_SLOT_MINUTES + index * SLOT_LENGTH_MINUTES)
            .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
            .map(TimeSlot)
            .collect()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Display label, e.g. "9:00 AM" or "12:30 PM"
    pub fn label(&self) -> String {
        self.0.format("%-I:%M %p").to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a bookable time slot")]
pub struct InvalidTimeSlot(pub String);

impl FromStr for TimeSlot {
    type Err = InvalidTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidTimeSlot(s.to_string()))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = InvalidTimeSlot;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_slot_set() {
        let labels: Vec<String> = TimeSlot::all().iter().map(TimeSlot::label).collect();
        assert_eq!(
            labels,
            vec![
                "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
                "12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM",
                "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM", "5:00 PM", "5:30 PM",
            ]
        );
    }

    #[test]
    fn test_slots_are_chronological() {
        let slots = TimeSlot::all();
        assert_eq!(slots.len() as u32, SLOT_COUNT);
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_parse_known_labels() {
        let slot: TimeSlot = "10:30 AM".parse().unwrap();
        assert_eq!(slot.time(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(" 5:30 pm ".parse::<TimeSlot>().unwrap().label(), "5:30 PM");
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        for label in ["8:30 AM", "6:00 PM", "10:15 AM", "10:30", "", "noon"] {
            assert_eq!(
                label.parse::<TimeSlot>(),
                Err(InvalidTimeSlot(label.to_string())),
                "{}",
                label
            );
        }
    }

    #[test]
    fn test_serde_uses_label() {
        let slot: TimeSlot = "1:00 PM".parse().unwrap();
        assert_eq!(serde_json::to_string(&slot).unwrap(), "\"1:00 PM\"");
        assert_eq!(serde_json::from_str::<TimeSlot>("\"1:00 PM\"").unwrap(), slot);
        assert!(serde_json::from_str::<TimeSlot>("\"7:00 PM\"").is_err());
    }
}
