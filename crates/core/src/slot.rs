//! Appointment slots and the rule deciding whether one can still be booked.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{ConsultError, ConsultResult};

pub const DAY_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A (day, time) pair. Two bookings never share one, whatever the doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub day: NaiveDate,
    pub time: NaiveTime,
}

impl Slot {
    pub fn new(day: NaiveDate, time: NaiveTime) -> Self {
        Self { day, time }
    }

    /// Parses a `YYYY-MM-DD` day and an `HH:MM` time.
    pub fn parse(day: &str, time: &str) -> ConsultResult<Self> {
        let day = NaiveDate::parse_from_str(day.trim(), DAY_FORMAT).map_err(|e| {
            ConsultError::Parse(format!("invalid day '{day}', expected YYYY-MM-DD: {e}"))
        })?;
        let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).map_err(|e| {
            ConsultError::Parse(format!("invalid time '{time}', expected HH:MM: {e}"))
        })?;

        Ok(Self { day, time })
    }

    /// A slot is bookable on any later day, or later the same day.
    pub fn is_bookable_at(&self, now: NaiveDateTime) -> bool {
        let today = now.date();
        self.day > today || (self.day == today && self.time >= now.time())
    }
}

/// Serde adapter rendering times as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(day: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{day} {time}"), "%Y-%m-%d %H:%M:%S")
            .expect("valid fixture instant")
    }

    #[test]
    fn parses_day_and_time() {
        let slot = Slot::parse("2099-01-01", "10:00").unwrap();

        assert_eq!(slot.day, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
        assert_eq!(slot.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[rstest]
    #[case("01/01/2099", "10:00")]
    #[case("2099-13-01", "10:00")]
    #[case("2099-01-01", "25:00")]
    #[case("2099-01-01", "ten")]
    #[case("", "10:00")]
    fn rejects_malformed_input(#[case] day: &str, #[case] time: &str) {
        let err = Slot::parse(day, time).unwrap_err();
        assert!(matches!(err, ConsultError::Parse(_)), "got {err:?}");
    }

    #[rstest]
    #[case("2030-01-16", "08:00", true)]
    #[case("2030-01-15", "10:30", true)]
    #[case("2030-01-15", "11:00", true)]
    #[case("2030-01-15", "10:00", false)]
    #[case("2030-01-14", "23:59", false)]
    #[case("2029-12-31", "12:00", false)]
    fn bookability_against_fixed_now(
        #[case] day: &str,
        #[case] time: &str,
        #[case] expected: bool,
    ) {
        let now = at("2030-01-15", "10:30:00");
        let slot = Slot::parse(day, time).unwrap();

        assert_eq!(slot.is_bookable_at(now), expected);
    }

    #[test]
    fn same_minute_with_elapsed_seconds_is_past() {
        let now = at("2030-01-15", "10:30:45");
        let slot = Slot::parse("2030-01-15", "10:30").unwrap();

        assert!(!slot.is_bookable_at(now));
    }

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        #[serde(with = "hhmm")]
        time: NaiveTime,
    }

    #[test]
    fn hhmm_drops_seconds() {
        let json = serde_json::to_string(&Wrapper {
            time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
        })
        .unwrap();

        assert_eq!(json, r#"{"time":"09:05"}"#);
    }
}
