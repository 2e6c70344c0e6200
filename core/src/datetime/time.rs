// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A point in event time that may or may not carry a time of day.
///
/// All-day events supply a bare date; timed events supply a floating date
/// and time. The agenda groups on the date part either way, so the two
/// flow through the engine uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// Date only, as carried by all-day events.
    Date(NaiveDate),

    /// Date and time of day, without timezone.
    Timed(NaiveDateTime),
}

impl EventTime {
    /// The civil date part, the grouping key of the agenda.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Date(d) => *d,
            EventTime::Timed(dt) => dt.date(),
        }
    }

    /// The time part, if there is one.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            EventTime::Date(_) => None,
            EventTime::Timed(dt) => Some(dt.time()),
        }
    }

    /// Chronological sort key; all-day values order at the start of
    /// their day, before any timed event on the same date.
    pub fn sort_key(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date(), self.time().unwrap_or_else(start_of_day))
    }
}

impl From<NaiveDate> for EventTime {
    fn from(d: NaiveDate) -> Self {
        EventTime::Date(d)
    }
}

impl From<NaiveDateTime> for EventTime {
    fn from(dt: NaiveDateTime) -> Self {
        EventTime::Timed(dt)
    }
}

fn start_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_part_is_uniform_across_variants() {
        let d = date(2024, 6, 15);
        let timed = EventTime::Timed(d.and_hms_opt(10, 30, 0).unwrap());
        assert_eq!(EventTime::Date(d).date(), d);
        assert_eq!(timed.date(), d);
    }

    #[test]
    fn time_part_only_for_timed_values() {
        let d = date(2024, 6, 15);
        assert_eq!(EventTime::Date(d).time(), None);

        let timed = EventTime::Timed(d.and_hms_opt(10, 30, 0).unwrap());
        assert_eq!(timed.time(), NaiveTime::from_hms_opt(10, 30, 0));
    }

    #[test]
    fn all_day_sorts_before_timed_on_the_same_date() {
        let d = date(2024, 6, 15);
        let all_day = EventTime::Date(d);
        let timed = EventTime::Timed(d.and_hms_opt(0, 0, 1).unwrap());
        assert!(all_day.sort_key() < timed.sort_key());
    }
}
