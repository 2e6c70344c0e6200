// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::{Event, YearMonth};

/// Lays a month out as grid cells aligned to `first_day_of_week`.
///
/// Cells before the 1st are `None`, so a 7-wide grid renders every day
/// under its weekday column. Unlike [`crate::weeks_for_month`] the grid
/// never reaches into adjacent months; blank cells pad instead.
pub fn month_grid(month: YearMonth, first_day_of_week: Weekday) -> Vec<Option<NaiveDate>> {
    let first = month.first_day();
    let last = month.last_day();
    let leading = first.weekday().days_since(first_day_of_week) as usize;

    let mut cells = Vec::with_capacity(leading + 31);
    cells.resize(leading, None);

    let mut day = first;
    while day <= last {
        cells.push(Some(day));
        day = day + Days::new(1);
    }

    cells
}

/// The consecutive dates a day-strip view shows, starting at `anchor`.
///
/// A single-day view passes `len = 1`, the three-day view `len = 3`.
pub fn day_span(anchor: NaiveDate, len: u32) -> Vec<NaiveDate> {
    (0..len)
        .map(|i| anchor + Days::new(u64::from(i)))
        .collect()
}

/// The events starting on `date`, in their original order.
///
/// Events without a start never match; day views simply have nowhere to
/// place them.
pub fn events_on<'a, E: Event>(events: &'a [E], date: NaiveDate) -> Vec<&'a E> {
    events
        .iter()
        .filter(|e| e.start().is_some_and(|s| s.date() == date))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::EventTime;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[derive(Debug, Clone)]
    struct Stub {
        uid: &'static str,
        start: Option<NaiveDate>,
    }

    impl Event for Stub {
        fn uid(&self) -> &str {
            self.uid
        }

        fn summary(&self) -> &str {
            self.uid
        }

        fn start(&self) -> Option<EventTime> {
            self.start.map(EventTime::Date)
        }

        fn end(&self) -> Option<EventTime> {
            self.start.map(EventTime::Date)
        }
    }

    #[test]
    fn pads_leading_cells_up_to_the_first_weekday() {
        // June 2024 starts on a Saturday: five blanks after Monday.
        let cells = month_grid(YearMonth::new(2024, 6).unwrap(), Weekday::Mon);
        assert_eq!(cells.iter().take_while(|c| c.is_none()).count(), 5);
        assert_eq!(cells[5], Some(date(2024, 6, 1)));
        assert_eq!(cells.len(), 5 + 30);
        assert_eq!(cells.last().copied().flatten(), Some(date(2024, 6, 30)));
    }

    #[test]
    fn no_padding_when_the_month_starts_the_week() {
        // July 2024 starts on a Monday.
        let cells = month_grid(YearMonth::new(2024, 7).unwrap(), Weekday::Mon);
        assert_eq!(cells.first().copied().flatten(), Some(date(2024, 7, 1)));
        assert_eq!(cells.len(), 31);
    }

    #[test]
    fn day_span_counts_consecutive_dates() {
        let days = day_span(date(2024, 6, 30), 3);
        assert_eq!(
            days,
            vec![date(2024, 6, 30), date(2024, 7, 1), date(2024, 7, 2)]
        );
        assert_eq!(day_span(date(2024, 6, 15), 1), vec![date(2024, 6, 15)]);
    }

    #[test]
    fn events_on_keeps_input_order_and_skips_other_dates() {
        let events = vec![
            Stub {
                uid: "b",
                start: Some(date(2024, 6, 15)),
            },
            Stub {
                uid: "other",
                start: Some(date(2024, 6, 16)),
            },
            Stub {
                uid: "a",
                start: Some(date(2024, 6, 15)),
            },
            Stub {
                uid: "startless",
                start: None,
            },
        ];

        let on_day: Vec<&str> = events_on(&events, date(2024, 6, 15))
            .iter()
            .map(|e| e.uid())
            .collect();
        assert_eq!(on_day, vec!["b", "a"]);
    }
}
