// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::YearMonth;

/// An inclusive 7-day span aligned to the configured first day of week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSpan {
    /// First day of the span.
    pub start: NaiveDate,

    /// Last day of the span, always `start + 6`.
    pub end: NaiveDate,
}

impl WeekSpan {
    fn at(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    /// Whether the span contains the given date, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Splits a month into the week spans that overlap it.
///
/// The first span may start in the previous month and the last may end in
/// the next one; every span is exactly seven days and consecutive spans
/// are contiguous. A week straddling a month boundary is returned for
/// both months it overlaps.
pub fn weeks_for_month(month: YearMonth, first_day_of_week: Weekday) -> Vec<WeekSpan> {
    let first = month.first_day();
    let last = month.last_day();

    let mut weeks = Vec::new();
    let mut start = rollback_to_weekday(first, first_day_of_week);
    while start <= last {
        let week = WeekSpan::at(start);
        if week.end >= first {
            weeks.push(week);
        }
        start = start + Days::new(7);
    }

    weeks
}

/// The most recent date on or before `date` falling on `weekday`.
fn rollback_to_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = date.weekday().days_since(weekday);
    date - Days::new(u64::from(offset))
}
