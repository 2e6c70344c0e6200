// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use chrono::{Datelike, NaiveDate};

/// A civil year-month pair, the unit the agenda window is derived and
/// iterated in.
///
/// Ordering is chronological, so month ranges can be walked with
/// [`YearMonth::succ`] and compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month, or `None` if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The year-month the given date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("the 1st must exist in every month")
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.succ()
            .first_day()
            .pred_opt()
            .expect("the day before the 1st must exist")
    }

    /// The month after this one.
    pub fn succ(&self) -> Self {
        match self.month {
            12 => Self {
                year: self.year + 1,
                month: 1,
            },
            _ => Self {
                year: self.year,
                month: self.month + 1,
            },
        }
    }

    /// The month before this one.
    pub fn pred(&self) -> Self {
        match self.month {
            1 => Self {
                year: self.year - 1,
                month: 12,
            },
            _ => Self {
                year: self.year,
                month: self.month - 1,
            },
        }
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
