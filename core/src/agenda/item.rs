// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::YearMonth;

use super::week::WeekSpan;

/// One row-level unit of the generated agenda list.
///
/// [`crate::generate`] emits these strictly chronologically: the month
/// header first, then every week span of the month, and inside a week a
/// date header immediately followed by its events. A rendering layer maps
/// each variant to a visual row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaItem<E> {
    /// Section header for one calendar month of the window.
    MonthHeader(YearMonth),

    /// Header for one 7-day week span. Present even when the week has no
    /// events, so the view scrolls through a continuous timeline.
    WeekHeader(WeekSpan),

    /// Header for a date with at least one event. Dates without events
    /// never produce one.
    DateHeader(NaiveDate),

    /// A single calendar event, following the date header of its start.
    Event(E),
}
