// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::{AgendaItem, YearMonth};

/// Finds the index the agenda should initially scroll to for `today`.
///
/// The scan is scoped to today's month section and resolves through
/// tiers: the week header spanning today wins (a steadier anchor than
/// the date row itself), then the date header equal to today, then the
/// month header, and finally `0` when today's month is absent or the
/// list is empty. Never fails for a well-formed list.
pub fn find_today_position<E>(items: &[AgendaItem<E>], today: NaiveDate) -> usize {
    let month = YearMonth::from_date(today);
    let month_position = items
        .iter()
        .position(|item| matches!(item, AgendaItem::MonthHeader(m) if *m == month));
    let Some(month_position) = month_position else {
        tracing::debug!(%today, "today's month not in the agenda, anchoring on the top");
        return 0;
    };

    let mut week_position = None;
    let mut date_position = None;
    for (offset, item) in items[month_position + 1..].iter().enumerate() {
        let position = month_position + 1 + offset;
        match item {
            // Scan stays inside today's month section.
            AgendaItem::MonthHeader(_) => break,
            AgendaItem::WeekHeader(week) if week.contains(today) => {
                if week_position.is_none() {
                    week_position = Some(position);
                }
            }
            AgendaItem::DateHeader(date) if *date == today => {
                // An exact date settles the scan.
                date_position = Some(position);
                break;
            }
            _ => {}
        }
    }

    if let Some(position) = week_position {
        tracing::debug!(position, %today, "anchoring on today's week");
        return position;
    }
    if let Some(position) = date_position {
        tracing::debug!(position, %today, "anchoring on today's date");
        return position;
    }

    tracing::debug!(position = month_position, %today, "anchoring on today's month");
    month_position
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use crate::WeekSpan;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week(start: NaiveDate) -> WeekSpan {
        WeekSpan {
            start,
            end: start + Days::new(6),
        }
    }

    // The locator never needs the event payload.
    type Item = AgendaItem<()>;

    #[test]
    fn empty_list_anchors_on_the_top() {
        let items: Vec<Item> = vec![];
        assert_eq!(find_today_position(&items, date(2024, 6, 15)), 0);
    }

    #[test]
    fn missing_month_anchors_on_the_top() {
        let items: Vec<Item> = vec![AgendaItem::MonthHeader(YearMonth::new(2024, 5).unwrap())];
        assert_eq!(find_today_position(&items, date(2024, 6, 15)), 0);
    }

    #[test]
    fn week_wins_even_when_the_exact_date_is_present() {
        let items: Vec<Item> = vec![
            AgendaItem::MonthHeader(YearMonth::new(2024, 6).unwrap()),
            AgendaItem::WeekHeader(week(date(2024, 6, 10))),
            AgendaItem::DateHeader(date(2024, 6, 15)),
        ];
        assert_eq!(find_today_position(&items, date(2024, 6, 15)), 1);
    }

    #[test]
    fn date_is_used_when_no_week_contains_today() {
        // Malformed on purpose: a date header outside any week span.
        let items: Vec<Item> = vec![
            AgendaItem::MonthHeader(YearMonth::new(2024, 6).unwrap()),
            AgendaItem::WeekHeader(week(date(2024, 6, 3))),
            AgendaItem::DateHeader(date(2024, 6, 15)),
        ];
        assert_eq!(find_today_position(&items, date(2024, 6, 15)), 2);
    }

    #[test]
    fn bare_month_header_is_the_last_resort() {
        let items: Vec<Item> = vec![
            AgendaItem::MonthHeader(YearMonth::new(2024, 5).unwrap()),
            AgendaItem::MonthHeader(YearMonth::new(2024, 6).unwrap()),
            AgendaItem::MonthHeader(YearMonth::new(2024, 7).unwrap()),
        ];
        assert_eq!(find_today_position(&items, date(2024, 6, 15)), 1);
    }

    #[test]
    fn scan_stops_at_the_next_month_section() {
        // July's week spanning the 15th must not be picked for June 15.
        let items: Vec<Item> = vec![
            AgendaItem::MonthHeader(YearMonth::new(2024, 6).unwrap()),
            AgendaItem::MonthHeader(YearMonth::new(2024, 7).unwrap()),
            AgendaItem::WeekHeader(week(date(2024, 6, 10))),
        ];
        assert_eq!(find_today_position(&items, date(2024, 6, 15)), 0);
    }
}
