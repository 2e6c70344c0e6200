// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate, NaiveDateTime};

use crate::{AgendaConfig, AgendaError, AgendaItem, Event, YearMonth};

use super::week::weeks_for_month;

/// Generates the agenda presentation list for the given events.
///
/// Events are stably sorted by start and grouped by their civil start
/// date; the month window covers `today` plus/minus the configured
/// number of months, widened when events fall outside it. Every month of
/// the window gets its header and all of its week spans, and each date
/// with at least one event gets a date header followed by its events.
///
/// The output is recomputed from scratch on every call and depends only
/// on the arguments, so the caller re-invokes it whenever the event set
/// changes.
///
/// # Errors
///
/// Fails fast with [`AgendaError`] when an event has no start or no end,
/// or when the configuration is unusable; no partial list is returned.
/// Zero events is not an error and yields the skeleton window.
pub fn generate<E>(
    events: &[E],
    today: NaiveDate,
    config: &AgendaConfig,
) -> Result<Vec<AgendaItem<E>>, AgendaError>
where
    E: Event + Clone,
{
    config.normalize()?;

    let mut dated: Vec<(NaiveDateTime, E)> = Vec::with_capacity(events.len());
    for event in events {
        let start = event.start().ok_or_else(|| AgendaError::MissingStart {
            uid: event.uid().to_owned(),
        })?;
        if event.end().is_none() {
            return Err(AgendaError::MissingEnd {
                uid: event.uid().to_owned(),
            });
        }
        dated.push((start.sort_key(), event.clone()));
    }

    // Stable: events starting at the same instant keep caller order.
    dated.sort_by_key(|&(key, _)| key);

    let mut by_date: BTreeMap<NaiveDate, Vec<E>> = BTreeMap::new();
    for (key, event) in dated {
        by_date.entry(key.date()).or_default().push(event);
    }

    let earliest = by_date.keys().next().copied();
    let latest = by_date.keys().next_back().copied();
    let (first_month, last_month) = month_window(earliest, latest, today, config.window_months);
    tracing::debug!(
        %first_month,
        %last_month,
        %today,
        events = events.len(),
        "generating agenda window"
    );

    let mut items = Vec::new();
    let mut month = first_month;
    while month <= last_month {
        items.push(AgendaItem::MonthHeader(month));

        for week in weeks_for_month(month, config.first_day_of_week) {
            items.push(AgendaItem::WeekHeader(week));

            for (&date, events) in by_date.range(week.start..=week.end) {
                items.push(AgendaItem::DateHeader(date));
                items.extend(events.iter().cloned().map(AgendaItem::Event));
            }
        }

        month = month.succ();
    }

    tracing::debug!(items = items.len(), "agenda generated");
    Ok(items)
}

/// Derives the inclusive month range the agenda covers.
///
/// The default range is `today` plus/minus `window_months`, snapped to
/// month bounds. An event before the range pulls the lower bound to its
/// month start minus one month of buffer; an event after it pushes the
/// upper bound symmetrically.
fn month_window(
    earliest: Option<NaiveDate>,
    latest: Option<NaiveDate>,
    today: NaiveDate,
    window_months: u32,
) -> (YearMonth, YearMonth) {
    let this_month = YearMonth::from_date(today);
    let lower_probe = today - Months::new(window_months);
    let upper_probe = today + Months::new(window_months);

    let mut first = match earliest {
        Some(d) if d < lower_probe => YearMonth::from_date(d).pred(),
        _ => YearMonth::from_date(lower_probe),
    };
    let mut last = match latest {
        Some(d) if d > upper_probe => YearMonth::from_date(d).succ(),
        _ => YearMonth::from_date(upper_probe),
    };

    // Today's month is always part of the window, events or not.
    if first > this_month {
        first = this_month.pred();
    }
    if last < this_month {
        last = this_month.succ();
    }

    (first, last)
}
