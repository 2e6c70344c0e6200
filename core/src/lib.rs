// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Agenda layout engine.
//!
//! Turns a flat collection of calendar events into the chronologically
//! ordered, hierarchically grouped list an agenda view scrolls through
//! (month headers, week headers, date headers, events), and locates
//! "today" inside that list for initial positioning.
//!
//! The engine is pure: the caller supplies the events and the reference
//! date, [`generate`] returns the item list, [`find_today_position`]
//! resolves the scroll anchor. No clock is read and no state survives a
//! call, so identical inputs always produce identical output.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod agenda;
mod calendar;
mod config;
mod datetime;
mod error;
mod event;

pub use crate::agenda::{
    AgendaItem, WeekSpan, day_span, events_on, find_today_position, generate, month_grid,
    weeks_for_month,
};
pub use crate::calendar::{CalendarInfo, filter_visible};
pub use crate::config::AgendaConfig;
pub use crate::datetime::{EventTime, YearMonth};
pub use crate::error::AgendaError;
pub use crate::event::Event;
