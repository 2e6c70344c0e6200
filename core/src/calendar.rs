// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use crate::Event;

/// Metadata for one calendar a set of events may come from.
///
/// Opaque to the layout engine; the surrounding system uses it to build
/// visibility pickers and to color event rows.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct CalendarInfo {
    /// Opaque unique identifier.
    pub id: String,

    /// Machine name of the calendar.
    pub name: String,

    /// Human-readable name shown in pickers.
    pub display_name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Display color, in whatever form the rendering layer understands.
    #[serde(default = "default_color")]
    pub color: String,

    /// Whether the calendar is offered for display at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_color() -> String {
    "#2196F3".to_owned()
}

fn default_enabled() -> bool {
    true
}

/// Filters events down to the calendars the user has visible.
///
/// An empty set means no preference has been expressed yet, and every
/// event passes through. The caller applies this before
/// [`crate::generate`]; the engine itself never filters.
pub fn filter_visible<E>(events: &[E], visible: &HashSet<String>) -> Vec<E>
where
    E: Event + Clone,
{
    if visible.is_empty() {
        return events.to_vec();
    }

    let filtered: Vec<E> = events
        .iter()
        .filter(|e| visible.contains(e.calendar_id()))
        .cloned()
        .collect();
    tracing::debug!(
        visible = filtered.len(),
        total = events.len(),
        "filtered events by calendar visibility"
    );
    filtered
}
