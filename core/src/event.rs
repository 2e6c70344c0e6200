// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::EventTime;

/// Trait representing a calendar event supplied by the caller.
///
/// The layout engine itself reads only [`Event::start`] (as the grouping
/// key) and [`Event::end`] (validated but not positioned); the remaining
/// accessors are carried through untouched for the rendering layer.
pub trait Event {
    /// The unique identifier for the event.
    fn uid(&self) -> &str;

    /// The display title of the event.
    fn summary(&self) -> &str;

    /// The description of the event, if available.
    fn description(&self) -> Option<&str> {
        None
    }

    /// The location of the event, if available.
    fn location(&self) -> Option<&str> {
        None
    }

    /// The start of the event, if available.
    fn start(&self) -> Option<EventTime>;

    /// The end of the event, if available.
    fn end(&self) -> Option<EventTime>;

    /// Whether the event spans whole days rather than clock times.
    fn all_day(&self) -> bool {
        matches!(self.start(), Some(EventTime::Date(_)))
    }

    /// Identifier of the calendar this event belongs to.
    /// Opaque to the layout engine; used only for visibility filtering.
    fn calendar_id(&self) -> &str {
        ""
    }

    /// Display color of the calendar this event belongs to, if any.
    fn calendar_color(&self) -> Option<&str> {
        None
    }
}
