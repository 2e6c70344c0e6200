// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by the layout engine on malformed input.
///
/// The engine fails fast: no partial item list is ever returned. An empty
/// event collection is not an error, and [`crate::find_today_position`]
/// never fails at all; it degrades through its fallback tiers instead.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgendaError {
    /// An event carries no start, so it cannot be placed on any date.
    #[error("event '{uid}' has no start")]
    MissingStart {
        /// The uid of the offending event.
        uid: String,
    },

    /// An event carries no end.
    #[error("event '{uid}' has no end")]
    MissingEnd {
        /// The uid of the offending event.
        uid: String,
    },

    /// The configured window does not cover a single month.
    #[error("window_months must be at least 1")]
    EmptyWindow,
}
