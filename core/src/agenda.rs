// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod grid;
mod item;
mod layout;
mod position;
mod week;

pub use grid::{day_span, events_on, month_grid};
pub use item::AgendaItem;
pub use layout::generate;
pub use position::find_today_position;
pub use week::{WeekSpan, weeks_for_month};
