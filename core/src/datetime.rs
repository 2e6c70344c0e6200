// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod month;
mod time;

pub use month::YearMonth;
pub use time::EventTime;
