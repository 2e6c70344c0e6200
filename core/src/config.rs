// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::Weekday;
use serde::de;

use crate::AgendaError;

/// Configuration for the agenda layout engine.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct AgendaConfig {
    /// How many months the default window extends to either side of
    /// today. The window grows past this when events fall outside it,
    /// and today's month is always covered regardless of the value.
    #[serde(default = "default_window_months")]
    pub window_months: u32,

    /// The weekday that starts a week span. Accepts full or abbreviated
    /// English names in configuration files ("monday", "mon", ...).
    #[serde(
        default = "default_first_day_of_week",
        deserialize_with = "deserialize_weekday"
    )]
    pub first_day_of_week: Weekday,
}

impl AgendaConfig {
    /// Validates the configuration.
    pub fn normalize(&self) -> Result<(), AgendaError> {
        if self.window_months == 0 {
            return Err(AgendaError::EmptyWindow);
        }
        Ok(())
    }
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            window_months: default_window_months(),
            first_day_of_week: default_first_day_of_week(),
        }
    }
}

fn default_window_months() -> u32 {
    12
}

fn default_first_day_of_week() -> Weekday {
    Weekday::Mon
}

fn deserialize_weekday<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct WeekdayVisitor;

    impl<'de> de::Visitor<'de> for WeekdayVisitor {
        type Value = Weekday;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str(r#"a weekday name like "monday" or "mon""#)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .parse()
                .map_err(|_| de::Error::custom(format!("unknown weekday: {value}")))
        }
    }

    deserializer.deserialize_str(WeekdayVisitor)
}
