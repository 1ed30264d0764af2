//! Date of birth picker
//!
//! The date field never takes typed input. Its value comes from a picker that
//! only offers dates between `max_age` and `min_age` years before today, and
//! writes the selection back as `dd.MM.yyyy`.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::ConfigError;

/// Display format of a picked date
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Youngest selectable age in years
pub const DEFAULT_MIN_AGE_YEARS: u32 = 8;

/// Oldest selectable age in years
pub const DEFAULT_MAX_AGE_YEARS: u32 = 100;

/// Selectable age range of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBounds {
    pub min_years: u32,
    pub max_years: u32,
}

impl Default for AgeBounds {
    fn default() -> Self {
        Self {
            min_years: DEFAULT_MIN_AGE_YEARS,
            max_years: DEFAULT_MAX_AGE_YEARS,
        }
    }
}

impl AgeBounds {
    pub fn new(min_years: u32, max_years: u32) -> Result<Self, ConfigError> {
        if min_years >= max_years {
            return Err(ConfigError::InvalidValue {
                field: "picker.min_age_years".to_string(),
                reason: format!(
                    "must be below picker.max_age_years ({} >= {})",
                    min_years, max_years
                ),
            });
        }
        Ok(Self {
            min_years,
            max_years,
        })
    }
}

/// Which part of the date a step changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    Day,
    Month,
    Year,
}

/// Picker state: the allowed window and the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    earliest: NaiveDate,
    latest: NaiveDate,
    selected: NaiveDate,
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}

impl DatePicker {
    /// Create a picker for `today`; the initial selection is the latest
    /// allowed date
    pub fn new(today: NaiveDate, bounds: AgeBounds) -> Self {
        let earliest = years_before(today, bounds.max_years);
        let latest = years_before(today, bounds.min_years);
        Self {
            earliest,
            latest,
            selected: latest,
        }
    }

    /// Create a picker starting at `selected`, clamped into the window
    pub fn with_selection(today: NaiveDate, bounds: AgeBounds, selected: NaiveDate) -> Self {
        let picker = Self::new(today, bounds);
        Self {
            selected: picker.clamp(selected),
            ..picker
        }
    }

    pub fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    pub fn latest(&self) -> NaiveDate {
        self.latest
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Move the selection by `delta` units, clamping to the window
    pub fn step(&self, unit: DateUnit, delta: i32) -> Self {
        let moved = match unit {
            DateUnit::Day => self
                .selected
                .checked_add_signed(chrono::Duration::days(i64::from(delta))),
            DateUnit::Month => shift_months(self.selected, delta),
            DateUnit::Year => shift_months(self.selected, delta.saturating_mul(12)),
        };

        let selected = match moved {
            Some(date) => self.clamp(date),
            None if delta < 0 => self.earliest,
            None => self.latest,
        };

        Self {
            selected,
            ..self.clone()
        }
    }

    /// The selection formatted for the date field
    pub fn formatted(&self) -> String {
        format_date(self.selected)
    }

    fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.earliest, self.latest)
    }
}

fn shift_months(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Render a date as `dd.MM.yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `dd.MM.yyyy` field value back into a date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Age in whole years on `today` of someone born on `birth`
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
