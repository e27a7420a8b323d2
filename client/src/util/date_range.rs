//! Date-range calculator for the cost dashboard.
//!
//! Produces half-open `[start, end)` intervals. Fixed windows end at tomorrow
//! (local date) so they cover exactly N calendar days through today. Custom
//! ranges pass the picked dates through unchanged.

#[cfg(test)]
#[path = "date_range_test.rs"]
mod date_range_test;

use time::macros::format_description;
use time::{Date, Duration};

/// Symbolic range chosen with the dashboard's range buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangeSelector {
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
    Custom,
}

impl RangeSelector {
    pub const ALL: [Self; 4] = [Self::Last7Days, Self::Last30Days, Self::Last90Days, Self::Custom];

    /// Window length for the fixed selectors.
    pub fn days(self) -> Option<i64> {
        match self {
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
            Self::Last90Days => Some(90),
            Self::Custom => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Last7Days => "7D",
            Self::Last30Days => "30D",
            Self::Last90Days => "90D",
            Self::Custom => "Custom",
        }
    }
}

/// Half-open calendar interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Compute the interval for `selector`.
    ///
    /// `today` is the caller's local date; `custom` is the picker's
    /// `(start, end)` pair and is only consulted for [`RangeSelector::Custom`].
    pub fn compute(selector: RangeSelector, today: Date, custom: (Date, Date)) -> Self {
        match selector.days() {
            Some(days) => {
                let end = today.saturating_add(Duration::DAY);
                Self { start: end.saturating_sub(Duration::days(days)), end }
            }
            None => Self { start: custom.0, end: custom.1 },
        }
    }

    /// `start_date` query parameter.
    pub fn start_param(&self) -> String {
        format_day(self.start)
    }

    /// `end_date` query parameter.
    pub fn end_param(&self) -> String {
        format_day(self.end)
    }

    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day < self.end
    }

    /// Number of calendar days in the interval (zero when `end <= start`).
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).whole_days().max(0)
    }

    /// Every day in the interval, in order.
    pub fn days(&self) -> impl Iterator<Item = Date> + use<> {
        let start = self.start;
        let end = self.end;
        std::iter::successors(Some(start), |day| day.next_day()).take_while(move |day| *day < end)
    }
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_day(day: Date) -> String {
    day.to_string()
}

/// Parse a `YYYY-MM-DD` prefix, as found in date inputs and cost records.
pub fn parse_day(raw: &str) -> Option<Date> {
    let head = raw.trim().get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Current local calendar date.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        let year = i32::try_from(now.get_full_year()).ok();
        if let (Some(year), Some(month), Some(day)) = (year, month, day) {
            if let Ok(date) = Date::from_calendar_date(year, month, day) {
                return date;
            }
        }
        time::OffsetDateTime::now_utc().date()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
            .date()
    }
}
