//! Dashboard page state: teams, cost records, and the selected range.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use time::Date;

use crate::net::types::{CostRecord, Team};
use crate::util::date_range::{DateRange, RangeSelector};

pub const FETCH_ERROR: &str = "Failed to fetch dashboard data";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub teams: Vec<Team>,
    pub costs: Vec<CostRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub selector: RangeSelector,
    /// Custom picker values; only used when `selector` is `Custom`.
    pub custom_start: Date,
    pub custom_end: Date,
    /// Sequence number of the most recently issued fetch.
    pub latest_request: u64,
}

impl DashboardState {
    /// Initial state with the custom picker preset to the last week.
    pub fn new(today: Date) -> Self {
        Self {
            teams: Vec::new(),
            costs: Vec::new(),
            loading: true,
            error: None,
            selector: RangeSelector::default(),
            custom_start: today.saturating_sub(time::Duration::days(7)),
            custom_end: today,
            latest_request: 0,
        }
    }

    /// Active interval for the current selector.
    pub fn range(&self, today: Date) -> DateRange {
        DateRange::compute(self.selector, today, (self.custom_start, self.custom_end))
    }

    /// Mark a new fetch as in flight and return its sequence number.
    pub fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.latest_request
    }

    /// Whether a response for `request` is still wanted.
    pub fn is_current(&self, request: u64) -> bool {
        request == self.latest_request
    }

    /// Store a fetch result. Responses to superseded requests are dropped.
    ///
    /// A failure discards the previous range's data so it is never shown
    /// against the newly selected range.
    pub fn finish_request(&mut self, request: u64, result: Result<(Vec<Team>, Vec<CostRecord>), String>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        match result {
            Ok((teams, costs)) => {
                self.teams = teams;
                self.costs = costs;
                self.error = None;
            }
            Err(message) => {
                self.teams.clear();
                self.costs.clear();
                self.error = Some(message);
            }
        }
        self.loading = false;
        true
    }

    /// Set custom start; the picker keeps it on or before the end date.
    pub fn set_custom_start(&mut self, day: Date) {
        self.custom_start = day;
        self.selector = RangeSelector::Custom;
    }

    /// Set custom end; the picker keeps it on or after the start date.
    pub fn set_custom_end(&mut self, day: Date) {
        self.custom_end = day;
        self.selector = RangeSelector::Custom;
    }
}
