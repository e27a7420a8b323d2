//! Client-side cost aggregation for the dashboard chart and team cards.

#[cfg(test)]
#[path = "costs_test.rs"]
mod costs_test;

use time::{Date, Duration};

use super::date_range::{DateRange, parse_day};
use crate::net::types::CostRecord;

/// Summed cost for one chart bar, starting on `day`.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyTotal {
    pub day: Date,
    pub amount: f64,
}

/// Records whose date falls inside `range`. Undated or malformed records are skipped.
fn in_range<'a>(costs: &'a [CostRecord], range: &'a DateRange) -> impl Iterator<Item = &'a CostRecord> {
    costs
        .iter()
        .filter(move |c| parse_day(&c.date).is_some_and(|day| range.contains(day)))
}

/// Total spend for `team_id` inside `range`.
pub fn team_total(costs: &[CostRecord], team_id: i64, range: &DateRange) -> f64 {
    in_range(costs, range)
        .filter(|c| c.team_id == team_id)
        .map(|c| c.amount)
        .sum()
}

/// Most bars the chart draws. Longer ranges are grouped into multi-day buckets.
pub const MAX_CHART_BARS: i64 = 180;

/// Days per chart bar for a range of `len_days` days.
fn bucket_days(len_days: i64) -> i64 {
    ((len_days + MAX_CHART_BARS - 1) / MAX_CHART_BARS).max(1)
}

/// Chart totals for `range`, zero-filled where nothing was billed.
///
/// Up to [`MAX_CHART_BARS`] days this is one entry per day. Longer ranges get
/// equal multi-day buckets, each keyed by its first day.
pub fn daily_totals(costs: &[CostRecord], range: &DateRange) -> Vec<DailyTotal> {
    let len = range.len_days();
    let width = bucket_days(len);
    let buckets = (len + width - 1) / width;

    let mut totals: Vec<DailyTotal> = (0..buckets)
        .map_while(|i| range.start.checked_add(Duration::days(i * width)))
        .map(|day| DailyTotal { day, amount: 0.0 })
        .collect();
    for cost in costs {
        let Some(day) = parse_day(&cost.date) else {
            continue;
        };
        if !range.contains(day) {
            continue;
        }
        let Ok(index) = usize::try_from((day - range.start).whole_days() / width) else {
            continue;
        };
        if let Some(slot) = totals.get_mut(index) {
            slot.amount += cost.amount;
        }
    }
    totals
}

/// Format a dollar amount with two decimals, e.g. `$1234.50`.
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}
