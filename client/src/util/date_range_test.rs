use super::*;
use time::macros::date;

const PICKED: (Date, Date) = (date!(2024 - 01 - 10), date!(2024 - 01 - 20));

#[test]
fn fixed_windows_span_exactly_n_days() {
    let today = date!(2024 - 03 - 15);
    for (selector, days) in [
        (RangeSelector::Last7Days, 7),
        (RangeSelector::Last30Days, 30),
        (RangeSelector::Last90Days, 90),
    ] {
        let range = DateRange::compute(selector, today, PICKED);
        assert_eq!(range.len_days(), days, "{selector:?}");
        assert_eq!(range.days().count(), usize::try_from(days).unwrap());
    }
}

#[test]
fn fixed_window_ends_tomorrow() {
    let today = date!(2024 - 03 - 15);
    let range = DateRange::compute(RangeSelector::Last7Days, today, PICKED);
    assert_eq!(range.end, date!(2024 - 03 - 16));
    assert_eq!(range.start, date!(2024 - 03 - 09));
    assert_eq!(range.start_param(), "2024-03-09");
    assert_eq!(range.end_param(), "2024-03-16");
}

#[test]
fn fixed_window_includes_today_and_excludes_tomorrow() {
    let today = date!(2024 - 03 - 15);
    let range = DateRange::compute(RangeSelector::Last30Days, today, PICKED);
    assert!(range.contains(today));
    assert!(!range.contains(range.end));
    assert!(range.contains(range.start));
}

#[test]
fn fixed_window_crosses_month_and_year_boundaries() {
    let range = DateRange::compute(RangeSelector::Last7Days, date!(2023 - 12 - 31), PICKED);
    assert_eq!(range.end_param(), "2024-01-01");
    assert_eq!(range.start_param(), "2023-12-25");

    let leap = DateRange::compute(RangeSelector::Last30Days, date!(2024 - 03 - 01), PICKED);
    assert_eq!(leap.end_param(), "2024-03-02");
    assert_eq!(leap.start_param(), "2024-02-01");
}

#[test]
fn custom_range_is_verbatim() {
    let range = DateRange::compute(RangeSelector::Custom, date!(2024 - 03 - 15), PICKED);
    assert_eq!(range.start_param(), "2024-01-10");
    assert_eq!(range.end_param(), "2024-01-20");
}

#[test]
fn inverted_custom_range_is_empty_not_normalized() {
    let picked = (date!(2024 - 01 - 20), date!(2024 - 01 - 10));
    let range = DateRange::compute(RangeSelector::Custom, date!(2024 - 03 - 15), picked);
    assert_eq!(range.start, picked.0);
    assert_eq!(range.len_days(), 0);
    assert_eq!(range.days().count(), 0);
}

#[test]
fn parse_day_reads_date_prefix() {
    assert_eq!(parse_day("2024-05-06"), Some(date!(2024 - 05 - 06)));
    assert_eq!(parse_day("2024-05-06T13:45:00+00:00"), Some(date!(2024 - 05 - 06)));
    assert_eq!(parse_day("05/06/2024"), None);
    assert_eq!(parse_day("2024"), None);
}

#[test]
fn selector_metadata() {
    assert_eq!(RangeSelector::default(), RangeSelector::Last7Days);
    assert_eq!(RangeSelector::Custom.days(), None);
    let labels: Vec<_> = RangeSelector::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["7D", "30D", "90D", "Custom"]);
}
