use super::*;
use time::macros::date;

fn team(id: i64) -> Team {
    Team { id, name: format!("team-{id}"), description: None, created_at: None, updated_at: None }
}

#[test]
fn new_state_is_loading_with_week_preset() {
    let state = DashboardState::new(date!(2024 - 03 - 15));
    assert!(state.loading);
    assert_eq!(state.selector, RangeSelector::Last7Days);
    assert_eq!(state.custom_start, date!(2024 - 03 - 08));
    assert_eq!(state.custom_end, date!(2024 - 03 - 15));
}

#[test]
fn latest_request_wins_regardless_of_resolution_order() {
    let mut state = DashboardState::new(date!(2024 - 03 - 15));
    let first = state.begin_request();
    let second = state.begin_request();

    assert!(state.finish_request(second, Ok((vec![team(2)], Vec::new()))));
    assert!(!state.finish_request(first, Ok((vec![team(1)], Vec::new()))));

    assert_eq!(state.teams, vec![team(2)]);
    assert!(!state.loading);
}

#[test]
fn stale_response_does_not_clear_loading() {
    let mut state = DashboardState::new(date!(2024 - 03 - 15));
    let first = state.begin_request();
    let _second = state.begin_request();

    state.finish_request(first, Err(FETCH_ERROR.to_owned()));

    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn error_is_recorded_and_cleared_on_next_success() {
    let mut state = DashboardState::new(date!(2024 - 03 - 15));
    let req = state.begin_request();
    state.finish_request(req, Err(FETCH_ERROR.to_owned()));
    assert_eq!(state.error.as_deref(), Some(FETCH_ERROR));

    let req = state.begin_request();
    state.finish_request(req, Ok((Vec::new(), Vec::new())));
    assert!(state.error.is_none());
}

#[test]
fn failure_after_success_drops_previous_range_data() {
    let mut state = DashboardState::new(date!(2024 - 03 - 15));
    let cost = CostRecord { id: 1, date: "2024-03-14".to_owned(), team_id: 1, service: "S3".to_owned(), amount: 9.0 };
    let req = state.begin_request();
    state.finish_request(req, Ok((vec![team(1)], vec![cost])));
    assert_eq!(state.costs.len(), 1);

    state.selector = RangeSelector::Last90Days;
    let req = state.begin_request();
    state.finish_request(req, Err(FETCH_ERROR.to_owned()));

    assert_eq!(state.error.as_deref(), Some(FETCH_ERROR));
    assert!(state.teams.is_empty());
    assert!(state.costs.is_empty());
    assert!(!state.loading);
}

#[test]
fn later_today_moves_fixed_window() {
    let state = DashboardState::new(date!(2024 - 03 - 15));
    let before = state.range(date!(2024 - 03 - 15));
    let after = state.range(date!(2024 - 03 - 16));

    assert_eq!(before.end_param(), "2024-03-16");
    assert_eq!(after.end_param(), "2024-03-17");
    assert_eq!(after.start_param(), "2024-03-10");
    assert_eq!(after.len_days(), 7);
}

#[test]
fn picking_custom_dates_switches_selector() {
    let today = date!(2024 - 03 - 15);
    let mut state = DashboardState::new(today);
    state.set_custom_start(date!(2024 - 02 - 01));
    state.set_custom_end(date!(2024 - 02 - 10));

    assert_eq!(state.selector, RangeSelector::Custom);
    let range = state.range(today);
    assert_eq!(range.start_param(), "2024-02-01");
    assert_eq!(range.end_param(), "2024-02-10");
}

#[test]
fn fixed_selector_ignores_custom_dates() {
    let today = date!(2024 - 03 - 15);
    let mut state = DashboardState::new(today);
    state.set_custom_start(date!(2020 - 01 - 01));
    state.selector = RangeSelector::Last30Days;
    assert_eq!(state.range(today).end_param(), "2024-03-16");
}
