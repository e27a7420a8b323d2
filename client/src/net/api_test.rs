use super::*;
use time::macros::date;

#[test]
fn user_team_endpoint_formats_expected_path() {
    assert_eq!(user_team_endpoint(4, 9), "/users/4/team/9");
}

#[test]
fn resource_team_endpoint_formats_expected_path() {
    assert_eq!(resource_team_endpoint(12, 3), "/resources/12/team/3");
}

#[test]
fn team_costs_endpoint_formats_expected_path() {
    assert_eq!(team_costs_endpoint(5), "/teams/5/costs");
}

#[test]
fn cost_query_uses_iso_dates() {
    let range = DateRange { start: date!(2024 - 01 - 01), end: date!(2024 - 01 - 08) };
    let [start, end] = cost_query(&range);
    assert_eq!(start, ("start_date", "2024-01-01".to_owned()));
    assert_eq!(end, ("end_date", "2024-01-08".to_owned()));
}

#[test]
fn missing_token_message_matches_page_text() {
    assert_eq!(ApiError::MissingToken.to_string(), "Authentication required");
}

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(401).to_string(), "request failed with status 401");
}
