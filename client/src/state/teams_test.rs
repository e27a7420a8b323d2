use super::*;
use crate::net::types::Role;

fn user(id: i64, team_id: Option<i64>) -> User {
    User {
        id,
        email: format!("u{id}@example.com"),
        role: Role::Viewer,
        team_id,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

fn team(id: i64, name: &str) -> Team {
    Team { id, name: name.to_owned(), description: Some("desc".to_owned()), created_at: None, updated_at: None }
}

#[test]
fn add_team_appends_and_clears_error() {
    let mut state = TeamsState { teams: vec![team(1, "Platform")], error: Some(CREATE_ERROR.to_owned()), ..Default::default() };
    state.add_team(team(2, "Data"));
    assert_eq!(state.teams.len(), 2);
    assert_eq!(state.teams[1].name, "Data");
    assert!(state.error.is_none());
}

#[test]
fn assign_user_updates_only_that_user() {
    let mut state = TeamsState { users: vec![user(1, None), user(2, Some(5)), user(3, Some(5))], ..Default::default() };
    state.assign_user(2, 7);
    assert_eq!(state.users[0].team_id, None);
    assert_eq!(state.users[1].team_id, Some(7));
    assert_eq!(state.users[2].team_id, Some(5));
}

#[test]
fn assign_unknown_user_is_noop() {
    let mut state = TeamsState { users: vec![user(1, Some(1))], ..Default::default() };
    state.assign_user(99, 2);
    assert_eq!(state.users[0].team_id, Some(1));
}

#[test]
fn member_count_tracks_assignments() {
    let mut state = TeamsState { users: vec![user(1, Some(1)), user(2, Some(1)), user(3, None)], ..Default::default() };
    assert_eq!(state.member_count(1), 2);
    assert_eq!(state.member_count(2), 0);
    state.assign_user(3, 2);
    assert_eq!(state.member_count(2), 1);
}
