//! Teams page state: team list, user list (admins only), and mutations.

#[cfg(test)]
#[path = "teams_test.rs"]
mod teams_test;

use crate::net::types::{Team, User};

pub const FETCH_ERROR: &str = "Failed to fetch teams data";
pub const CREATE_ERROR: &str = "Failed to create team";
pub const ASSIGN_ERROR: &str = "Failed to assign user to team";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamsState {
    pub teams: Vec<Team>,
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TeamsState {
    /// Append a newly created team.
    pub fn add_team(&mut self, team: Team) {
        self.teams.push(team);
        self.error = None;
    }

    /// Reflect a successful reassignment of `user_id` to `team_id`.
    pub fn assign_user(&mut self, user_id: i64, team_id: i64) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.team_id = Some(team_id);
        }
        self.error = None;
    }

    /// Number of loaded users assigned to `team_id`.
    pub fn member_count(&self, team_id: i64) -> usize {
        self.users.iter().filter(|u| u.team_id == Some(team_id)).count()
    }
}
