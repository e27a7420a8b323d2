//! Profile page state.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Team, User};

pub const FETCH_ERROR: &str = "Failed to fetch data";
pub const UNASSIGNED: &str = "Not assigned";

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileState {
    pub user: Option<User>,
    pub teams: Vec<Team>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self { user: None, teams: Vec::new(), loading: true, error: None }
    }
}

impl ProfileState {
    /// Name of the user's team, or "Not assigned".
    pub fn team_name(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.team_id)
            .and_then(|id| self.teams.iter().find(|t| t.id == id))
            .map_or_else(|| UNASSIGNED.to_owned(), |t| t.name.clone())
    }

    pub fn status_label(&self) -> &'static str {
        if self.user.as_ref().is_some_and(|u| u.is_active) { "Active" } else { "Inactive" }
    }
}
