//! Resources page state.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use crate::net::types::{AwsResource, Team};

pub const FETCH_ERROR: &str = "Failed to fetch resources data";

#[derive(Clone, Debug, PartialEq)]
pub struct ResourcesState {
    pub resources: Vec<AwsResource>,
    pub teams: Vec<Team>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ResourcesState {
    fn default() -> Self {
        Self { resources: Vec::new(), teams: Vec::new(), loading: true, error: None }
    }
}

impl ResourcesState {
    /// Reflect a successful reassignment; every other resource is untouched.
    pub fn assign_team(&mut self, resource_id: i64, team_id: i64) {
        if let Some(resource) = self.resources.iter_mut().find(|r| r.id == resource_id) {
            resource.team_id = Some(team_id);
        }
    }
}
