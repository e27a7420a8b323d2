//! REST DTOs for the CostLens backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON so serde round-trips stay lossless.
//! Timestamps stay as strings because the client only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Determines which UI actions are enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    TeamLead,
    #[default]
    Viewer,
}

impl Role {
    /// Wire name, as sent by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::TeamLead => "team_lead",
            Self::Viewer => "viewer",
        }
    }

    /// Human-readable label for profile and user tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::TeamLead => "Team Lead",
            Self::Viewer => "Viewer",
        }
    }

    /// Admins create teams and move users between them.
    pub fn can_manage_teams(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Admins and team leads may reassign resources.
    pub fn can_assign_resources(self) -> bool {
        matches!(self, Self::Admin | Self::TeamLead)
    }
}

fn role_or_default<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Role>::deserialize(deserializer)?.unwrap_or_default())
}

/// The authenticated identity returned by `POST /login`.
///
/// Serialized verbatim into local storage and the `user` cookie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub email: String,
    #[serde(default, deserialize_with = "role_or_default")]
    pub role: Role,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Session {
    /// Value for the `Authorization` header, or `None` when no token was issued.
    pub fn authorization(&self) -> Option<String> {
        let token = self.access_token.as_deref().filter(|t| !t.is_empty())?;
        let scheme = match self.token_type.as_deref().map(str::trim) {
            Some(kind) if !kind.is_empty() => kind,
            _ => "Bearer",
        };
        Some(format!("{scheme} {token}"))
    }
}

fn default_active() -> bool {
    true
}

/// A user account as listed by `/users` or `/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default, deserialize_with = "role_or_default")]
    pub role: Role,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// Calendar date portion of `created_at` (`YYYY-MM-DD`), for "member since".
    pub fn member_since(&self) -> Option<&str> {
        self.created_at.as_deref().and_then(|ts| ts.get(..10))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AwsResource {
    pub id: i64,
    pub name: String,
    pub arn: String,
    pub service: String,
    #[serde(default)]
    pub team_id: Option<i64>,
}

/// One billed amount for a team, service, and day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub id: i64,
    /// ISO date or datetime; only the leading `YYYY-MM-DD` is significant.
    pub date: String,
    pub team_id: i64,
    pub service: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateTeamRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
}
