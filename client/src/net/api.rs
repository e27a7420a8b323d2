//! REST API helpers for the CostLens backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each authenticated
//! call carrying the session's `Authorization` header.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx status collapses to [`ApiError::Status`]; callers map errors
//! to a fixed per-page message and never retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AwsResource, CostRecord, Session, Team, User};
use crate::util::date_range::DateRange;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    MissingToken,
    #[error("request failed: {0}")]
    Request(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn user_team_endpoint(user_id: i64, team_id: i64) -> String {
    format!("/users/{user_id}/team/{team_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn resource_team_endpoint(resource_id: i64, team_id: i64) -> String {
    format!("/resources/{resource_id}/team/{team_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn team_costs_endpoint(team_id: i64) -> String {
    format!("/teams/{team_id}/costs")
}

#[cfg(any(test, feature = "hydrate"))]
fn cost_query(range: &DateRange) -> [(&'static str, String); 2] {
    [("start_date", range.start_param()), ("end_date", range.end_param())]
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::ApiError;
    use crate::config::api_url;

    pub(super) fn get(path: &str, authorization: &str) -> RequestBuilder {
        Request::get(&api_url(path)).header("Authorization", authorization)
    }

    pub(super) fn put(path: &str, authorization: &str) -> RequestBuilder {
        Request::put(&api_url(path)).header("Authorization", authorization)
    }

    pub(super) fn post(path: &str) -> RequestBuilder {
        Request::post(&api_url(path))
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        check(resp)
    }

    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder.json(body).map_err(|e| ApiError::Request(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        check(resp)
    }

    fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() { Ok(resp) } else { Err(ApiError::Status(resp.status())) }
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Exchange credentials for a session via `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects the
/// credentials, or the response is not a session payload.
pub async fn login(email: &str, password: &str) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest { email, password };
        let resp = http::send_json(http::post("/login"), &body).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current user's profile from `GET /users/me`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or decode failure.
pub async fn fetch_me(authorization: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get("/users/me", authorization)).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Unavailable)
    }
}

/// List all users via `GET /users` (admin only).
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or decode failure.
pub async fn fetch_users(authorization: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get("/users", authorization)).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Unavailable)
    }
}

/// Move a user to another team via `PUT /users/{id}/team/{team_id}`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn assign_user_team(authorization: &str, user_id: i64, team_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::send(http::put(&user_team_endpoint(user_id, team_id), authorization)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, user_id, team_id);
        Err(ApiError::Unavailable)
    }
}

/// List teams via `GET /teams`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or decode failure.
pub async fn fetch_teams(authorization: &str) -> Result<Vec<Team>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get("/teams", authorization)).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Unavailable)
    }
}

/// Create a team via `POST /teams`, returning the stored team.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or decode failure.
pub async fn create_team(authorization: &str, name: &str, description: &str) -> Result<Team, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::CreateTeamRequest { name, description };
        let builder = http::post("/teams").header("Authorization", authorization);
        let resp = http::send_json(builder, &body).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, name, description);
        Err(ApiError::Unavailable)
    }
}

/// Cost records for one team within `range` via `GET /teams/{id}/costs`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or decode failure.
pub async fn fetch_team_costs(authorization: &str, team_id: i64, range: &DateRange) -> Result<Vec<CostRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::get(&team_costs_endpoint(team_id), authorization).query(cost_query(range));
        let resp = http::send(builder).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, team_id, range);
        Err(ApiError::Unavailable)
    }
}

/// List AWS resources via `GET /resources`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or decode failure.
pub async fn fetch_resources(authorization: &str) -> Result<Vec<AwsResource>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send(http::get("/resources", authorization)).await?;
        http::decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Unavailable)
    }
}

/// Move a resource to another team via `PUT /resources/{id}/team/{team_id}`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn assign_resource_team(authorization: &str, resource_id: i64, team_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::send(http::put(&resource_team_endpoint(resource_id, team_id), authorization)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (authorization, resource_id, team_id);
        Err(ApiError::Unavailable)
    }
}
