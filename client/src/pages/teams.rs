//! Teams page: team list, admin team creation, admin user assignment.

use leptos::prelude::*;

use crate::components::team_select::TeamSelect;
use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::session::use_session;
use crate::state::teams::TeamsState;
#[cfg(feature = "hydrate")]
use crate::state::teams::{ASSIGN_ERROR, CREATE_ERROR, FETCH_ERROR};

#[cfg(feature = "hydrate")]
async fn load_teams(
    authorization: &str,
    include_users: bool,
) -> Result<(Vec<crate::net::types::Team>, Vec<crate::net::types::User>), ApiError> {
    let teams = api::fetch_teams(authorization).await?;
    let users = if include_users { api::fetch_users(authorization).await? } else { Vec::new() };
    Ok((teams, users))
}

#[component]
pub fn TeamsPage() -> impl IntoView {
    let store = use_session();
    let state = RwSignal::new(TeamsState { loading: true, ..TeamsState::default() });
    let is_admin = move || store.session().is_some_and(|s| s.role.can_manage_teams());

    Effect::new(move || {
        let include_users = is_admin();
        let Some(authorization) = store.authorization() else {
            state.update(|s| {
                s.loading = false;
                s.error = Some(ApiError::MissingToken.to_string());
            });
            return;
        };
        state.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match load_teams(&authorization, include_users).await {
                Ok((teams, users)) => state.update(|s| {
                    s.teams = teams;
                    s.users = users;
                    s.error = None;
                    s.loading = false;
                }),
                Err(e) => {
                    leptos::logging::error!("teams fetch failed: {e}");
                    state.update(|s| {
                        s.error = Some(FETCH_ERROR.to_owned());
                        s.loading = false;
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (authorization, include_users);
    });

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let creating = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() || creating.get() {
            return;
        }
        let description_value = description.get().trim().to_owned();
        let Some(authorization) = store.authorization_untracked() else {
            return;
        };
        creating.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_team(&authorization, &name_value, &description_value).await {
                Ok(team) => {
                    state.update(|s| s.add_team(team));
                    name.set(String::new());
                    description.set(String::new());
                }
                Err(e) => {
                    leptos::logging::error!("create team failed: {e}");
                    state.update(|s| s.error = Some(CREATE_ERROR.to_owned()));
                }
            }
            creating.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (authorization, name_value, description_value);
    };

    let assign = move |user_id: i64, team_id: i64| {
        let Some(authorization) = store.authorization_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::assign_user_team(&authorization, user_id, team_id).await {
                Ok(()) => state.update(|s| s.assign_user(user_id, team_id)),
                Err(e) => {
                    leptos::logging::error!("assign user {user_id} to team {team_id} failed: {e}");
                    state.update(|s| s.error = Some(ASSIGN_ERROR.to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (authorization, user_id, team_id);
    };

    let teams = Signal::derive(move || state.with(|s| s.teams.clone()));

    view! {
        <div class="teams-page">
            <h1>"Teams"</h1>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="error-banner">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show when=is_admin>
                <form class="team-form" on:submit=on_create>
                    <h2>"Create Team"</h2>
                    <input
                        class="team-form__input"
                        type="text"
                        placeholder="Team name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="team-form__input"
                        type="text"
                        placeholder="Description (optional)"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || creating.get()>
                        "Create Team"
                    </button>
                </form>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="page-status">"Loading..."</div> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Members"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .with(|s| {
                                    s.teams
                                        .iter()
                                        .map(|t| (t.name.clone(), t.description.clone().unwrap_or_default(), s.member_count(t.id)))
                                        .collect::<Vec<_>>()
                                })
                                .into_iter()
                                .map(|(name, description, members)| {
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{description}</td>
                                            <td>{members}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>

                <Show when=is_admin>
                    <h2>"Assign Users"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Team"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .with(|s| s.users.clone())
                                    .into_iter()
                                    .map(|user| {
                                        let user_id = user.id;
                                        view! {
                                            <tr>
                                                <td>{user.email}</td>
                                                <td>{user.role.label()}</td>
                                                <td>
                                                    <TeamSelect
                                                        teams=teams
                                                        current=user.team_id
                                                        on_pick=move |team_id| assign(user_id, team_id)
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
