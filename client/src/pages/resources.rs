//! Resources page: AWS resources with their owning team.

use leptos::prelude::*;

use crate::components::team_select::TeamSelect;
use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::resources::FETCH_ERROR;
use crate::state::resources::ResourcesState;
use crate::state::session::use_session;

#[cfg(feature = "hydrate")]
async fn load_resources(
    authorization: &str,
) -> Result<(Vec<crate::net::types::AwsResource>, Vec<crate::net::types::Team>), ApiError> {
    let resources = api::fetch_resources(authorization).await?;
    let teams = api::fetch_teams(authorization).await?;
    Ok((resources, teams))
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let store = use_session();
    let state = RwSignal::new(ResourcesState::default());
    let can_assign = move || store.session().is_some_and(|s| s.role.can_assign_resources());

    Effect::new(move || {
        let Some(authorization) = store.authorization() else {
            state.update(|s| {
                s.loading = false;
                s.error = Some(ApiError::MissingToken.to_string());
            });
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match load_resources(&authorization).await {
                Ok((resources, teams)) => state.update(|s| {
                    s.resources = resources;
                    s.teams = teams;
                    s.error = None;
                    s.loading = false;
                }),
                Err(e) => {
                    leptos::logging::error!("resources fetch failed: {e}");
                    state.update(|s| {
                        s.error = Some(FETCH_ERROR.to_owned());
                        s.loading = false;
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = authorization;
    });

    // Failures leave the row as it was; nothing is shown to the user.
    let assign = move |resource_id: i64, team_id: i64| {
        let Some(authorization) = store.authorization_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::assign_resource_team(&authorization, resource_id, team_id).await {
                Ok(()) => state.update(|s| s.assign_team(resource_id, team_id)),
                Err(e) => leptos::logging::error!("assign resource {resource_id} to team {team_id} failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (authorization, resource_id, team_id);
    };

    let teams = Signal::derive(move || state.with(|s| s.teams.clone()));

    view! {
        <div class="resources-page">
            <h1>"AWS Resources"</h1>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="error-banner">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="page-status">"Loading..."</div> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Service"</th>
                            <th>"ARN"</th>
                            <th>"Team"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let disabled = !can_assign();
                            state
                                .with(|s| s.resources.clone())
                                .into_iter()
                                .map(|resource| {
                                    let resource_id = resource.id;
                                    view! {
                                        <tr>
                                            <td>{resource.name}</td>
                                            <td>{resource.service}</td>
                                            <td class="data-table__mono">{resource.arn}</td>
                                            <td>
                                                <TeamSelect
                                                    teams=teams
                                                    current=resource.team_id
                                                    disabled=disabled
                                                    on_pick=move |team_id| assign(resource_id, team_id)
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
        </div>
    }
}
