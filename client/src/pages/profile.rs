//! Profile page for the signed-in user.

use leptos::prelude::*;

use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::profile::FETCH_ERROR;
use crate::state::profile::ProfileState;
use crate::state::session::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_session();
    let state = RwSignal::new(ProfileState::default());

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
            let result = async {
                let user = api::fetch_me(&authorization).await?;
                let teams = api::fetch_teams(&authorization).await?;
                Ok::<_, ApiError>((user, teams))
            }
            .await;
            match result {
                Ok((user, teams)) => state.update(|s| {
                    s.user = Some(user);
                    s.teams = teams;
                    s.error = None;
                    s.loading = false;
                }),
                Err(e) => {
                    leptos::logging::error!("profile fetch failed: {e}");
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

    let field = move |read: fn(&ProfileState) -> String| move || state.with(read);

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="page-status">"Loading..."</div> }
            >
                <Show
                    when=move || state.with(|s| s.error.is_none())
                    fallback=move || {
                        view! {
                            <p class="error-banner">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                        }
                    }
                >
                    <dl class="profile-card">
                        <dt>"Email"</dt>
                        <dd>{field(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}</dd>
                        <dt>"Role"</dt>
                        <dd>{field(|s| s.user.as_ref().map(|u| u.role.label().to_owned()).unwrap_or_default())}</dd>
                        <dt>"Team"</dt>
                        <dd>{field(ProfileState::team_name)}</dd>
                        <dt>"Account Status"</dt>
                        <dd>{field(|s| s.status_label().to_owned())}</dd>
                        <dt>"Member Since"</dt>
                        <dd>
                            {field(|s| {
                                s.user.as_ref().and_then(|u| u.member_since()).unwrap_or_default().to_owned()
                            })}
                        </dd>
                    </dl>
                </Show>
            </Show>
        </div>
    }
}
