//! Dashboard page: cost chart and per-team totals over a selectable range.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It refetches whenever the active
//! range, the bearer token, or the refresh counter changes. Each fetch carries
//! a sequence number so a slow response for an old range cannot overwrite a
//! newer one.

use leptos::prelude::*;

use crate::components::cost_chart::CostChart;
use crate::net::api::ApiError;
use crate::state::dashboard::DashboardState;
#[cfg(feature = "hydrate")]
use crate::state::dashboard::FETCH_ERROR;
use crate::state::session::use_session;
use crate::util::costs::{daily_totals, format_usd, team_total};
use crate::util::date_range::{self, RangeSelector, format_day, parse_day};

#[cfg(feature = "hydrate")]
async fn load_dashboard(
    authorization: &str,
    team_id: Option<i64>,
    range: &date_range::DateRange,
) -> Result<(Vec<crate::net::types::Team>, Vec<crate::net::types::CostRecord>), ApiError> {
    let teams = crate::net::api::fetch_teams(authorization).await?;
    let costs = match team_id {
        Some(team_id) => crate::net::api::fetch_team_costs(authorization, team_id, range).await?,
        None => Vec::new(),
    };
    Ok((teams, costs))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_session();
    let state = RwSignal::new(DashboardState::new(date_range::today()));
    let refresh = RwSignal::new(0_u32);
    // Fixed windows end on the current tomorrow, not the one at mount.
    let range = Memo::new(move |_| {
        refresh.track();
        let today = date_range::today();
        state.with(|s| s.range(today))
    });

    Effect::new(move || {
        refresh.track();
        let range = range.get();
        let team_id = store.session().and_then(|s| s.team_id);
        let Some(authorization) = store.authorization() else {
            state.update(|s| {
                s.loading = false;
                s.error = Some(ApiError::MissingToken.to_string());
            });
            return;
        };
        let request = state.try_update(DashboardState::begin_request).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = load_dashboard(&authorization, team_id, &range).await.map_err(|e| {
                leptos::logging::error!("dashboard fetch failed: {e}");
                FETCH_ERROR.to_owned()
            });
            let applied = state.try_update(|s| s.finish_request(request, result)).unwrap_or_default();
            if !applied {
                leptos::logging::log!("dropping stale dashboard response #{request}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (authorization, team_id, range, request);
    });

    let totals = Signal::derive(move || state.with(|s| daily_totals(&s.costs, &range.get())));
    let is_custom = move || state.with(|s| s.selector == RangeSelector::Custom);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Cost Overview"</h1>
                <div class="range-picker">
                    {RangeSelector::ALL
                        .into_iter()
                        .map(|selector| {
                            let active = move || state.with(|s| s.selector == selector);
                            view! {
                                <button
                                    class="btn range-picker__option"
                                    class=("range-picker__option--active", active)
                                    on:click=move |_| state.update(|s| s.selector = selector)
                                >
                                    {selector.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                    <Show when=is_custom>
                        <input
                            class="range-picker__date"
                            type="date"
                            prop:value=move || state.with(|s| format_day(s.custom_start))
                            max=move || state.with(|s| format_day(s.custom_end))
                            on:input=move |ev| {
                                if let Some(day) = parse_day(&event_target_value(&ev)) {
                                    state.update(|s| s.set_custom_start(day));
                                }
                            }
                        />
                        <input
                            class="range-picker__date"
                            type="date"
                            prop:value=move || state.with(|s| format_day(s.custom_end))
                            min=move || state.with(|s| format_day(s.custom_start))
                            on:input=move |ev| {
                                if let Some(day) = parse_day(&event_target_value(&ev)) {
                                    state.update(|s| s.set_custom_end(day));
                                }
                            }
                        />
                    </Show>
                    <button class="btn" on:click=move |_| refresh.update(|n| *n += 1)>
                        "Refresh"
                    </button>
                </div>
            </header>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="error-banner">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading || s.error.is_some())
                fallback=move || {
                    view! {
                        <Show when=move || state.with(|s| s.loading)>
                            <div class="page-status">"Loading..."</div>
                        </Show>
                    }
                }
            >
                <CostChart totals=totals/>
                <section class="team-cards">
                    {move || {
                        let range = range.get();
                        state
                            .with(|s| {
                                s.teams
                                    .iter()
                                    .map(|team| (team.name.clone(), team_total(&s.costs, team.id, &range)))
                                    .collect::<Vec<_>>()
                            })
                            .into_iter()
                            .map(|(name, total)| {
                                view! {
                                    <div class="team-card">
                                        <h3 class="team-card__name">{name}</h3>
                                        <p class="team-card__total">{format_usd(total)}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </section>
            </Show>
        </div>
    }
}
