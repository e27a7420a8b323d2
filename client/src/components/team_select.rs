//! Team picker shared by the user and resource assignment tables.

#[cfg(test)]
#[path = "team_select_test.rs"]
mod team_select_test;

use leptos::prelude::*;

use crate::net::types::Team;

/// Team id chosen in the select, or `None` for the placeholder option.
pub fn parse_team_choice(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// `<select>` listing every team. The "Unassigned" entry can be displayed but
/// never chosen: the backend has no route for clearing an assignment.
#[component]
pub fn TeamSelect(
    #[prop(into)] teams: Signal<Vec<Team>>,
    current: Option<i64>,
    #[prop(optional)] disabled: bool,
    #[prop(into)] on_pick: Callback<i64>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        if let Some(team_id) = parse_team_choice(&event_target_value(&ev)) {
            on_pick.run(team_id);
        }
    };

    view! {
        <select class="team-select" disabled=disabled on:change=on_change>
            <option value="" disabled=true selected=current.is_none()>
                "Unassigned"
            </option>
            {move || {
                teams
                    .get()
                    .into_iter()
                    .map(|team| {
                        view! {
                            <option value=team.id.to_string() selected=current == Some(team.id)>
                                {team.name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
