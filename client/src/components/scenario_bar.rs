//! Scenario switcher buttons with an active-state highlight.

use leptos::prelude::*;
use overlay::ScenarioId;

use crate::state::stage::StageState;

/// One button per scenario; the active one carries the `active` class.
#[component]
pub fn ScenarioBar(scenarios: Vec<(ScenarioId, String)>, on_select: Callback<ScenarioId>) -> impl IntoView {
    let stage = expect_context::<RwSignal<StageState>>();

    let buttons = scenarios
        .into_iter()
        .map(|(id, label)| {
            let active_id = id.clone();
            let is_active = move || stage.with(|s| s.active_scenario == active_id);
            let data_scenario = id.to_string();
            view! {
                <button
                    class="scenario-btn"
                    class:active=is_active
                    data-scenario=data_scenario
                    on:click=move |_| on_select.run(id.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! { <nav class="scenario-bar">{buttons}</nav> }
}
