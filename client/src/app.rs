//! Root component: wires the overlay controller to the page chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` reads the page configuration, provides the stage signal and button
//! actions as context, and (in the browser) owns the one
//! `AnimationController` for the page. The controller lives in a local-only
//! `StoredValue` so event handlers capture a `Copy` handle rather than the
//! `Rc`-based controller itself.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use overlay::{OverlayConfig, ScenarioId};

use crate::components::debug_overlay::DebugOverlay;
use crate::components::scenario_bar::ScenarioBar;
use crate::components::stage::Stage;
use crate::components::status_text::StatusText;
use crate::host::StageActions;
use crate::state::stage::{StageState, scenario_label};
use crate::util::page_config;

/// Scenario buttons in catalog order, labelled from each variant.
pub fn scenario_entries(config: &OverlayConfig) -> Vec<(ScenarioId, String)> {
    let catalog = config.catalog();
    catalog
        .ids()
        .into_iter()
        .map(|id| {
            let label = scenario_label(&id, &catalog.get(&id).display_name);
            (id, label)
        })
        .collect()
}

#[component]
pub fn App() -> impl IntoView {
    let config = page_config::load();
    let stage = RwSignal::new(StageState::new(config.initial_scenario.clone()));
    let actions = StageActions::new();
    provide_context(stage);
    provide_context(actions);

    let scenarios = scenario_entries(&config);
    let on_select = scenario_callback(&config, stage, actions);

    let container_id = config.container_id.clone();
    let status_id = config.status_id.clone();
    let overlay_id = config.debug_overlay_id.clone();
    let info_id = config.debug_info_id.clone();

    view! {
        <main class="celebration">
            <ScenarioBar scenarios=scenarios on_select=on_select />
            <Stage container_id=container_id />
            <StatusText element_id=status_id />
            <DebugOverlay overlay_id=overlay_id info_id=info_id />
        </main>
    }
}

/// Build the controller, start the first scenario, and return the
/// scenario-switch callback.
fn scenario_callback(config: &OverlayConfig, stage: RwSignal<StageState>, actions: StageActions) -> Callback<ScenarioId> {
    #[cfg(feature = "csr")]
    {
        use std::rc::Rc;

        use leptos::task::spawn_local;
        use overlay::{AnimationController, Services};

        use crate::engine::GeFactory;
        use crate::host::{BrowserNavigator, SignalHost, TimeoutScheduler};

        let services = Services {
            host: Rc::new(SignalHost::new(stage, actions, &config.container_id)),
            navigator: Rc::new(BrowserNavigator),
            scheduler: Rc::new(TimeoutScheduler),
        };
        let controller = StoredValue::new_local(AnimationController::new(GeFactory, services, config.clone()));

        spawn_local(async move {
            if let Some(controller) = controller.try_get_value() {
                let outcome = controller.start().await;
                log::info!("initial start: {outcome:?}");
            }
        });

        let _unload = window_event_listener(leptos::ev::beforeunload, move |_| {
            if let Some(controller) = controller.try_get_value() {
                controller.dispose();
            }
        });

        Callback::new(move |id: ScenarioId| {
            spawn_local(async move {
                if let Some(controller) = controller.try_get_value() {
                    let outcome = controller.change_scenario(id).await;
                    log::info!("scenario switch: {outcome:?}");
                }
            });
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, actions);
        Callback::new(move |id: ScenarioId| {
            log::debug!("no engine outside the browser; marking {id} active only");
            stage.update(|s| s.active_scenario = id);
        })
    }
}
