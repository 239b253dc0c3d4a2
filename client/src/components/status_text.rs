//! Status line for loading, degrade, and navigation notices.

use leptos::prelude::*;

use crate::state::stage::{StageState, tone_class};

#[component]
pub fn StatusText(element_id: String) -> impl IntoView {
    let stage = expect_context::<RwSignal<StageState>>();

    let visible = move || stage.with(|s| s.status.is_some());
    let class = move || stage.with(|s| s.status.as_ref().map_or("status", |line| tone_class(line.tone)));
    let text = move || stage.with(|s| s.status.as_ref().map(|line| line.text.clone()).unwrap_or_default());

    view! {
        <p id=element_id class=class style:display=move || if visible() { "block" } else { "none" }>
            {text}
        </p>
    }
}
