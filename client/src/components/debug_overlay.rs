//! Diagnostic overlay shown briefly after a successful load.

use leptos::prelude::*;

use crate::state::stage::{StageState, debug_rows};

#[component]
pub fn DebugOverlay(overlay_id: String, info_id: String) -> impl IntoView {
    let stage = expect_context::<RwSignal<StageState>>();

    let visible = move || stage.with(|s| s.debug.is_some());
    let rows = move || {
        stage
            .with(|s| s.debug.as_ref().map(debug_rows).unwrap_or_default())
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="debug-row">
                        <span class="debug-label">{format!("{label}: ")}</span>
                        <span class="debug-value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <aside id=overlay_id class="debug-overlay" style:display=move || if visible() { "block" } else { "none" }>
            <div id=info_id class="debug-info">
                <div class="debug-title">"📊 调试信息:"</div>
                {rows}
            </div>
        </aside>
    }
}
