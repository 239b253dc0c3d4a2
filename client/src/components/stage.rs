//! Animation stage: the engine mount plus the degraded and closed surfaces.
//!
//! The engine draws its own canvas inside the mount element, outside Leptos'
//! control. The fallback surfaces are ordinary reactive views layered in the
//! same stage box.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use overlay::degraded::DegradedLayout;
use overlay::host::ClosedView;

use crate::host::StageActions;
use crate::state::stage::{StageState, Surface, arrangement_class, background_style};

#[component]
pub fn Stage(container_id: String) -> impl IntoView {
    let stage = expect_context::<RwSignal<StageState>>();
    let actions = expect_context::<StageActions>();

    let surface = move || match stage.with(|s| s.surface.clone()) {
        Surface::Engine => ().into_any(),
        Surface::Degraded(layout) => view! { <DegradedCard layout=layout actions=actions /> }.into_any(),
        Surface::Closed(closed) => view! { <ClosedCard closed=closed actions=actions /> }.into_any(),
    };

    view! {
        <section class="stage">
            <div id=container_id class="effects-container"></div>
            {surface}
        </section>
    }
}

/// Static artwork with "more" and, after a runtime failure, "close".
#[component]
fn DegradedCard(layout: DegradedLayout, actions: StageActions) -> impl IntoView {
    let close = layout.show_close.then(|| {
        let label = layout.close_label.clone();
        view! {
            <button class="fallback-btn fallback-close" on:click=move |_| actions.close()>
                {label}
            </button>
        }
    });

    let class = arrangement_class(layout.arrangement);
    let style = background_style(&layout.background_url);

    view! {
        <div class=class style=style>
            {close}
            <button class="fallback-btn fallback-more" on:click=move |_| actions.more()>
                {layout.more_label}
            </button>
        </div>
    }
}

#[component]
fn ClosedCard(closed: ClosedView, actions: StageActions) -> impl IntoView {
    view! {
        <div class="closed-card">
            <div class="closed-mark">{closed.mark}</div>
            <div class="closed-title">{closed.title}</div>
            <div class="closed-subtitle">{closed.subtitle}</div>
            <button class="reload-btn" on:click=move |_| actions.reload()>
                {closed.reload_label}
            </button>
        </div>
    }
}
