//! Screen header with the back button

use leptos::prelude::*;

use crate::state::use_app_context;

/// Title bar for the current screen. Shows a back arrow when the screen has a back
/// target; pressing it always returns home.
#[component]
pub fn Header(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let ctx = use_app_context();
    let screen = move || ctx.screen();

    view! {
        <header class="screen-header">
            <Show when=move || screen().back_target().is_some()>
                <button class="back-button" on:click=move |_| { ctx.dispatch(|c| c.go_back()); }>
                    "←"
                </button>
            </Show>
            <h1 class="screen-title">{move || screen().title()}</h1>
            <div class="header-actions">{children.map(|c| c())}</div>
        </header>
    }
}
