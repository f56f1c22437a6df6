use leptos::prelude::*;

use crate::state::use_app_context;

/// Message from the last rejected action, dismissable
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.error().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span>{message}</span>
                    <button class="dismiss" on:click=move |_| ctx.clear_error()>"×"</button>
                </div>
            }
        })
    }
}
