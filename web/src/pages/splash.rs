//! Startup splash screen

use leptos::prelude::*;

use crate::state::use_app_context;

/// Logo and tagline. The controller's splash timeline fades it out and moves on.
#[component]
pub fn SplashPage() -> impl IntoView {
    let ctx = use_app_context();
    let fading = move || ctx.with_controller(|c| c.state.read().splash_fading);

    view! {
        <section class="splash" class:fading=fading>
            <div class="splash-logo">"🌱"</div>
            <h1 class="splash-title">"Feeding Future"</h1>
            <p class="splash-tagline">"Rescue surplus food. Feed more people."</p>
        </section>
    }
}
