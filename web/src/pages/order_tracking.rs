//! Delivery progress for the placed order

use feeding_controller::screens::StepStatus;
use leptos::prelude::*;
use shared::catalog;

use crate::components::Header;
use crate::state::use_app_context;
use crate::utils::format::{format_eta, format_percent};

#[component]
pub fn OrderTrackingPage() -> impl IntoView {
    let ctx = use_app_context();
    let tracking = Memo::new(move |_| ctx.state().tracking);
    let order_id = move || ctx.with_controller(|c| c.state.read().current_order_id.clone());
    let steps = catalog::tracking_steps();

    view! {
        <section class="order-tracking">
            <Header/>
            <div class="order-summary">
                <p class="muted">"Order ID"</p>
                <h2>{move || format!("#{}", order_id())}</h2>
                <p class="eta">
                    {move || {
                        let t = tracking.get();
                        if t.is_delivered() {
                            "Delivered. Enjoy your meal!".to_string()
                        } else {
                            format!("Arriving in {}", format_eta(t.eta_minutes()))
                        }
                    }}
                </p>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format_percent(tracking.get().progress_percent())
                ></div>
            </div>
            <ol class="tracking-steps">
                {steps
                    .into_iter()
                    .map(|step| {
                        let id = step.id;
                        let status = move || tracking.get().status_of(id);
                        view! {
                            <li
                                class="tracking-step"
                                class:completed=move || status() == StepStatus::Completed
                                class:current=move || status() == StepStatus::Current
                            >
                                <span class="step-marker">
                                    {move || match status() {
                                        StepStatus::Completed => "✓".to_string(),
                                        _ => id.to_string(),
                                    }}
                                </span>
                                <div>
                                    <h4>{step.title}</h4>
                                    <p class="muted">{step.description}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <Show when=move || tracking.get().shows_courier() && !tracking.get().is_delivered()>
                <div class="courier-card">
                    <span class="courier-avatar">"🛵"</span>
                    <div>
                        <h4>"Rajesh Kumar"</h4>
                        <p class="muted">"Delivery Partner"</p>
                    </div>
                    <button class="icon-button">"📞"</button>
                </div>
            </Show>
            <div class="impact-note">
                "🌱 This order rescued surplus food from going to waste"
            </div>
        </section>
    }
}
