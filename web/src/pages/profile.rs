//! Profile, impact stats, order history and achievements

use feeding_controller::screens::ProfileStats;
use leptos::prelude::*;
use shared::{catalog, format_rupees};

use crate::components::Header;
use crate::state::use_app_context;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let history = catalog::order_history();
    let achievements = catalog::achievements();
    let stats = ProfileStats::compute(&history, &achievements);

    view! {
        <section class="profile">
            <Header/>
            <div class="profile-card">
                <span class="avatar">"AK"</span>
                <div>
                    <h2>"Arjun Kumar"</h2>
                    <p class="muted">"Food sustainability enthusiast"</p>
                    <p class="muted">"Koramangala, Bangalore"</p>
                </div>
            </div>

            <div class="stats-grid">
                <div class="stat"><strong>{format!("{}kg", stats.food_saved_kg)}</strong><span>"Food Saved"</span></div>
                <div class="stat"><strong>{stats.meals_donated}</strong><span>"Meals Donated"</span></div>
                <div class="stat"><strong>{format_rupees(stats.total_saved)}</strong><span>"Money Saved"</span></div>
                <div class="stat"><strong>{stats.order_count}</strong><span>"Orders"</span></div>
            </div>

            <h3>"Recent Orders"</h3>
            <ul class="order-history">
                {history
                    .into_iter()
                    .map(|order| {
                        view! {
                            <li class="order-entry">
                                <div class="order-head">
                                    <strong>{order.restaurant}</strong>
                                    <span class="status">{order.status}</span>
                                </div>
                                <p class="muted">{order.items.join(", ")}</p>
                                <div class="order-foot">
                                    <span class="muted">{format!("#{} • {}", order.id, order.date)}</span>
                                    <span>{format_rupees(order.amount)}</span>
                                    <span>{"★".repeat(usize::from(order.rating))}</span>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <h3>{format!("Achievements ({} earned)", stats.badges_earned)}</h3>
            <div class="achievements">
                {achievements
                    .into_iter()
                    .map(|badge| {
                        view! {
                            <div class="badge" class:locked=!badge.earned>
                                <span class="badge-icon">{badge.icon}</span>
                                <strong>{badge.title}</strong>
                                <span class="muted">{badge.description}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <button class="secondary logout" on:click=move |_| ctx.dispatch(|c| c.logout())>
                "Log out"
            </button>
        </section>
    }
}
