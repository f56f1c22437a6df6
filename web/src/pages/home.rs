//! Home dashboard

use feeding_controller::screens::ProfileStats;
use feeding_controller::Screen;
use leptos::prelude::*;
use shared::{catalog, format_rupees};

use crate::state::use_app_context;
use crate::utils::format::format_rating;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let cart_count = move || ctx.state().cart.item_count();
    let stats = ProfileStats::default();

    let open = move |screen: Screen| {
        ctx.try_dispatch(|c| c.navigate(screen));
    };

    view! {
        <section class="home">
            <header class="home-header">
                <div>
                    <p class="greeting">"Good to see you 👋"</p>
                    <h1>"Rescue food near you"</h1>
                </div>
                <div class="header-actions">
                    <button class="icon-button" on:click=move |_| open(Screen::Notifications)>"🔔"</button>
                    <button class="icon-button" on:click=move |_| open(Screen::Profile)>"👤"</button>
                </div>
            </header>

            <button class="search-entry" on:click=move |_| open(Screen::Restaurants)>
                "Search restaurants or dishes"
            </button>

            <section class="impact-strip">
                <div><strong>{format_rupees(stats.total_saved)}</strong><span>"saved"</span></div>
                <div><strong>{format!("{} kg", stats.food_saved_kg)}</strong><span>"food rescued"</span></div>
                <div><strong>{stats.meals_donated}</strong><span>"meals donated"</span></div>
            </section>

            <section class="categories">
                <h2>"Categories"</h2>
                <div class="category-row">
                    {catalog::categories()
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button class="category" on:click=move |_| open(Screen::Donations)>
                                    <span class="category-icon">{category.icon}</span>
                                    <span>{category.name}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="featured">
                <div class="section-title">
                    <h2>"Featured surplus"</h2>
                    <button class="link-button" on:click=move |_| open(Screen::Restaurants)>"See all"</button>
                </div>
                {catalog::featured_restaurants()
                    .into_iter()
                    .map(|restaurant| {
                        let id = restaurant.id;
                        view! {
                            <article
                                class="restaurant-card"
                                on:click=move |_| {
                                    ctx.try_dispatch(|c| c.select_restaurant(id));
                                }
                            >
                                <img src=restaurant.image alt=restaurant.name.clone()/>
                                <div class="card-body">
                                    <h3>{restaurant.name}</h3>
                                    <p class="muted">
                                        {format!("{} • {}", restaurant.category, restaurant.distance)}
                                    </p>
                                    <div class="card-meta">
                                        <span>{format_rating(restaurant.rating)}</span>
                                        <span class="discount">{restaurant.discount}</span>
                                        <span>{format!("{} items left", restaurant.surplus_items)}</span>
                                    </div>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="quick-actions">
                <button on:click=move |_| open(Screen::Donations)>"❤️ Donate a meal"</button>
                <button on:click=move |_| { ctx.try_dispatch(|c| c.view_cart()); }>
                    {move || format!("🛒 Cart ({})", cart_count())}
                </button>
            </section>
        </section>
    }
}
