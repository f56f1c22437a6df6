//! Searchable restaurant listing

use feeding_controller::screens::{RestaurantFilter, RestaurantQuery};
use leptos::prelude::*;
use shared::{catalog, format_rupees, Restaurant};

use crate::components::Header;
use crate::state::use_app_context;
use crate::utils::format::format_rating;

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let query = RwSignal::new(RestaurantQuery::default());
    let restaurants = StoredValue::new(catalog::restaurants());

    let visible = move || {
        let query = query.get();
        restaurants.with_value(|all| query.apply(all).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <section class="restaurants">
            <Header/>
            <input
                class="search-input"
                type="search"
                placeholder="Search restaurants, cuisines or dishes"
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
            />
            <div class="filter-chips">
                {RestaurantFilter::all()
                    .iter()
                    .copied()
                    .map(|filter| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || query.with(|q| q.filter == filter)
                                on:click=move |_| query.update(|q| q.filter = filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let list = visible();
                if list.is_empty() {
                    view! { <p class="empty-state">"No restaurants match your search"</p> }.into_any()
                } else {
                    list.into_iter()
                        .map(|restaurant| view! { <RestaurantCard restaurant/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let ctx = use_app_context();
    let id = restaurant.id;
    let distance = restaurant.distance_label();
    let best_discount = restaurant.best_discount();

    view! {
        <article class="restaurant-card">
            <div class="card-header" on:click=move |_| { ctx.try_dispatch(|c| c.select_restaurant(id)); }>
                <img src=restaurant.image alt=restaurant.name.clone()/>
                <div class="card-body">
                    <h3>{restaurant.name}</h3>
                    <p class="muted">
                        {format!("{} • {} • {}", restaurant.category, distance, restaurant.delivery_time)}
                    </p>
                    <div class="card-meta">
                        <span>{format_rating(restaurant.rating)}</span>
                        <span class="discount">{format!("Up to {}% off", best_discount)}</span>
                    </div>
                </div>
            </div>
            <ul class="surplus-items">
                {restaurant
                    .surplus
                    .into_iter()
                    .map(|item| {
                        let item_id = item.id;
                        let expiry = item.expiry_label();
                        view! {
                            <li on:click=move |_| { ctx.try_dispatch(|c| c.select_meal(item_id)); }>
                                <span class="item-name">{item.name}</span>
                                <span class="strike">{format_rupees(item.original_price)}</span>
                                <span class="price">{format_rupees(item.discounted_price)}</span>
                                <span class="expiry">{expiry}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
