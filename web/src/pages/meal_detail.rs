//! Meal detail with quantity picker

use feeding_controller::screens::MealSelection;
use leptos::prelude::*;
use shared::format_rupees;

use crate::components::{Header, QuantityStepper};
use crate::state::use_app_context;
use crate::utils::format::format_rating;

#[component]
pub fn MealDetailPage() -> impl IntoView {
    let ctx = use_app_context();

    // The controller refuses to open this screen without a selection
    let Some(initial) = ctx.with_controller(|c| c.meal_selection()) else {
        return view! {
            <section class="meal-detail">
                <Header/>
                <p class="empty-state">"No meal selected"</p>
            </section>
        }
        .into_any();
    };
    let selection = RwSignal::new(initial);

    let add_to_cart = move |_| {
        let quantity = selection.with_untracked(|s| s.quantity());
        ctx.try_dispatch(|c| c.add_meal_to_cart(quantity));
    };

    view! {
        <section class="meal-detail">
            <Header>
                <button
                    class="icon-button"
                    on:click=move |_| selection.update(|s| s.toggle_favorite())
                >
                    {move || if selection.with(|s| s.is_favorite) { "♥" } else { "♡" }}
                </button>
            </Header>
            {move || selection.with(|s| meal_body(s))}
            <div class="quantity-row">
                <QuantityStepper
                    quantity=Signal::derive(move || selection.with(|s| s.quantity()))
                    on_decrement=move |_| selection.update(|s| s.decrement())
                    can_decrement=Signal::derive(move || selection.with(|s| s.can_decrement()))
                    on_increment=move |_| selection.update(|s| s.increment())
                    can_increment=Signal::derive(move || selection.with(|s| s.can_increment()))
                />
                <span class="muted">
                    {move || selection.with(|s| format!("{} available", s.available()))}
                </span>
            </div>
            <footer class="action-bar">
                <div>
                    <strong>{move || selection.with(|s| format_rupees(s.line_total()))}</strong>
                    <span class="savings">
                        {move || selection.with(|s| format!("You save {}", format_rupees(s.savings())))}
                    </span>
                </div>
                <button class="primary" on:click=add_to_cart>"Add to Cart"</button>
            </footer>
        </section>
    }
    .into_any()
}

fn meal_body(selection: &MealSelection) -> impl IntoView {
    let detail = selection.detail().clone();
    let item = detail.item;

    view! {
        <img class="meal-image" src=item.image alt=item.name.clone()/>
        <div class="meal-summary">
            <h2>{item.name}</h2>
            <p class="muted">{format!("{} • {} • Pickup {}", item.restaurant, detail.distance, detail.pickup_time)}</p>
            <div class="card-meta">
                <span>{format!("{} ({} reviews)", format_rating(detail.rating), detail.reviews)}</span>
                <span class="discount">{format!("{}% OFF", selection.discount_percentage())}</span>
                <span class="expiry">{format!("Expires in {}", shared::format_expiry(item.expiry_minutes))}</span>
            </div>
            <div class="price-row">
                <span class="price">{format_rupees(item.discounted_price)}</span>
                <span class="strike">{format_rupees(item.original_price)}</span>
            </div>
        </div>
        <p class="description">{detail.description}</p>
        <div class="tags">
            {detail.dietary_info.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
        </div>
        <h3>"Ingredients"</h3>
        <ul class="ingredients">
            {detail.ingredients.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
        </ul>
        {detail.nutrition.map(|n| {
            view! {
                <h3>"Nutrition"</h3>
                <div class="nutrition">
                    <div><strong>{n.calories}</strong><span>"kcal"</span></div>
                    <div><strong>{n.protein}</strong><span>"protein"</span></div>
                    <div><strong>{n.carbs}</strong><span>"carbs"</span></div>
                    <div><strong>{n.fat}</strong><span>"fat"</span></div>
                </div>
            }
        })}
    }
}
