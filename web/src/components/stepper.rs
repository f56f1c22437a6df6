use leptos::prelude::*;

/// `-` / count / `+` control
#[component]
pub fn QuantityStepper(
    #[prop(into)] quantity: Signal<u32>,
    #[prop(into)] on_decrement: Callback<()>,
    #[prop(into)] on_increment: Callback<()>,
    #[prop(into, optional)] can_decrement: Option<Signal<bool>>,
    #[prop(into, optional)] can_increment: Option<Signal<bool>>,
) -> impl IntoView {
    let decrement_disabled = move || can_decrement.is_some_and(|s| !s.get());
    let increment_disabled = move || can_increment.is_some_and(|s| !s.get());

    view! {
        <div class="quantity-stepper">
            <button
                class="stepper-button"
                disabled=decrement_disabled
                on:click=move |_| on_decrement.run(())
            >
                "−"
            </button>
            <span class="stepper-value">{move || quantity.get()}</span>
            <button
                class="stepper-button"
                disabled=increment_disabled
                on:click=move |_| on_increment.run(())
            >
                "+"
            </button>
        </div>
    }
}
