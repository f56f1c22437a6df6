//! Cart, address and payment steps

use feeding_controller::screens::{CheckoutFlow, CheckoutStep, PaymentMethod};
use feeding_controller::{DeliveryOption, Screen};
use leptos::prelude::*;
use shared::{format_rupees, CartLineItem};

use crate::components::{BillSummaryCard, Header, QuantityStepper};
use crate::state::use_app_context;

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_app_context();
    let flow = RwSignal::new(ctx.with_controller(|c| CheckoutFlow::new(c.config())));
    let is_empty = move || ctx.state().cart.is_empty();
    let bill = Signal::derive(move || {
        let cart = ctx.state().cart;
        flow.with(|f| f.bill(&cart))
    });

    let step_body = move || match flow.with(|f| f.step) {
        CheckoutStep::Cart => view! { <CartStep flow/> }.into_any(),
        CheckoutStep::Address => view! { <AddressStep flow/> }.into_any(),
        CheckoutStep::Payment => view! { <PaymentStep flow/> }.into_any(),
    };

    view! {
        <section class="cart">
            <Header/>
            <Show
                when=move || !is_empty()
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            <p>"Your cart is empty"</p>
                            <button
                                class="primary"
                                on:click=move |_| { ctx.try_dispatch(|c| c.navigate(Screen::Restaurants)); }
                            >
                                "Browse restaurants"
                            </button>
                        </div>
                    }
                }
            >
                <ol class="checkout-steps">
                    {[CheckoutStep::Cart, CheckoutStep::Address, CheckoutStep::Payment]
                        .into_iter()
                        .map(|step| {
                            view! {
                                <li
                                    class:active=move || flow.with(|f| f.step == step)
                                    class:done=move || flow.with(|f| f.step > step)
                                >
                                    {format!("{}. {}", step.number(), step.title())}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                {step_body}
                <BillSummaryCard bill/>
                <footer class="action-bar">
                    <Show when=move || flow.with(|f| f.step != CheckoutStep::Cart)>
                        <button
                            class="secondary"
                            on:click=move |_| {
                                flow.update(|f| {
                                    f.back();
                                })
                            }
                        >
                            "Back"
                        </button>
                    </Show>
                    {move || {
                        if flow.with(|f| f.step == CheckoutStep::Payment) {
                            view! {
                                <button
                                    class="primary"
                                    on:click=move |_| { ctx.try_dispatch(|c| c.place_order()); }
                                >
                                    {move || format!("Place Order • {}", format_rupees(bill.get().total))}
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button class="primary" on:click=move |_| flow.update(|f| f.advance())>
                                    "Continue"
                                </button>
                            }
                            .into_any()
                        }
                    }}
                </footer>
            </Show>
        </section>
    }
}

#[component]
fn CartStep(flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    let ctx = use_app_context();
    let lines = move || ctx.state().cart.items().to_vec();

    view! {
        <ul class="cart-lines">
            {move || lines().into_iter().map(|line| view! { <CartLine line/> }).collect_view()}
        </ul>
        <section class="donation-picker">
            <h3>"Add a donation"</h3>
            <p class="muted">"Round up your order to feed someone in need"</p>
            <div class="chips">
                {move || {
                    flow.with(|f| f.donation_presets().to_vec())
                        .into_iter()
                        .map(|amount| {
                            let selected = move || flow.with(|f| f.donation() == amount);
                            view! {
                                <button
                                    class="chip"
                                    class:active=selected
                                    on:click=move |_| {
                                        flow.update(|f| {
                                            if f.donation() == amount {
                                                f.clear_donation();
                                            } else {
                                                f.select_donation(amount);
                                            }
                                        })
                                    }
                                >
                                    {format_rupees(amount)}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn CartLine(line: CartLineItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = line.id;
    let quantity = Signal::derive(move || {
        ctx.state().cart.get(id).map(|l| l.cart_quantity).unwrap_or_default()
    });

    view! {
        <li class="cart-line">
            <img src=line.image alt=line.name.clone()/>
            <div class="line-body">
                <h4>{line.name}</h4>
                <p class="muted">{line.restaurant}</p>
                <div class="price-row">
                    <span class="price">{format_rupees(line.total_price)}</span>
                    <span class="strike">{format_rupees(line.original_price * line.cart_quantity)}</span>
                </div>
            </div>
            <QuantityStepper
                quantity
                on_decrement=move |_| { ctx.try_dispatch(|c| c.decrement_item(id)); }
                on_increment=move |_| { ctx.try_dispatch(|c| c.increment_item(id)); }
            />
            <button class="icon-button" on:click=move |_| { ctx.try_dispatch(|c| c.remove_item(id)); }>
                "🗑"
            </button>
        </li>
    }
}

#[component]
fn AddressStep(flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    view! {
        <section class="address-step">
            <div class="delivery-toggle">
                {[DeliveryOption::Delivery, DeliveryOption::Pickup]
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || flow.with(|f| f.delivery == option)
                                on:click=move |_| flow.update(|f| f.delivery = option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                flow.with(|f| match f.delivery {
                    DeliveryOption::Delivery => {
                        view! {
                            <div class="address-card">
                                <h4>"Deliver to"</h4>
                                <p>{f.address.to_string()}</p>
                            </div>
                        }
                        .into_any()
                    }
                    DeliveryOption::Pickup => {
                        view! {
                            <div class="address-card">
                                <h4>"Pickup"</h4>
                                <p>"Collect from the restaurant before the items expire"</p>
                            </div>
                        }
                        .into_any()
                    }
                })
            }}
        </section>
    }
}

#[component]
fn PaymentStep(flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    view! {
        <section class="payment-step">
            <h3>"Payment method"</h3>
            {PaymentMethod::all()
                .iter()
                .copied()
                .map(|method| {
                    view! {
                        <label class="payment-option">
                            <input
                                type="radio"
                                name="payment"
                                prop:checked=move || flow.with(|f| f.payment == method)
                                on:change=move |_| flow.update(|f| f.payment = method)
                            />
                            <span>{method.label()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </section>
    }
}
