//! NGO donations
//!
//! Donating is a local acknowledgement only; no payment is taken.

use leptos::prelude::*;
use shared::{catalog, format_rupees};

use crate::components::Header;
use crate::utils::format::{format_meals, format_percent, format_rating};

#[component]
pub fn DonationsPage() -> impl IntoView {
    let ngos = catalog::ngos();
    let options = catalog::donation_options();
    let goal = catalog::community_goal();

    let selected_ngo = RwSignal::new(ngos.first().map(|n| n.id));
    let selected_amount = RwSignal::new(None::<u32>);
    let thanks = RwSignal::new(None::<String>);
    let ngo_names = StoredValue::new(
        ngos.iter()
            .map(|n| (n.id, n.name.clone()))
            .collect::<Vec<_>>(),
    );

    let donate = move |_| {
        let (Some(ngo_id), Some(amount)) = (selected_ngo.get_untracked(), selected_amount.get_untracked()) else {
            return;
        };
        let name = ngo_names.with_value(|names| {
            names
                .iter()
                .find(|(id, _)| *id == ngo_id)
                .map(|(_, name)| name.clone())
                .unwrap_or_default()
        });
        log::info!("Donation pledged: {} to NGO {}", amount, ngo_id);
        thanks.set(Some(format!("Thank you! {} will reach {}", format_rupees(amount), name)));
    };

    view! {
        <section class="donations">
            <Header/>

            <div class="community-goal">
                <h3>"This month's community goal"</h3>
                <p>{format!("{} • {} to go", format_meals(goal.meals_goal), format_meals(goal.meals_remaining()))}</p>
                <div class="progress-track">
                    <div class="progress-fill" style:width=format_percent(goal.progress_percent as f32)></div>
                </div>
                <span class="muted">{format!("{}% complete", goal.progress_percent)}</span>
            </div>

            <h3>"Choose an amount"</h3>
            <div class="donation-options">
                {options
                    .into_iter()
                    .map(|option| {
                        let amount = option.amount;
                        view! {
                            <button
                                class="donation-option"
                                class:active=move || selected_amount.get() == Some(amount)
                                on:click=move |_| {
                                    thanks.set(None);
                                    selected_amount.set(Some(amount));
                                }
                            >
                                <strong>{format_rupees(amount)}</strong>
                                <span>{format_meals(option.meals)}</span>
                                <span class="muted">{option.description}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <h3>"Our Partner NGOs"</h3>
            <ul class="ngo-list">
                {ngos
                    .into_iter()
                    .map(|ngo| {
                        let id = ngo.id;
                        view! {
                            <li
                                class="ngo-card"
                                class:active=move || selected_ngo.get() == Some(id)
                                on:click=move |_| selected_ngo.set(Some(id))
                            >
                                <img src=ngo.image alt=ngo.name.clone()/>
                                <div>
                                    <h4>
                                        {ngo.name}
                                        {ngo.verified.then(|| view! { <span class="verified">"✔"</span> })}
                                    </h4>
                                    <p class="muted">{ngo.description}</p>
                                    <p class="muted">
                                        {format!("{} • {} meals served • {}", ngo.location, ngo.meals_served, format_rating(ngo.rating))}
                                    </p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            {move || thanks.get().map(|message| view! { <p class="thanks">{message}</p> })}

            <footer class="action-bar">
                <button
                    class="primary"
                    disabled=move || selected_amount.get().is_none() || selected_ngo.get().is_none()
                    on:click=donate
                >
                    {move || match selected_amount.get() {
                        Some(amount) => format!("Donate {}", format_rupees(amount)),
                        None => "Select an amount".to_string(),
                    }}
                </button>
            </footer>
        </section>
    }
}
