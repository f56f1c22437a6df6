use feeding_controller::screens::{OnboardingPager, PagerStep};
use leptos::prelude::*;

use crate::state::use_app_context;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let ctx = use_app_context();
    let pager = RwSignal::new(OnboardingPager::default());

    let finish_if_done = move |step: PagerStep| {
        if step == PagerStep::Finished {
            ctx.dispatch(|c| c.complete_onboarding());
        }
    };
    let on_next = move |_| finish_if_done(pager.try_update(|p| p.next()).unwrap_or(PagerStep::Finished));
    let on_skip = move |_| finish_if_done(pager.try_update(|p| p.skip()).unwrap_or(PagerStep::Finished));
    let on_previous = move |_| {
        pager.update(|p| {
            p.previous();
        })
    };

    view! {
        <section class="onboarding">
            <button class="skip-button" on:click=on_skip>"Skip"</button>
            {move || {
                pager.with(|p| {
                    p.current().cloned().map(|page| {
                        view! {
                            <div class="onboarding-page">
                                <img class="onboarding-image" src=page.image alt=page.title.clone()/>
                                <h2>{page.title}</h2>
                                <p>{page.description}</p>
                            </div>
                        }
                    })
                })
            }}
            <div class="pager-dots">
                {move || {
                    pager.with(|p| {
                        (0..p.page_count())
                            .map(|i| {
                                let active = i == p.index();
                                view! { <span class="dot" class:active=active></span> }
                            })
                            .collect_view()
                    })
                }}
            </div>
            <div class="pager-controls">
                <Show when=move || !pager.with(|p| p.is_first())>
                    <button class="secondary" on:click=on_previous>"Back"</button>
                </Show>
                <button class="primary" on:click=on_next>{move || pager.with(|p| p.cta_label())}</button>
            </div>
        </section>
    }
}
