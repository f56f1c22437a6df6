//! Login / signup page

use feeding_controller::screens::{AuthForm, AuthMode, SocialProvider};
use leptos::prelude::*;

use crate::state::use_app_context;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(AuthForm::default());
    let is_signup = move || form.with(|f| f.mode == AuthMode::Signup);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        ctx.try_dispatch(|c| c.login(&snapshot));
    };

    let input_type = move || {
        if form.with(|f| f.show_password) {
            "text"
        } else {
            "password"
        }
    };

    view! {
        <section class="auth">
            <div class="auth-brand">
                <span class="brand-logo">"🌱"</span>
                <h1>{move || form.with(|f| f.mode.heading())}</h1>
            </div>

            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>

                <Show when=is_signup>
                    <label>
                        "Phone"
                        <input
                            type="tel"
                            placeholder="+91 98765 43210"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label>
                    "Password"
                    <div class="password-field">
                        <input
                            type=input_type
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="visibility-toggle"
                            on:click=move |_| form.update(|f| f.toggle_password_visibility())
                        >
                            {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>

                <Show when=is_signup>
                    <label>
                        "Confirm password"
                        <input
                            type=input_type
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev))
                            }
                        />
                    </label>
                </Show>

                <button type="submit" class="primary">{move || form.with(|f| f.mode.submit_label())}</button>
            </form>

            <div class="social-login">
                <span class="divider">"or continue with"</span>
                {[SocialProvider::Google, SocialProvider::Apple]
                    .into_iter()
                    .map(|provider| {
                        view! {
                            <button
                                class="social-button"
                                on:click=move |_| ctx.dispatch(|c| c.social_login(provider))
                            >
                                {provider.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="link-button"
                on:click=move |_| {
                    ctx.clear_error();
                    form.update(|f| f.toggle_mode());
                }
            >
                {move || form.with(|f| f.mode.toggle_label())}
            </button>
        </section>
    }
}
