//! Notification feed

use feeding_controller::screens::{NotificationFeed, NotificationFilter};
use leptos::prelude::*;
use shared::catalog;

use crate::components::Header;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let feed = RwSignal::new(NotificationFeed::new(catalog::notifications()));
    let visible = move || feed.with(|f| f.visible().cloned().collect::<Vec<_>>());

    view! {
        <section class="notifications">
            <Header>
                <Show when=move || feed.with(|f| f.unread_count() > 0)>
                    <button class="link-button" on:click=move |_| feed.update(|f| f.mark_all_read())>
                        "Mark all read"
                    </button>
                </Show>
            </Header>
            <p class="muted">{move || feed.with(|f| f.unread_summary())}</p>
            <div class="filter-chips">
                {NotificationFilter::all()
                    .iter()
                    .copied()
                    .map(|filter| {
                        view! {
                            <button
                                class="chip"
                                class:active=move || feed.with(|f| f.filter == filter)
                                on:click=move |_| feed.update(|f| f.filter = filter)
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="notification-list">
                {move || {
                    let items = visible();
                    if items.is_empty() {
                        return view! { <li class="empty-state">"Nothing here yet"</li> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|n| {
                            let id = n.id;
                            view! {
                                <li
                                    class="notification"
                                    class:unread=!n.read
                                    on:click=move |_| {
                                        feed.update(|f| {
                                            f.mark_read(id);
                                        })
                                    }
                                >
                                    <span class="kind">{n.kind.label()}</span>
                                    <div>
                                        <h4>{n.title.clone()}</h4>
                                        <p>{n.message.clone()}</p>
                                        <span class="muted">{n.time_label()}</span>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </section>
    }
}
