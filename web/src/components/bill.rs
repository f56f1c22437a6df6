//! Bill breakdown shown on the cart screen

use feeding_controller::BillSummary;
use leptos::prelude::*;
use shared::format_rupees;

#[component]
pub fn BillSummaryCard(#[prop(into)] bill: Signal<BillSummary>) -> impl IntoView {
    let row = |label: &'static str, value: String| {
        view! {
            <div class="bill-row">
                <span>{label}</span>
                <span>{value}</span>
            </div>
        }
    };

    view! {
        <section class="bill-summary">
            <h3>"Bill Summary"</h3>
            {move || {
                let bill = bill.get();
                view! {
                    {row("Item total", format_rupees(bill.subtotal))}
                    {row("Delivery fee", format_rupees(bill.delivery_fee))}
                    {(bill.donation > 0).then(|| row("Donation", format_rupees(bill.donation)))}
                    <div class="bill-row savings">
                        <span>"You save"</span>
                        <span>{format_rupees(bill.savings)}</span>
                    </div>
                    <div class="bill-row total">
                        <span>"To pay"</span>
                        <span>{format_rupees(bill.total)}</span>
                    </div>
                }
            }}
        </section>
    }
}
