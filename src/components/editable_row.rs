//! Editable Row Component
//!
//! Inline edit form for one order. Field values live in local signals until
//! saved; cancelling just leaves edit mode.

use leptos::prelude::*;
use pedidos_core::domain::parse_quantity;
use pedidos_core::{Order, OrderUpdate};

use crate::context::use_app_context;

#[component]
pub fn EditableRow(order: Order) -> impl IntoView {
    let ctx = use_app_context();

    let id = order.id;
    let initial = OrderUpdate::from(&order);
    let (person_name, set_person_name) = signal(initial.person_name);
    let (quantity, set_quantity) = signal(initial.quantity);
    let (payment_method, set_payment_method) = signal(initial.payment_method);
    let (delivered, set_delivered) = signal(initial.delivered);

    let save = move |_| {
        let update = OrderUpdate {
            person_name: person_name.get(),
            quantity: quantity.get(),
            payment_method: payment_method.get(),
            delivered: delivered.get(),
        };
        ctx.run("update", move |c| async move { c.update(id, update).await });
    };

    view! {
        <tr class="edit-row">
            <td>"#" {id}</td>
            <td>
                <input
                    type="text"
                    class="edit-input"
                    prop:value=move || person_name.get()
                    on:input=move |ev| set_person_name.set(event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="number"
                    min="1"
                    class="edit-input small"
                    prop:value=move || quantity.get().to_string()
                    on:input=move |ev| set_quantity.set(parse_quantity(&event_target_value(&ev)))
                />
            </td>
            <td>
                <input
                    type="text"
                    class="edit-input"
                    prop:value=move || payment_method.get()
                    on:input=move |ev| set_payment_method.set(event_target_value(&ev))
                />
            </td>
            <td>
                <label class="checkbox-container">
                    <input
                        type="checkbox"
                        prop:checked=move || delivered.get()
                        on:change=move |ev| set_delivered.set(event_target_checked(&ev))
                    />
                    <span class="checkmark"></span>
                </label>
            </td>
            <td>{order.display_timestamp()}</td>
            <td>
                <div class="action-buttons">
                    <button class="btn btn-success btn-sm" title="Salvar" on:click=save>"✓"</button>
                    <button
                        class="btn btn-secondary btn-sm"
                        title="Cancelar"
                        on:click=move |_| ctx.controller().cancel_editing()
                    >
                        "×"
                    </button>
                </div>
            </td>
        </tr>
    }
}
