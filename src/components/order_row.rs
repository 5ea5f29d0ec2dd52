//! Order Row Component
//!
//! Read-only table row with edit, deliver and delete actions.

use leptos::prelude::*;
use pedidos_core::Order;

use crate::context::use_app_context;

#[component]
pub fn OrderRow(order: Order) -> impl IntoView {
    let ctx = use_app_context();

    let id = order.id;
    let delivered = order.delivered;
    let badge_class = if delivered { "status-badge status-entregue" } else { "status-badge status-pendente" };

    view! {
        <tr>
            <td><span class="pedido-id">"#" {id}</span></td>
            <td><strong>{order.person_name.clone()}</strong></td>
            <td>{order.quantity}</td>
            <td>{order.payment_label().to_string()}</td>
            <td><span class=badge_class>{order.status_label()}</span></td>
            <td>{order.display_timestamp()}</td>
            <td>
                <div class="action-buttons">
                    <button
                        class="btn btn-secondary btn-sm"
                        title="Editar"
                        on:click=move |_| ctx.controller().start_editing(id)
                    >
                        "✎"
                    </button>

                    // Already-delivered orders have nothing to mark
                    <Show when=move || !delivered>
                        <button
                            class="btn btn-success btn-sm"
                            title="Marcar como entregue"
                            on:click=move |_| ctx.run("mark delivered", move |c| async move { c.mark_delivered(id).await })
                        >
                            "✓"
                        </button>
                    </Show>

                    <button
                        class="btn btn-danger btn-sm"
                        title="Excluir"
                        on:click=move |_| ctx.run("delete", move |c| async move { c.delete(id).await })
                    >
                        "🗑"
                    </button>
                </div>
            </td>
        </tr>
    }
}
