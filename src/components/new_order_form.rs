//! New Order Form Component
//!
//! Create form bound to the controller's draft.

use leptos::prelude::*;
use pedidos_core::domain::parse_quantity;
use pedidos_core::PAYMENT_METHODS;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewOrderForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let create_order = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.run("create", |c| async move { c.create().await });
    };

    view! {
        <form class="form" on:submit=create_order>
            <h2 class="form-title">"Criar Novo Pedido"</h2>

            <div class="form-group">
                <label>"Nome da Pessoa *"</label>
                <input
                    type="text"
                    placeholder="Digite o nome da pessoa"
                    prop:value=move || store.draft().with(|d| d.person_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.controller().update_draft(|d| d.person_name = value);
                    }
                />
            </div>

            <div class="form-group">
                <label>"Quantidade *"</label>
                <input
                    type="number"
                    min="1"
                    prop:value=move || store.draft().with(|d| d.quantity.to_string())
                    on:input=move |ev| {
                        let quantity = parse_quantity(&event_target_value(&ev));
                        ctx.controller().update_draft(|d| d.quantity = quantity);
                    }
                />
            </div>

            <div class="form-group">
                <label>"Forma de Pagamento"</label>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.controller().update_draft(|d| d.payment_method = value);
                    }
                >
                    {PAYMENT_METHODS.iter().map(|&(value, label)| view! {
                        <option
                            value=value
                            prop:selected=move || store.draft().with(|d| d.payment_method == value)
                        >
                            {label}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            <button
                type="submit"
                class="btn btn-primary btn-block"
                disabled=move || store.loading().get()
            >
                {move || if store.loading().get() { "Criando..." } else { "Criar Pedido" }}
            </button>
        </form>
    }
}
