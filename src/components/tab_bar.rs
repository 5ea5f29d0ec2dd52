//! Tab Bar Component
//!
//! Switches between the order list and the create form.

use leptos::prelude::*;
use pedidos_core::Tab;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

const TABS: &[(Tab, &str, &str)] = &[
    (Tab::List, "📦", "Listar Pedidos"),
    (Tab::Create, "➕", "Novo Pedido"),
];

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="tabs">
            {TABS.iter().map(|&(tab, icon, label)| {
                let is_active = move || store.tab().get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab active" } else { "tab" }
                        on:click=move |_| ctx.controller().select_tab(tab)
                    >
                        <span class="tab-icon">{icon}</span>
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
