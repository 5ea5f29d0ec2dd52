//! Order Table Component
//!
//! Sortable table of the cached orders. Sorting works on a copy and never
//! reloads.

use leptos::prelude::*;
use pedidos_core::domain::sorted;
use pedidos_core::{SortDirection, SortKey};

use crate::components::{EditableRow, OrderRow};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Clickable column header with direction arrows
#[component]
fn TableHeader(column: SortKey) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let arrow_class = move |direction: SortDirection| {
        if store.sort().get().is_active(column, direction) { "sort-arrow active" } else { "sort-arrow" }
    };

    view! {
        <th class="table-header sortable" on:click=move |_| ctx.controller().sort_by(column)>
            <div class="header-content">
                {column.label()}
                <div class="sort-icons">
                    <span class=move || arrow_class(SortDirection::Ascending)>"▲"</span>
                    <span class=move || arrow_class(SortDirection::Descending)>"▼"</span>
                </div>
            </div>
        </th>
    }
}

/// Table body, loading indicator or empty state
#[component]
pub fn OrderTable() -> impl IntoView {
    let store = use_app_store();

    let rows = Memo::new(move |_| store.orders().with(|orders| sorted(orders, store.sort().get())));

    view! {
        {move || {
            if store.loading().get() {
                view! { <div class="loading">"Carregando pedidos..."</div> }.into_any()
            } else if rows.with(|r| r.is_empty()) {
                view! {
                    <div class="empty">
                        <div class="empty-icon">"📦"</div>
                        <h3>"Nenhum pedido encontrado"</h3>
                        <p>"Clique em \"Novo Pedido\" para começar"</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="pedidos-table">
                            <thead>
                                <tr>
                                    {SortKey::ALL.iter().map(|&column| view! { <TableHeader column=column /> }).collect_view()}
                                    <th class="table-header">"Ações"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let editing = store.editing_id().get();
                                    rows.get().into_iter().map(|order| {
                                        if editing == Some(order.id) {
                                            view! { <EditableRow order=order /> }.into_any()
                                        } else {
                                            view! { <OrderRow order=order /> }.into_any()
                                        }
                                    }).collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }
        }}
    }
}
