//! Stats Cards Component

use leptos::prelude::*;
use pedidos_core::OrderStats;

use crate::store::{use_app_store, AppStateStoreFields};

/// Total / pending / delivered counters over the cached list
#[component]
pub fn StatsCards() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.orders().with(|orders| OrderStats::from_orders(orders)));

    view! {
        <div class="stats">
            <div class="stat-card">
                <div class="stat-number">{move || stats.get().total}</div>
                <div class="stat-label">"Total de Pedidos"</div>
            </div>
            <div class="stat-card">
                <div class="stat-number">{move || stats.get().pending}</div>
                <div class="stat-label">"Pendentes"</div>
            </div>
            <div class="stat-card">
                <div class="stat-number">{move || stats.get().delivered}</div>
                <div class="stat-label">"Entregues"</div>
            </div>
        </div>
    }
}
