//! Delivery Orders App
//!
//! Header, tab bar and the active tab's content.

use leptos::prelude::*;
use log::info;
use pedidos_core::{HttpOrderApi, OrderController, Tab};
use reactive_stores::Store;

use crate::browser::{api_config, BrowserPrompt};
use crate::components::{LogPanel, NewOrderForm, OrderTable, StatsCards, TabBar};
use crate::context::{use_app_context, AppContext};
use crate::store::{store_apply, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    provide_context(store);

    let config = api_config();
    info!("orders service at {}", config.base_url());
    let controller = OrderController::new(HttpOrderApi::new(config), BrowserPrompt);
    controller.subscribe(move |state| store_apply(&store, state));
    provide_context(AppContext::new(controller));

    // Load orders on mount
    let ctx = use_app_context();
    Effect::new(move |_| {
        ctx.run("load", |c| async move { c.load().await });
    });

    view! {
        <div class="app">
            <div class="header">
                <h1>"🚀 Sistema de Delivery"</h1>
                <p>"Gerencie seus pedidos de forma simples e eficiente"</p>
            </div>

            <TabBar />

            <div class="content">
                {move || match store.tab().get() {
                    Tab::List => view! {
                        <div>
                            <StatsCards />
                            <OrderTable />
                        </div>
                    }.into_any(),
                    Tab::Create => view! { <NewOrderForm /> }.into_any(),
                }}
            </div>

            <LogPanel />
        </div>
    }
}
