//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller owns
//! the real state; this is its reactive mirror.

use leptos::prelude::*;
use reactive_stores::Store;
use pedidos_core::{Order, OrderDraft, OrderId, SortConfig, Tab, ViewState};

/// Reactive copy of the controller's `ViewState`
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached orders, in service order
    pub orders: Vec<Order>,
    pub tab: Tab,
    pub loading: bool,
    pub editing_id: Option<OrderId>,
    pub draft: OrderDraft,
    pub sort: SortConfig,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Copy a controller snapshot into the store, writing only fields that changed
pub fn store_apply(store: &AppStore, state: &ViewState) {
    if store.orders().with_untracked(|orders| orders != &state.orders) {
        store.orders().set(state.orders.clone());
    }
    if store.tab().get_untracked() != state.tab {
        store.tab().set(state.tab);
    }
    if store.loading().get_untracked() != state.loading {
        store.loading().set(state.loading);
    }
    if store.editing_id().get_untracked() != state.editing_id {
        store.editing_id().set(state.editing_id);
    }
    if store.draft().with_untracked(|draft| draft != &state.draft) {
        store.draft().set(state.draft.clone());
    }
    if store.sort().get_untracked() != state.sort {
        store.sort().set(state.sort);
    }
}
