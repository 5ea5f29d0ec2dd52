//! Order Controller
//!
//! Single owner of the view state. Every successful mutation is followed by
//! a full reload; failures are reported through the `Prompt` and leave the
//! state as it was.

use std::cell::{Cell, RefCell};

use log::{info, warn};

use super::prompt::{messages, Prompt};
use super::state::{Tab, ViewState};
use crate::domain::{OrderDraft, OrderId, OrderUpdate, SortKey};
use crate::remote::OrderApi;

/// What an operation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Remote call succeeded
    Done,
    /// Rejected by client-side validation, nothing sent
    Invalid,
    /// User declined the confirmation, nothing sent
    Cancelled,
    /// Remote call failed and the user was told
    Failed,
    /// Another mutation was still in flight
    Ignored,
}

type Observer = Box<dyn Fn(&ViewState)>;

/// View-state controller over an `OrderApi` and a `Prompt`.
///
/// State lives in a `RefCell` that is never borrowed across an `.await`, so
/// the methods take `&self` and can be shared through an `Rc`.
pub struct OrderController<A, P> {
    api: A,
    prompt: P,
    state: RefCell<ViewState>,
    busy: Cell<bool>,
    observer: RefCell<Option<Observer>>,
}

impl<A: OrderApi, P: Prompt> OrderController<A, P> {
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            state: RefCell::new(ViewState::default()),
            busy: Cell::new(false),
            observer: RefCell::new(None),
        }
    }

    /// Receive a snapshot after every state change (replaces any previous observer)
    pub fn subscribe(&self, observer: impl Fn(&ViewState) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
        self.publish();
    }

    /// Copy of the current state
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Whether a mutation is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn mutate(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.state.borrow_mut());
        self.publish();
    }

    fn publish(&self) {
        let snapshot = self.state();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }

    // ========================
    // Synchronous transitions
    // ========================

    pub fn select_tab(&self, tab: Tab) {
        self.mutate(|s| s.tab = tab);
    }

    /// Put one row in edit mode; any other row leaves it
    pub fn start_editing(&self, id: OrderId) {
        self.mutate(|s| s.editing_id = Some(id));
    }

    pub fn cancel_editing(&self) {
        self.mutate(|s| s.editing_id = None);
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut OrderDraft)) {
        self.mutate(|s| f(&mut s.draft));
    }

    /// Header click. Only the display order changes; the cache is untouched.
    pub fn sort_by(&self, key: SortKey) {
        self.mutate(|s| s.sort = s.sort.toggled(key));
    }

    // ========================
    // Remote operations
    // ========================

    /// Fetch the full list, with the loading flag raised meanwhile.
    ///
    /// Only runs on mount, so it does not take the busy guard. A mutation
    /// finishing during a load clears the loading flag early.
    pub async fn load(&self) -> Outcome {
        self.mutate(|s| s.loading = true);
        let outcome = self.reload().await;
        self.mutate(|s| s.loading = false);
        outcome
    }

    /// Replace the cache with the remote list; on failure keep the old one
    async fn reload(&self) -> Outcome {
        match self.api.list().await {
            Ok(orders) => {
                info!("loaded {} orders", orders.len());
                self.mutate(|s| s.orders = orders);
                Outcome::Done
            }
            Err(e) => {
                self.prompt.alert(&messages::failure(messages::LOAD_FAILED, &e));
                Outcome::Failed
            }
        }
    }

    fn begin(&self, operation: &str) -> bool {
        if self.busy.get() {
            warn!("ignoring {} while another request is in flight", operation);
            return false;
        }
        self.busy.set(true);
        self.mutate(|s| s.loading = true);
        true
    }

    fn finish(&self) {
        self.busy.set(false);
        self.mutate(|s| s.loading = false);
    }

    /// Submit the create-form draft
    pub async fn create(&self) -> Outcome {
        let draft = self.state.borrow().draft.clone();
        if let Err(e) = draft.validate() {
            self.prompt.alert(&e.to_string());
            return Outcome::Invalid;
        }
        if !self.begin("create") {
            return Outcome::Ignored;
        }

        let outcome = match self.api.create(&draft).await {
            Ok(order) => {
                info!("created order {}", order.id);
                self.mutate(|s| s.draft = OrderDraft::default());
                self.reload().await;
                self.mutate(|s| s.tab = Tab::List);
                self.prompt.alert(messages::CREATED);
                Outcome::Done
            }
            Err(e) => {
                self.prompt.alert(&messages::failure(messages::CREATE_FAILED, &e));
                Outcome::Failed
            }
        };

        self.finish();
        outcome
    }

    /// Replace an order with the inline-edit payload
    pub async fn update(&self, id: OrderId, update: OrderUpdate) -> Outcome {
        if let Err(e) = update.validate() {
            self.prompt.alert(&e.to_string());
            return Outcome::Invalid;
        }
        if !self.begin("update") {
            return Outcome::Ignored;
        }

        let outcome = match self.api.replace(id, &update).await {
            Ok(_) => {
                info!("updated order {}", id);
                self.mutate(|s| s.editing_id = None);
                self.reload().await;
                self.prompt.alert(messages::UPDATED);
                Outcome::Done
            }
            Err(e) => {
                self.prompt.alert(&messages::failure(messages::UPDATE_FAILED, &e));
                Outcome::Failed
            }
        };

        self.finish();
        outcome
    }

    /// Delete after the user confirms
    pub async fn delete(&self, id: OrderId) -> Outcome {
        if self.busy.get() {
            warn!("ignoring delete of {} while another request is in flight", id);
            return Outcome::Ignored;
        }
        if !self.prompt.confirm(messages::CONFIRM_DELETE) {
            return Outcome::Cancelled;
        }
        if !self.begin("delete") {
            return Outcome::Ignored;
        }

        let outcome = match self.api.delete(id).await {
            Ok(_) => {
                info!("deleted order {}", id);
                self.reload().await;
                self.prompt.alert(messages::DELETED);
                Outcome::Done
            }
            Err(e) => {
                self.prompt.alert(&messages::failure(messages::DELETE_FAILED, &e));
                Outcome::Failed
            }
        };

        self.finish();
        outcome
    }

    pub async fn mark_delivered(&self, id: OrderId) -> Outcome {
        if !self.begin("mark delivered") {
            return Outcome::Ignored;
        }

        let outcome = match self.api.mark_delivered(id).await {
            Ok(_) => {
                info!("order {} delivered", id);
                self.reload().await;
                self.prompt.alert(messages::DELIVERED);
                Outcome::Done
            }
            Err(e) => {
                self.prompt.alert(&messages::failure(messages::DELIVER_FAILED, &e));
                Outcome::Failed
            }
        };

        self.finish();
        outcome
    }
}
