//! Application Context
//!
//! Shared controller handle provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;
use pedidos_core::{HttpOrderApi, OrderController, Outcome};

use crate::browser::BrowserPrompt;

pub type UiController = OrderController<HttpOrderApi, BrowserPrompt>;

/// App-wide handle to the controller.
///
/// The controller is not `Send`, so it sits in local storage and only this
/// `Copy` handle travels through context.
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<UiController>, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: UiController) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn controller(&self) -> Rc<UiController> {
        self.controller.get_value()
    }

    /// Run a remote operation in the background
    pub fn run<F, Fut>(&self, name: &'static str, op: F)
    where
        F: FnOnce(Rc<UiController>) -> Fut + 'static,
        Fut: Future<Output = Outcome> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move {
            let outcome = op(controller).await;
            debug!("{} finished: {:?}", name, outcome);
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
