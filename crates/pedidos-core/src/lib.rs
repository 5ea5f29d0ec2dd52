//! Delivery Orders Core
//!
//! Layered architecture:
//! - domain: Order entity, form payloads, sorting and display helpers
//! - remote: REST client for the orders service
//! - controller: view state and the operations that mutate it
//!
//! Nothing here touches the DOM, so the whole crate runs under native tests.

pub mod controller;
pub mod domain;
pub mod remote;

pub use controller::{Outcome, OrderController, Prompt, Tab, ViewState};
pub use domain::{
    Order, OrderDraft, OrderId, OrderStats, OrderUpdate, SortConfig, SortDirection, SortKey,
    ValidationError, PAYMENT_METHODS,
};
pub use remote::{ApiConfig, ApiError, HttpOrderApi, Operation, OrderApi};
