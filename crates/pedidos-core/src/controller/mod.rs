//! View-State Controller
//!
//! Owns everything the page shows and funnels every mutation through the
//! remote client, re-fetching the full list after each success.

mod state;
mod prompt;
mod order_controller;


pub use state::{Tab, ViewState};
pub use prompt::{messages, Prompt};
pub use order_controller::{Outcome, OrderController};
