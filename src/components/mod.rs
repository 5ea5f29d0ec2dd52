//! UI Components
//!
//! Reusable Leptos components.

mod tab_bar;
mod stats_cards;
mod order_table;
mod order_row;
mod editable_row;
mod new_order_form;
mod log_panel;

pub use tab_bar::TabBar;
pub use stats_cards::StatsCards;
pub use order_table::OrderTable;
pub use order_row::OrderRow;
pub use editable_row::EditableRow;
pub use new_order_form::NewOrderForm;
pub use log_panel::LogPanel;
