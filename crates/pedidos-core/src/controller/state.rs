//! View state

use crate::domain::{sorted, Order, OrderDraft, OrderId, OrderStats, SortConfig};

/// Top-level display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    List,
    Create,
}

/// Snapshot of the page state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Cached copy of the remote list, replaced wholesale on every reload
    pub orders: Vec<Order>,
    pub tab: Tab,
    pub loading: bool,
    /// Row in inline edit mode (at most one)
    pub editing_id: Option<OrderId>,
    pub draft: OrderDraft,
    pub sort: SortConfig,
}

impl ViewState {
    /// Orders in display order
    pub fn sorted_orders(&self) -> Vec<Order> {
        sorted(&self.orders, self.sort)
    }

    pub fn stats(&self) -> OrderStats {
        OrderStats::from_orders(&self.orders)
    }

    pub fn is_editing(&self, id: OrderId) -> bool {
        self.editing_id == Some(id)
    }
}
