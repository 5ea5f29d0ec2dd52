//! Domain Layer
//!
//! The order entity as the remote service exposes it, plus the client-side
//! payloads and derived views built from it.

mod order;
mod draft;
mod sort;
mod format;

pub use order::{Order, OrderId, OrderStats};
pub use draft::{parse_quantity, OrderDraft, OrderUpdate, ValidationError, PAYMENT_METHODS};
pub use sort::{sorted, SortConfig, SortDirection, SortKey};
pub use format::{format_timestamp, parse_timestamp};
