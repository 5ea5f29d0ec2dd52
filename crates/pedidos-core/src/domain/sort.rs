//! Table Sorting
//!
//! Column sort applied to a copy of the cached orders at render time.

use std::cmp::Ordering;

use super::order::Order;

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    PersonName,
    Quantity,
    PaymentMethod,
    Delivered,
    OrderTimestamp,
}

impl SortKey {
    /// All columns in table order
    pub const ALL: [SortKey; 6] = [
        SortKey::Id,
        SortKey::PersonName,
        SortKey::Quantity,
        SortKey::PaymentMethod,
        SortKey::Delivered,
        SortKey::OrderTimestamp,
    ];

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::PersonName => "Nome",
            SortKey::Quantity => "Qtd",
            SortKey::PaymentMethod => "Pagamento",
            SortKey::Delivered => "Status",
            SortKey::OrderTimestamp => "Data",
        }
    }

    fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::PersonName => collate(&a.person_name, &b.person_name),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::PaymentMethod => collate(
                a.payment_method.as_deref().unwrap_or(""),
                b.payment_method.as_deref().unwrap_or(""),
            ),
            SortKey::Delivered => a.delivered.cmp(&b.delivered),
            SortKey::OrderTimestamp => a.timestamp().cmp(&b.timestamp()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Newest orders first
    fn default() -> Self {
        Self {
            key: SortKey::OrderTimestamp,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    /// Header click: flip direction on the same column, else ascending on the new one
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }

    /// Whether the header arrow for `key` in `direction` is highlighted
    pub fn is_active(&self, key: SortKey, direction: SortDirection) -> bool {
        self.key == key && self.direction == direction
    }
}

/// Sorted copy of `orders`; the input is never touched
pub fn sorted(orders: &[Order], config: SortConfig) -> Vec<Order> {
    let mut copy = orders.to_vec();
    copy.sort_by(|a, b| {
        let ord = config.key.compare(a, b);
        match config.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    copy
}

/// Case- and accent-insensitive comparison, raw text as tie-break
fn collate(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.chars().flat_map(char::to_lowercase).map(strip_accent).collect::<String>();
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}
