//! Order Entity
//!
//! A delivery order as returned by `GET /pedidos`. The service owns every
//! field; the client only ever holds a cached copy.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::format::{format_timestamp, parse_timestamp};

/// Identifier assigned by the remote service
pub type OrderId = u64;

/// A delivery order (wire names are the service's Portuguese field names)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "nomePessoa")]
    pub person_name: String,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    /// Empty or missing means "unspecified"
    #[serde(rename = "formaPagamento", default)]
    pub payment_method: Option<String>,
    #[serde(rename = "entregue", default, deserialize_with = "null_as_default")]
    pub delivered: bool,
    /// Raw creation timestamp, kept verbatim so it round-trips on update
    #[serde(rename = "dataPedido", default, deserialize_with = "null_as_default")]
    pub order_timestamp: String,
}

/// Missing and `null` both mean the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Order {
    /// Parsed creation time, `None` when the service sent something unreadable
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.order_timestamp)
    }

    /// Creation time in the short pt-BR form used by the table
    pub fn display_timestamp(&self) -> String {
        format_timestamp(&self.order_timestamp)
    }

    /// Payment method for display (`-` when unspecified)
    pub fn payment_label(&self) -> &str {
        match self.payment_method.as_deref() {
            Some(method) if !method.is_empty() => method,
            _ => "-",
        }
    }

    /// Status badge text
    pub fn status_label(&self) -> &'static str {
        if self.delivered { "Entregue" } else { "Pendente" }
    }
}

/// Counters shown above the order table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub delivered: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let delivered = orders.iter().filter(|o| o.delivered).count();
        Self {
            total: orders.len(),
            pending: orders.len() - delivered,
            delivered,
        }
    }
}
