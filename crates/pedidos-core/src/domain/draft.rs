//! Form Payloads
//!
//! The create-form draft and the inline-edit payload, with the presence
//! checks applied before anything is sent.

use serde::Serialize;
use thiserror::Error;

use super::order::Order;

/// Suggested payment methods, as `(value, label)`; empty value = unspecified
pub const PAYMENT_METHODS: &[(&str, &str)] = &[
    ("", "Selecione uma opção"),
    ("Dinheiro", "Dinheiro"),
    ("PIX", "PIX"),
    ("Cartão", "Cartão"),
    ("Débito", "Débito"),
    ("Crédito", "Crédito"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Nome e quantidade são obrigatórios!")]
    MissingRequired,
}

/// Parse a quantity input; invalid or non-positive input becomes 1
pub fn parse_quantity(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

fn check_required(person_name: &str, quantity: u32) -> Result<(), ValidationError> {
    if person_name.trim().is_empty() || quantity == 0 {
        return Err(ValidationError::MissingRequired);
    }
    Ok(())
}

/// In-progress create form, serialized as the `POST /pedidos` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    #[serde(rename = "nomePessoa")]
    pub person_name: String,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "formaPagamento")]
    pub payment_method: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            person_name: String::new(),
            quantity: 1,
            payment_method: String::new(),
        }
    }
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required(&self.person_name, self.quantity)
    }
}

/// Full replacement payload for `PUT /pedidos/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderUpdate {
    #[serde(rename = "nomePessoa")]
    pub person_name: String,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "formaPagamento")]
    pub payment_method: String,
    #[serde(rename = "entregue")]
    pub delivered: bool,
}

impl OrderUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required(&self.person_name, self.quantity)
    }
}

impl From<&Order> for OrderUpdate {
    fn from(order: &Order) -> Self {
        Self {
            person_name: order.person_name.clone(),
            quantity: order.quantity,
            payment_method: order.payment_method.clone().unwrap_or_default(),
            delivered: order.delivered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), 1);
        assert_eq!(parse_quantity("2.5"), 1);
    }

    #[test]
    fn test_draft_defaults() {
        let draft = OrderDraft::default();
        assert_eq!(draft.person_name, "");
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.payment_method, "");
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = OrderDraft {
            person_name: "Ana".to_string(),
            quantity: 2,
            payment_method: "PIX".to_string(),
        };
        assert!(draft.validate().is_ok());

        draft.person_name = "   ".to_string();
        assert!(draft.validate().is_err());

        draft.person_name = "Ana".to_string();
        draft.quantity = 0;
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_wire_format() {
        let draft = OrderDraft {
            person_name: "Ana".to_string(),
            quantity: 2,
            payment_method: "PIX".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"nomePessoa": "Ana", "quantidade": 2, "formaPagamento": "PIX"})
        );
    }

    #[test]
    fn test_update_from_order() {
        let order = Order {
            id: 4,
            person_name: "Caio".to_string(),
            quantity: 5,
            payment_method: None,
            delivered: true,
            order_timestamp: String::new(),
        };
        let update = OrderUpdate::from(&order);
        assert_eq!(update.payment_method, "");
        assert!(update.delivered);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"nomePessoa": "Caio", "quantidade": 5, "formaPagamento": "", "entregue": true})
        );
    }
}
