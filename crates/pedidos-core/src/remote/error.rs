//! Remote Client Errors

use std::fmt;

use thiserror::Error;

/// Which remote operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
    MarkDelivered,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::Fetch => "fetch orders",
            Operation::Create => "create order",
            Operation::Update => "update order",
            Operation::Delete => "delete order",
            Operation::MarkDelivered => "mark order as delivered",
        };
        f.write_str(text)
    }
}

/// The single failure kind of the remote client.
///
/// Transport, status and parse failures are not told apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to {operation}: {detail}")]
pub struct ApiError {
    pub operation: Operation,
    pub detail: String,
}

impl ApiError {
    pub fn new(operation: Operation, detail: impl fmt::Display) -> Self {
        Self {
            operation,
            detail: detail.to_string(),
        }
    }

    pub fn status(operation: Operation, status: reqwest::StatusCode) -> Self {
        Self::new(operation, format!("HTTP {}", status.as_u16()))
    }
}
