//! Remote Client - Core Trait

use async_trait::async_trait;

use super::ApiError;
use crate::domain::{Order, OrderDraft, OrderId, OrderUpdate};

/// Operations the orders service offers.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait OrderApi {
    /// `GET /pedidos`
    async fn list(&self) -> Result<Vec<Order>, ApiError>;

    /// `POST /pedidos`
    async fn create(&self, draft: &OrderDraft) -> Result<Order, ApiError>;

    /// `PUT /pedidos/{id}`
    async fn replace(&self, id: OrderId, update: &OrderUpdate) -> Result<Order, ApiError>;

    /// `DELETE /pedidos/{id}`, returning whatever confirmation the service sends
    async fn delete(&self, id: OrderId) -> Result<serde_json::Value, ApiError>;

    /// `PATCH /pedidos/{id}/entregar`
    async fn mark_delivered(&self, id: OrderId) -> Result<Order, ApiError>;
}
