//! HTTP implementation of `OrderApi`
//!
//! Uses reqwest, which goes through `fetch` on wasm32. One attempt per call:
//! no retry, no timeout, any non-2xx status is a failure.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{ApiConfig, ApiError, Operation, OrderApi};
use crate::domain::{Order, OrderDraft, OrderId, OrderUpdate};

const ORDERS_PATH: &str = "/pedidos";

/// Orders service client
#[derive(Debug, Clone)]
pub struct HttpOrderApi {
    client: Client,
    config: ApiConfig,
}

impl HttpOrderApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn order_url(&self, id: OrderId) -> String {
        self.config.url(&format!("{}/{}", ORDERS_PATH, id))
    }

    /// Send and return the body of a successful response
    async fn execute(&self, operation: Operation, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("{} request failed: {}", operation, e);
            ApiError::new(operation, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} rejected with status {}", operation, status);
            return Err(ApiError::status(operation, status));
        }

        response.text().await.map_err(|e| ApiError::new(operation, e))
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.execute(operation, request).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("{} returned unreadable body: {}", operation, e);
            ApiError::new(operation, e)
        })
    }
}

#[async_trait(?Send)]
impl OrderApi for HttpOrderApi {
    async fn list(&self) -> Result<Vec<Order>, ApiError> {
        let url = self.config.url(ORDERS_PATH);
        debug!("GET {}", url);
        self.execute_json(Operation::Fetch, self.client.get(url)).await
    }

    async fn create(&self, draft: &OrderDraft) -> Result<Order, ApiError> {
        let url = self.config.url(ORDERS_PATH);
        debug!("POST {}", url);
        self.execute_json(Operation::Create, self.client.post(url).json(draft)).await
    }

    async fn replace(&self, id: OrderId, update: &OrderUpdate) -> Result<Order, ApiError> {
        let url = self.order_url(id);
        debug!("PUT {}", url);
        self.execute_json(Operation::Update, self.client.put(url).json(update)).await
    }

    async fn delete(&self, id: OrderId) -> Result<serde_json::Value, ApiError> {
        let url = self.order_url(id);
        debug!("DELETE {}", url);
        let body = self.execute(Operation::Delete, self.client.delete(url)).await?;
        // 204 No Content is a valid confirmation
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::new(Operation::Delete, e))
    }

    async fn mark_delivered(&self, id: OrderId) -> Result<Order, ApiError> {
        let url = format!("{}/entregar", self.order_url(id));
        debug!("PATCH {}", url);
        self.execute_json(Operation::MarkDelivered, self.client.patch(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    fn order_json(id: u64, name: &str, delivered: bool) -> serde_json::Value {
        json!({
            "id": id,
            "nomePessoa": name,
            "quantidade": 2,
            "formaPagamento": "PIX",
            "entregue": delivered,
            "dataPedido": "2024-05-01T12:30:00"
        })
    }

    fn api_for(server: &MockServer) -> HttpOrderApi {
        HttpOrderApi::new(ApiConfig::new(server.url("/api")))
    }

    #[tokio::test]
    async fn test_list_orders() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/pedidos");
                then.status(200).json_body(json!([order_json(1, "Ana", false), order_json(2, "Bia", true)]));
            })
            .await;

        let orders = api_for(&server).list().await.expect("list failed");

        mock.assert_async().await;
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].person_name, "Ana");
        assert!(orders[1].delivered);
    }

    #[tokio::test]
    async fn test_list_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/pedidos");
                then.status(500).body("boom");
            })
            .await;

        let err = api_for(&server).list().await.unwrap_err();
        assert_eq!(err.operation, Operation::Fetch);
        assert_eq!(err.detail, "HTTP 500");
    }

    #[tokio::test]
    async fn test_list_unreadable_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/pedidos");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let err = api_for(&server).list().await.unwrap_err();
        assert_eq!(err.operation, Operation::Fetch);
    }

    #[tokio::test]
    async fn test_create_sends_draft() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/pedidos")
                    .json_body(json!({"nomePessoa": "Ana", "quantidade": 2, "formaPagamento": "PIX"}));
                then.status(201).json_body(order_json(10, "Ana", false));
            })
            .await;

        let draft = OrderDraft {
            person_name: "Ana".to_string(),
            quantity: 2,
            payment_method: "PIX".to_string(),
        };
        let created = api_for(&server).create(&draft).await.expect("create failed");

        mock.assert_async().await;
        assert_eq!(created.id, 10);
        assert!(!created.delivered);
    }

    #[tokio::test]
    async fn test_replace_sends_full_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/pedidos/3").json_body(json!({
                    "nomePessoa": "Caio",
                    "quantidade": 4,
                    "formaPagamento": "",
                    "entregue": true
                }));
                then.status(200).json_body(order_json(3, "Caio", true));
            })
            .await;

        let update = OrderUpdate {
            person_name: "Caio".to_string(),
            quantity: 4,
            payment_method: String::new(),
            delivered: true,
        };
        let updated = api_for(&server).replace(3, &update).await.expect("replace failed");

        mock.assert_async().await;
        assert!(updated.delivered);
    }

    #[tokio::test]
    async fn test_replace_not_found_is_generic_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/pedidos/99");
                then.status(404);
            })
            .await;

        let update = OrderUpdate {
            person_name: "X".to_string(),
            quantity: 1,
            payment_method: String::new(),
            delivered: false,
        };
        let err = api_for(&server).replace(99, &update).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to update order: HTTP 404");
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_and_json_bodies() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/pedidos/1");
                then.status(204);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/pedidos/2");
                then.status(200).json_body(json!({"message": "Pedido deletado"}));
            })
            .await;

        let api = api_for(&server);
        assert_eq!(api.delete(1).await.expect("delete 1 failed"), serde_json::Value::Null);
        assert_eq!(
            api.delete(2).await.expect("delete 2 failed"),
            json!({"message": "Pedido deletado"})
        );
    }

    #[tokio::test]
    async fn test_mark_delivered_uses_patch_without_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH).path("/api/pedidos/5/entregar");
                then.status(200).json_body(order_json(5, "Duda", true));
            })
            .await;

        let order = api_for(&server).mark_delivered(5).await.expect("patch failed");

        mock.assert_async().await;
        assert!(order.delivered);
    }

    #[tokio::test]
    async fn test_null_fields_are_accepted() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/pedidos");
                then.status(200).json_body(json!([
                    order_json(1, "Ana", true),
                    {
                        "id": 2,
                        "nomePessoa": "Bia",
                        "quantidade": 1,
                        "formaPagamento": null,
                        "entregue": false,
                        "dataPedido": null
                    }
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/pedidos");
                then.status(201).json_body(json!({
                    "id": 3,
                    "nomePessoa": "Caio",
                    "quantidade": 1,
                    "formaPagamento": "",
                    "entregue": null,
                    "dataPedido": null
                }));
            })
            .await;

        let api = api_for(&server);
        let orders = api.list().await.expect("list failed");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].order_timestamp, "");

        let draft = OrderDraft {
            person_name: "Caio".to_string(),
            ..OrderDraft::default()
        };
        let created = api.create(&draft).await.expect("create failed");
        assert_eq!(created.id, 3);
        assert!(!created.delivered);
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let api = HttpOrderApi::new(ApiConfig::new("http://127.0.0.1:1/api"));
        let err = api.list().await.unwrap_err();
        assert_eq!(err.operation, Operation::Fetch);
    }
}
