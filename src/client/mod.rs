// ==========================================
// Snackhouse POS - REST API client
// ==========================================
// Thin typed client over the backend REST API. Server
// errors are surfaced verbatim (server message when
// present, generic otherwise); no retry at this layer.
// ==========================================

pub mod identity;

pub use identity::{resolve_acting_user, IdentityProvider, StoredSessionIdentity, FALLBACK_ADMIN_ID};

use crate::config::ClientConfig;
use crate::domain::{ImportedOrder, MenuCategory, Order};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const ORDERS_PATH: &str = "/api/orders";
pub const MENU_PATH: &str = "/api/menu";
pub const BULK_IMPORT_PATH: &str = "/api/orders/bulk-import";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Standard backend response envelope:
/// `{ "success": bool, "message": ..., "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Bulk-import request body: `{ "orders": [...] }`.
#[derive(Debug, Serialize)]
struct BulkImportBody<'a> {
    orders: &'a [ImportedOrder],
}

#[derive(Debug, Clone)]
pub struct PosClient {
    http: reqwest::Client,
    base_url: String,
}

impl PosClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/orders
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        let response = self.http.get(self.url(ORDERS_PATH)).send().await?;
        Self::read_enveloped(response).await
    }

    /// GET /api/menu
    pub async fn list_menu(&self) -> ClientResult<Vec<MenuCategory>> {
        let response = self.http.get(self.url(MENU_PATH)).send().await?;
        Self::read_enveloped(response).await
    }

    /// POST /api/orders/bulk-import. Returns the number of
    /// orders the backend actually accepted, which may be
    /// lower than submitted (schema rejection).
    pub async fn bulk_import_orders(&self, orders: &[ImportedOrder]) -> ClientResult<usize> {
        let response = self
            .http
            .post(self.url(BULK_IMPORT_PATH))
            .json(&BulkImportBody { orders })
            .send()
            .await?;
        let accepted: Vec<Value> = Self::read_enveloped(response).await?;
        Ok(accepted.len())
    }

    async fn read_enveloped<T: DeserializeOwned + Default>(
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| "request failed".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<T> = response.json().await?;
        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let envelope: ApiEnvelope<Vec<Order>> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());

        let envelope: ApiEnvelope<Vec<Order>> =
            serde_json::from_str(r#"{"success":true,"data":[]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap().len(), 0);
    }

    #[test]
    fn test_base_url_trimming() {
        let config = ClientConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ClientConfig::default()
        };
        let client = PosClient::new(&config).unwrap();
        assert_eq!(client.url(ORDERS_PATH), "http://localhost:8000/api/orders");
    }
}
