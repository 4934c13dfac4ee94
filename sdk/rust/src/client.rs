use std::collections::BTreeMap;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// A customer record as returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

/// Payload for creating or replacing a customer. The registry assigns ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("customer {0} not found")]
    NotFound(String),

    #[error("registry returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the customer registry API.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Build on top of an existing `reqwest::Client` (custom timeouts, pooling).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every customer currently held by the registry.
    pub async fn list(&self) -> Result<Vec<Customer>, ClientError> {
        let resp = self.client.get(self.collection_url()).send().await?;
        Ok(check(resp, None).await?.json().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Customer, ClientError> {
        let resp = self.client.get(self.item_url(id)).send().await?;
        Ok(check(resp, Some(id)).await?.json().await?)
    }

    /// Create a customer and return it with the id the registry assigned.
    pub async fn create(&self, draft: &CustomerDraft) -> Result<Customer, ClientError> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        Ok(check(resp, None).await?.json().await?)
    }

    /// Replace every field of customer `id`. The id itself never changes.
    pub async fn update(&self, id: &str, draft: &CustomerDraft) -> Result<Customer, ClientError> {
        let resp = self
            .client
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await?;
        Ok(check(resp, Some(id)).await?.json().await?)
    }

    /// Delete customer `id`, returning the remaining records keyed by id.
    pub async fn delete(&self, id: &str) -> Result<BTreeMap<String, Customer>, ClientError> {
        let resp = self.client.delete(self.item_url(id)).send().await?;
        Ok(check(resp, Some(id)).await?.json().await?)
    }

    fn collection_url(&self) -> String {
        format!("{}/customers", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/customers/{}", self.base_url, id)
    }
}

async fn check(resp: Response, id: Option<&str>) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(ClientError::NotFound(id.to_string()));
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve one canned response per connection and return the base url.
    async fn start_mock_registry(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut request = [0u8; 4096];
                    let _ = socket.read(&mut request).await;
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_404_for_an_id_is_not_found() {
        let url = start_mock_registry("404 Not Found", "Customer not found").await;
        let client = RegistryClient::new(&url);

        assert!(matches!(
            client.get("9").await,
            Err(ClientError::NotFound(id)) if id == "9"
        ));
        assert!(matches!(
            client.delete("9").await,
            Err(ClientError::NotFound(id)) if id == "9"
        ));
    }

    #[tokio::test]
    async fn test_other_failures_keep_status_and_body() {
        let url = start_mock_registry("500 Internal Server Error", "boom").await;
        let client = RegistryClient::new(&url);

        match client.list().await {
            Err(ClientError::Status { status, body }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "boom");
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = RegistryClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.item_url("7"), "http://localhost:8000/customers/7");
        assert_eq!(client.collection_url(), "http://localhost:8000/customers");
    }

    #[test]
    fn test_draft_ignores_ids_on_the_wire() {
        let draft: CustomerDraft =
            serde_json::from_str(r#"{"id":"9","name":"Ada","role":"CEO","email":"a@b.c","phone":"1","contacted":true}"#)
                .unwrap();
        assert_eq!(draft.name, "Ada");
        assert!(draft.contacted);

        let encoded = serde_json::to_value(&draft).unwrap();
        assert!(encoded.get("id").is_none());
    }
}
