//! # Catalog Transport
//!
//! The seam between the store and wherever products come from.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      HttpCatalogTransport                               │
//! │                                                                         │
//! │   GET <catalog url> ──► 2xx? ──no──► TransportError::Status            │
//! │        │                 │                                              │
//! │   timeout/connect       yes                                             │
//! │        │                 ▼                                              │
//! │        ▼           body as JSON array ──fail──► TransportError::Decode  │
//! │  TransportError::Http    │                                              │
//! │                          ▼                                              │
//! │                    Vec<RawProduct>  (unknown fields dropped)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Normalizing records into `Product`s is the store's job, so test doubles
//! only need to hand back raw records.

use async_trait::async_trait;
use reqwest::Client;
use shopcart_core::RawProduct;
use tracing::debug;

use crate::config::CatalogSettings;
use crate::error::{TransportError, TransportResult};

/// Fetches the raw product catalog.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Returns the upstream records in upstream order.
    async fn fetch_catalog(&self) -> TransportResult<Vec<RawProduct>>;
}

/// Catalog transport over HTTP GET + JSON.
#[derive(Debug, Clone)]
pub struct HttpCatalogTransport {
    client: Client,
    url: String,
}

impl HttpCatalogTransport {
    /// Builds a transport with the configured timeout and user agent.
    pub fn new(settings: &CatalogSettings) -> TransportResult<Self> {
        let mut builder = Client::builder().timeout(settings.timeout());
        if let Some(agent) = &settings.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(HttpCatalogTransport {
            client: builder.build()?,
            url: settings.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogTransport for HttpCatalogTransport {
    async fn fetch_catalog(&self) -> TransportResult<Vec<RawProduct>> {
        debug!(url = %self.url, "Fetching product catalog");

        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        let records: Vec<RawProduct> = serde_json::from_slice(&body)?;

        debug!(count = records.len(), "Catalog response decoded");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on a loopback port and returns its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{addr}/products")
    }

    fn transport_for(url: String) -> HttpCatalogTransport {
        let settings = CatalogSettings {
            url,
            timeout_secs: 5,
            user_agent: Some("shopcart-test".into()),
        };
        HttpCatalogTransport::new(&settings).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"title":"X","price":5,"image":"u","category":"misc"}]"#,
        )
        .await;
        let transport = transport_for(url);

        let records = transport.fetch_catalog().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("X"));
        assert_eq!(records[0].price, Some(5.0));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let url = serve_once("500 Internal Server Error", "{}").await;
        let transport = transport_for(url);

        let err = transport.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500 }));
        assert_eq!(err.to_string(), "Failed to fetch products (HTTP 500)");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let url = serve_once("200 OK", r#"{"not":"a list"}"#).await;
        let transport = transport_for(url);

        let err = transport.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop so the port is very likely closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = transport_for(format!("http://{addr}/products"));
        let err = transport.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}
