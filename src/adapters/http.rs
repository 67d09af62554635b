use crate::domain::model::{ServiceCatalog, ServiceRecord};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{DirectoryError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the catalog JSON from a fixed endpoint. The body must be an
/// array of record-shaped objects; extra fields are ignored, missing ones
/// come back empty.
pub struct HttpCatalogSource {
    client: Client,
    endpoint: String,
}

impl HttpCatalogSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<ServiceCatalog> {
        tracing::debug!("requesting service data from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("service data response status: {}", status);
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<ServiceRecord> = serde_json::from_slice(&body)?;
        Ok(ServiceCatalog::new(records))
    }
}
