//! Retrieval of the resource specification document.

use halloumi_snippets_model::SchemaDocument;
use tracing::{debug, info};

use crate::error::{SnippetError, SnippetResult};

/// Downloads and parses the resource specification with one HTTP GET.
///
/// There is no retry: any transport, status or parse failure is returned to
/// the caller and aborts the run.
#[derive(Debug, Clone)]
pub struct SchemaFetcher {
    client: reqwest::Client,
    url: String,
}

impl SchemaFetcher {
    /// Create a fetcher for `url` with a default HTTP client.
    pub fn new(url: impl Into<String>) -> SnippetResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("halloumi-snippets/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, url))
    }

    /// Create a fetcher that reuses an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The document URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the document.
    pub async fn fetch(&self) -> SnippetResult<SchemaDocument> {
        info!(url = %self.url, "fetching resource specification");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SnippetError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "received resource specification");

        let document: SchemaDocument =
            serde_json::from_slice(&body).map_err(SnippetError::Parse)?;

        info!(
            version = document.resource_specification_version.as_deref().unwrap_or("unknown"),
            resource_types = document.resource_types.len(),
            property_types = document.property_types.len(),
            "parsed resource specification"
        );

        Ok(document)
    }
}
