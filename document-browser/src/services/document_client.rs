//! Documents API client.
//!
//! [`DocumentRepository`] is the capability the view depends on; the HTTP
//! implementation talks to `{base_url}/api/documents` with the session cookie
//! attached, and tests substitute in-memory fakes.

use crate::config::ApiSettings;
use crate::models::{DocumentTypesEnvelope, DocumentsEnvelope, RawDocument};
use anyhow::Result;
use async_trait::async_trait;
use client_core::observability::TracedClientExt;
use reqwest::cookie::Jar;
use reqwest::{Client, Url};
use secrecy::ExposeSecret;
use std::sync::Arc;
use uuid::Uuid;

pub const DOCUMENTS_PATH: &str = "/api/documents";
pub const DOCUMENT_TYPES_PATH: &str = "/api/documents/types";

/// User-facing message for a failed document list load.
pub const DOCUMENTS_LOAD_ERROR: &str = "Erreur lors du chargement des documents";

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The API answered with a non-2xx status.
    #[error("Erreur lors du chargement des documents")]
    Fetch { status: u16 },

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The body was not the expected JSON shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl RepositoryError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            RepositoryError::Network(DOCUMENTS_LOAD_ERROR.to_string())
        } else {
            RepositoryError::Network(message)
        }
    }
}

/// Source of documents and of the type catalog.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Full document collection.
    async fn fetch_documents(&self) -> Result<Vec<RawDocument>, RepositoryError>;

    /// Distinct type labels for the filter. Any failure yields an empty
    /// catalog; this call never reports an error.
    async fn fetch_document_types(&self) -> Vec<String>;
}

pub struct HttpDocumentRepository {
    client: Client,
    base_url: String,
}

impl HttpDocumentRepository {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let jar = Arc::new(Jar::default());

        if let Some(cookie) = &settings.session_cookie {
            match Url::parse(&settings.base_url) {
                Ok(url) => jar.add_cookie_str(cookie.expose_secret(), &url),
                Err(e) => tracing::warn!(
                    base_url = %settings.base_url,
                    error = %e,
                    "Session cookie ignored: base URL is not absolute"
                ),
            }
        }

        let mut builder = Client::builder().cookie_provider(jar);
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            anyhow::anyhow!("HTTP client construction failed: {}", e)
        })?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Credentialed GET returning the raw body of a 2xx response.
    async fn get_body(&self, path: &str) -> Result<String, RepositoryError> {
        let url = self.endpoint(path);
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .client
            .traced_get(&url)
            .header("accept", "application/json")
            .send_with_request_id(&request_id)
            .await
            .map_err(|e| {
                tracing::error!(url = %url, request_id = %request_id, error = %e, "GET request failed");
                RepositoryError::network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                url = %url,
                request_id = %request_id,
                status = status.as_u16(),
                "Documents API returned an error status"
            );
            return Err(RepositoryError::Fetch {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(RepositoryError::network)
    }

    /// Type catalog with failures reported, for callers that want them.
    pub async fn try_fetch_document_types(&self) -> Result<Vec<String>, RepositoryError> {
        let body = self.get_body(DOCUMENT_TYPES_PATH).await?;
        let envelope: DocumentTypesEnvelope = serde_json::from_str(&body)
            .map_err(|e| RepositoryError::MalformedResponse(e.to_string()))?;
        Ok(envelope.into_types())
    }
}

#[async_trait]
impl DocumentRepository for HttpDocumentRepository {
    async fn fetch_documents(&self) -> Result<Vec<RawDocument>, RepositoryError> {
        let body = self.get_body(DOCUMENTS_PATH).await?;

        let documents = match serde_json::from_str::<DocumentsEnvelope>(&body) {
            Ok(envelope) => envelope.into_documents(),
            Err(e) => {
                let err = RepositoryError::MalformedResponse(e.to_string());
                tracing::warn!(error = %err, "Treating malformed document list as empty");
                Vec::new()
            }
        };

        tracing::info!(count = documents.len(), "Fetched documents");
        Ok(documents)
    }

    async fn fetch_document_types(&self) -> Vec<String> {
        match self.try_fetch_document_types().await {
            Ok(types) => {
                tracing::debug!(count = types.len(), "Fetched document types");
                types
            }
            Err(e) => {
                tracing::debug!(error = %e, "Document types unavailable, filter offers no types");
                Vec::new()
            }
        }
    }
}
