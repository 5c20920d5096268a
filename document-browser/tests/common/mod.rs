#![allow(dead_code)]

use async_trait::async_trait;
use document_browser::models::RawDocument;
use document_browser::{DocumentRepository, RepositoryError};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

pub type DocumentsResult = Result<Vec<RawDocument>, RepositoryError>;

/// Repository whose responses are released by the test through channels, so
/// each test controls when and in which order the fetches resolve.
pub struct FakeRepository {
    documents: Mutex<mpsc::UnboundedReceiver<DocumentsResult>>,
    types: Mutex<mpsc::UnboundedReceiver<Vec<String>>>,
    documents_served: AtomicUsize,
    types_served: AtomicUsize,
}

pub struct FakeHandles {
    pub documents: mpsc::UnboundedSender<DocumentsResult>,
    pub types: mpsc::UnboundedSender<Vec<String>>,
}

impl FakeRepository {
    pub fn new() -> (Arc<Self>, FakeHandles) {
        let (documents_tx, documents_rx) = mpsc::unbounded_channel();
        let (types_tx, types_rx) = mpsc::unbounded_channel();

        let repo = Arc::new(Self {
            documents: Mutex::new(documents_rx),
            types: Mutex::new(types_rx),
            documents_served: AtomicUsize::new(0),
            types_served: AtomicUsize::new(0),
        });

        let handles = FakeHandles {
            documents: documents_tx,
            types: types_tx,
        };

        (repo, handles)
    }

    /// A repository that answers immediately.
    pub fn ready(documents: DocumentsResult, types: Vec<String>) -> Arc<Self> {
        let (repo, handles) = Self::new();
        handles.documents.send(documents).ok();
        handles.types.send(types).ok();
        repo
    }

    pub fn documents_served(&self) -> usize {
        self.documents_served.load(Ordering::SeqCst)
    }

    pub fn types_served(&self) -> usize {
        self.types_served.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentRepository for FakeRepository {
    async fn fetch_documents(&self) -> DocumentsResult {
        let result = self
            .documents
            .lock()
            .await
            .recv()
            .await
            .unwrap_or_else(|| Err(RepositoryError::Network("fake closed".into())));
        self.documents_served.fetch_add(1, Ordering::SeqCst);
        result
    }

    async fn fetch_document_types(&self) -> Vec<String> {
        let types = self.types.lock().await.recv().await.unwrap_or_default();
        self.types_served.fetch_add(1, Ordering::SeqCst);
        types
    }
}

pub fn raw(value: Value) -> RawDocument {
    serde_json::from_value(value).expect("valid raw document")
}

/// The three-document scenario: two leases and an invoice.
pub fn scenario_json() -> Value {
    json!([
        { "id": 1, "title": "Lease A", "type": "Contract" },
        { "id": 2, "name": "Invoice 2024", "type": "Invoice" },
        { "id": 3, "title": "Lease B", "type": "Contract" }
    ])
}

pub fn scenario_documents() -> Vec<RawDocument> {
    serde_json::from_value(scenario_json()).expect("valid scenario")
}

pub fn ids(docs: &[Arc<document_browser::models::DisplayDocument>]) -> Vec<String> {
    docs.iter().map(|d| d.id.to_string()).collect()
}

/// Let spawned tasks on the current-thread runtime make progress.
pub async fn settle_tasks() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
