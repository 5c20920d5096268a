use crate::models::DisplayDocument;
use crate::services::filter::{filter_documents, TypeFilter};
use serde::Serialize;
use std::sync::Arc;

/// Progress of the document list fetch.
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Ready(Vec<Arc<DisplayDocument>>),
    Failed(String),
}

/// Preview modal. The open variant shares the document with the collection.
#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Arc<DisplayDocument>),
}

/// Everything the presentation layer reads. Mutated only by the controller.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub fetch: FetchState,
    pub doc_types: Vec<String>,
    /// Set once the catalog request has finished, whatever its outcome.
    pub catalog_settled: bool,
    pub search: String,
    pub type_filter: TypeFilter,
    pub modal: ModalState,
}

impl ViewState {
    pub fn documents(&self) -> &[Arc<DisplayDocument>] {
        match &self.fetch {
            FetchState::Ready(docs) => docs,
            FetchState::Loading | FetchState::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.fetch {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Both fetches have completed.
    pub fn is_settled(&self) -> bool {
        !self.is_loading() && self.catalog_settled
    }

    pub fn preview_doc(&self) -> Option<&Arc<DisplayDocument>> {
        match &self.modal {
            ModalState::Open(doc) => Some(doc),
            ModalState::Closed => None,
        }
    }

    pub fn filtered_documents(&self) -> Vec<Arc<DisplayDocument>> {
        filter_documents(self.documents(), &self.search, &self.type_filter)
    }

    pub fn view_model(&self) -> DocumentsViewModel {
        DocumentsViewModel {
            documents: self.documents().to_vec(),
            loading: self.is_loading(),
            error: self.error().map(str::to_string),
            filtered_documents: self.filtered_documents(),
            search: self.search.clone(),
            filter_type: self.type_filter.as_option().map(str::to_string),
            doc_types: self.doc_types.clone(),
            preview_doc: self.preview_doc().cloned(),
            show_preview: matches!(self.modal, ModalState::Open(_)),
        }
    }
}

/// Snapshot handed to renderers.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentsViewModel {
    pub documents: Vec<Arc<DisplayDocument>>,
    pub loading: bool,
    pub error: Option<String>,
    pub filtered_documents: Vec<Arc<DisplayDocument>>,
    pub search: String,
    pub filter_type: Option<String>,
    pub doc_types: Vec<String>,
    pub preview_doc: Option<Arc<DisplayDocument>>,
    pub show_preview: bool,
}
