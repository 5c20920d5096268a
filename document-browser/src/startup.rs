use crate::config::Settings;
use crate::services::document_client::{DocumentRepository, HttpDocumentRepository};
use crate::view::DocumentsView;
use std::sync::Arc;

pub const SERVICE_NAME: &str = "document-browser";

pub fn build_repository(settings: &Settings) -> anyhow::Result<Arc<dyn DocumentRepository>> {
    let repository = HttpDocumentRepository::new(&settings.api)?;

    tracing::info!(base_url = %repository.base_url(), "Documents API client ready");
    Ok(Arc::new(repository))
}

/// Build the HTTP repository and mount a view on it.
pub fn mount_view(settings: &Settings) -> anyhow::Result<DocumentsView> {
    Ok(DocumentsView::mount(build_repository(settings)?))
}
