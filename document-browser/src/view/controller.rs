use crate::models::DisplayDocument;
use crate::services::document_client::DocumentRepository;
use crate::services::filter::TypeFilter;
use crate::services::normalizer::normalize;
use crate::view::state::{DocumentsViewModel, FetchState, ModalState, ViewState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Owns the document view state for one mount.
///
/// Mounting starts the document and catalog fetches as two independent tasks;
/// each applies its result as soon as it resolves. Results that arrive after
/// [`DocumentsView::unmount`], or that belong to a superseded
/// [`DocumentsView::reload`], are dropped.
pub struct DocumentsView {
    repository: Arc<dyn DocumentRepository>,
    state: Arc<watch::Sender<ViewState>>,
    generation: Arc<AtomicU64>,
    teardown: CancellationToken,
}

#[derive(Clone)]
struct StaleGuard {
    generation: u64,
    current: Arc<AtomicU64>,
    teardown: CancellationToken,
}

impl StaleGuard {
    fn is_stale(&self) -> bool {
        self.teardown.is_cancelled() || self.current.load(Ordering::Acquire) != self.generation
    }
}

impl DocumentsView {
    /// Mount the view and kick off both fetches.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn mount(repository: Arc<dyn DocumentRepository>) -> Self {
        let (state, _) = watch::channel(ViewState::default());

        let view = Self {
            repository,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            teardown: CancellationToken::new(),
        };

        tracing::debug!("Mounting documents view");
        view.spawn_documents_fetch(0);
        view.spawn_catalog_fetch();
        view
    }

    /// Refetch the document list, e.g. after a failure. The catalog is kept.
    pub fn reload(&self) {
        if self.teardown.is_cancelled() {
            return;
        }

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.state.send_modify(|s| s.fetch = FetchState::Loading);

        tracing::info!(generation, "Reloading documents");
        self.spawn_documents_fetch(generation);
    }

    /// Tear the view down. Pending fetches still run to completion but their
    /// results are discarded.
    pub fn unmount(self) {
        tracing::debug!("Unmounting documents view");
    }

    fn spawn_documents_fetch(&self, generation: u64) {
        let guard = StaleGuard {
            generation,
            current: self.generation.clone(),
            teardown: self.teardown.clone(),
        };
        let repository = self.repository.clone();
        let state = self.state.clone();

        tokio::spawn(
            async move {
                let result = repository.fetch_documents().await;

                state.send_if_modified(|s| {
                    if guard.is_stale() {
                        tracing::debug!("Discarding stale document list");
                        return false;
                    }

                    s.fetch = match result {
                        Ok(raw) => {
                            let documents: Vec<Arc<DisplayDocument>> =
                                raw.into_iter().map(|r| Arc::new(normalize(r))).collect();
                            tracing::info!(count = documents.len(), "Documents ready");
                            FetchState::Ready(documents)
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Document list failed to load");
                            FetchState::Failed(e.to_string())
                        }
                    };
                    // The selection may point at a document from a previous load.
                    let orphaned = match &s.modal {
                        ModalState::Open(doc) => !s.documents().iter().any(|d| Arc::ptr_eq(d, doc)),
                        ModalState::Closed => false,
                    };
                    if orphaned {
                        s.modal = ModalState::Closed;
                    }
                    true
                });
            }
            .instrument(tracing::info_span!("fetch_documents", generation)),
        );
    }

    fn spawn_catalog_fetch(&self) {
        let teardown = self.teardown.clone();
        let repository = self.repository.clone();
        let state = self.state.clone();

        tokio::spawn(
            async move {
                let types = repository.fetch_document_types().await;

                state.send_if_modified(|s| {
                    if teardown.is_cancelled() {
                        tracing::debug!("Discarding stale document types");
                        return false;
                    }
                    s.doc_types = types;
                    s.catalog_settled = true;
                    true
                });
            }
            .instrument(tracing::info_span!("fetch_document_types")),
        );
    }

    /// Watch state changes, e.g. to re-render.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DocumentsViewModel {
        self.state.borrow().view_model()
    }

    /// Wait until both fetches have completed and return the resulting view.
    pub async fn settled(&self) -> DocumentsViewModel {
        let mut rx = self.state.subscribe();
        let settled = rx.wait_for(ViewState::is_settled).await.map(|s| s.view_model());
        settled.unwrap_or_else(|_| self.snapshot())
    }

    pub fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_if_modified(|s| {
            if s.search == query {
                return false;
            }
            s.search = query;
            true
        });
    }

    pub fn set_filter_type(&self, filter: TypeFilter) {
        self.state.send_if_modified(|s| {
            if s.type_filter == filter {
                return false;
            }
            s.type_filter = filter;
            true
        });
    }

    /// Select `doc` for preview, replacing any current selection.
    pub fn open_preview(&self, doc: &Arc<DisplayDocument>) {
        self.state
            .send_modify(|s| s.modal = ModalState::Open(Arc::clone(doc)));
    }

    /// Select the loaded document whose id renders as `id`. Returns whether
    /// one was found.
    pub fn open_preview_by_id(&self, id: &str) -> bool {
        self.state.send_if_modified(|s| {
            let found = s.documents().iter().find(|d| d.id.to_string() == id).cloned();
            match found {
                Some(doc) => {
                    s.modal = ModalState::Open(doc);
                    true
                }
                None => false,
            }
        })
    }

    pub fn close_preview(&self) {
        self.state.send_if_modified(|s| {
            if matches!(s.modal, ModalState::Closed) {
                return false;
            }
            s.modal = ModalState::Closed;
            true
        });
    }
}

impl Drop for DocumentsView {
    fn drop(&mut self) {
        self.teardown.cancel();
    }
}
