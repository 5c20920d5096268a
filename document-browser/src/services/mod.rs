pub mod document_client;
pub mod filter;
pub mod normalizer;

pub use document_client::{DocumentRepository, HttpDocumentRepository, RepositoryError};
pub use filter::{filter_documents, TypeFilter};
pub use normalizer::normalize;
