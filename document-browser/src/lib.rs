pub mod cli;
pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod startup;
pub mod view;

pub use services::{DocumentRepository, HttpDocumentRepository, RepositoryError, TypeFilter};
pub use view::{DocumentsView, DocumentsViewModel};
