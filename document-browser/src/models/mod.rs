pub mod document;

pub use document::{
    DisplayDocument, DocumentId, DocumentTypesEnvelope, DocumentsEnvelope, RawDocument,
    DATE_FORMAT, PLACEHOLDER,
};
