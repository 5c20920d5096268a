use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::fmt;

/// Shown wherever a display field could not be resolved.
pub const PLACEHOLDER: &str = "-";

/// Short date as rendered by the fr-FR locale.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Document identifier as sent by the API, either numeric or textual.
/// Numbers are kept as JSON numbers so floats and large integers survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(Number),
    Text(String),
}

impl From<i64> for DocumentId {
    fn from(n: i64) -> Self {
        DocumentId::Number(n.into())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{}", n),
            DocumentId::Text(s) => f.write_str(s),
        }
    }
}

/// A document record exactly as received. Only `id` is trusted to exist;
/// everything else is kept as raw JSON until normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub id: DocumentId,
    pub title: Option<Value>,
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    pub document_type: Option<Value>,
    pub created_at: Option<Value>,
    pub url: Option<Value>,
}

impl RawDocument {
    pub fn new(id: DocumentId) -> Self {
        Self {
            id,
            title: None,
            name: None,
            kind: None,
            document_type: None,
            created_at: None,
            url: None,
        }
    }
}

/// A document with every display field resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayDocument {
    pub id: DocumentId,
    pub label: String,
    pub doc_type: Option<String>,
    pub created_on: Option<NaiveDate>,
    /// Download/preview target, opened as-is.
    pub url: Option<String>,
}

impl DisplayDocument {
    pub fn type_label(&self) -> &str {
        self.doc_type.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn date_label(&self) -> String {
        self.created_on
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// Body of `GET /api/documents`.
#[derive(Debug, Default, Deserialize)]
pub struct DocumentsEnvelope {
    #[serde(default)]
    pub documents: Option<Vec<Value>>,
}

impl DocumentsEnvelope {
    /// Decode each record on its own so one bad entry does not hide the rest.
    pub fn into_documents(self) -> Vec<RawDocument> {
        self.documents
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<RawDocument>(value) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping document record without a usable id");
                    None
                }
            })
            .collect()
    }
}

/// Body of `GET /api/documents/types`.
#[derive(Debug, Default, Deserialize)]
pub struct DocumentTypesEnvelope {
    #[serde(default)]
    pub types: Option<Vec<Value>>,
}

impl DocumentTypesEnvelope {
    /// Distinct non-empty labels, compared case-insensitively; first
    /// occurrence wins.
    pub fn into_types(self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut types: Vec<String> = Vec::new();
        for value in self.types.unwrap_or_default() {
            if let Value::String(label) = value {
                if !label.is_empty() && seen.insert(label.to_lowercase()) {
                    types.push(label);
                }
            }
        }
        types
    }
}
