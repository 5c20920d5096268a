use crate::models::DisplayDocument;
use std::sync::Arc;

/// Value of the type selector that means "all types".
pub const ALL_TYPES_VALUE: &str = "all";

/// Type selector. `Any` is the no-filter sentinel and is distinct from an
/// empty label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    Any,
    Only(String),
}

impl TypeFilter {
    /// Interpret a select-box value, where [`ALL_TYPES_VALUE`] clears the filter.
    pub fn from_select_value(value: &str) -> Self {
        if same_type(value, ALL_TYPES_VALUE) {
            TypeFilter::Any
        } else {
            TypeFilter::Only(value.to_string())
        }
    }

    pub fn as_option(&self) -> Option<&str> {
        match self {
            TypeFilter::Any => None,
            TypeFilter::Only(t) => Some(t),
        }
    }

    fn matches(&self, doc_type: Option<&str>) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Only(selected) => {
                doc_type.is_some_and(|t| same_type(t, selected))
            }
        }
    }
}

impl From<Option<String>> for TypeFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(TypeFilter::Any, TypeFilter::Only)
    }
}

/// Case-insensitive type comparison shared by the filter and the selector.
pub fn same_type(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Stable filter over the normalized collection: a document is kept when its
/// label contains `query` (case-insensitive) and its type passes `type_filter`.
pub fn filter_documents(
    documents: &[Arc<DisplayDocument>],
    query: &str,
    type_filter: &TypeFilter,
) -> Vec<Arc<DisplayDocument>> {
    let needle = query.to_lowercase();

    documents
        .iter()
        .filter(|doc| needle.is_empty() || doc.label.to_lowercase().contains(&needle))
        .filter(|doc| type_filter.matches(doc.doc_type.as_deref()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawDocument;
    use crate::services::normalizer::normalize;
    use serde_json::json;

    fn documents() -> Vec<Arc<DisplayDocument>> {
        [
            json!({ "id": 1, "title": "Lease A", "type": "Contract" }),
            json!({ "id": 2, "name": "Invoice 2024", "type": "Invoice" }),
            json!({ "id": 3, "title": "Lease B", "type": "Contract" }),
            json!({ "id": 4, "title": "Untyped lease" }),
        ]
        .into_iter()
        .map(|v| Arc::new(normalize(serde_json::from_value::<RawDocument>(v).unwrap())))
        .collect()
    }

    fn ids(docs: &[Arc<DisplayDocument>]) -> Vec<String> {
        docs.iter().map(|d| d.id.to_string()).collect()
    }

    #[test]
    fn empty_query_and_any_type_keeps_everything_in_order() {
        let docs = documents();
        let result = filter_documents(&docs, "", &TypeFilter::Any);

        assert_eq!(result, docs);
        assert!(result.iter().zip(&docs).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn search_matches_label_substring_preserving_order() {
        let docs = documents();
        let result = filter_documents(&docs[..3], "lease", &TypeFilter::Any);
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let docs = documents();
        assert_eq!(
            filter_documents(&docs, "INVOICE", &TypeFilter::Any),
            filter_documents(&docs, "invoice", &TypeFilter::Any)
        );
        assert_eq!(ids(&filter_documents(&docs, "InVoIcE", &TypeFilter::Any)), vec!["2"]);
    }

    #[test]
    fn search_uses_the_fallback_label() {
        let docs = vec![Arc::new(normalize(
            serde_json::from_value::<RawDocument>(json!({ "id": 77 })).unwrap(),
        ))];
        assert_eq!(ids(&filter_documents(&docs, "#77", &TypeFilter::Any)), vec!["77"]);
    }

    #[test]
    fn type_filter_is_case_insensitive_exact_match() {
        let docs = documents();

        let result = filter_documents(&docs, "", &TypeFilter::Only("invoice".into()));
        assert_eq!(ids(&result), vec!["2"]);

        let result = filter_documents(&docs, "", &TypeFilter::Only("CONTRACT".into()));
        assert_eq!(ids(&result), vec!["1", "3"]);

        let result = filter_documents(&docs, "", &TypeFilter::Only("contr".into()));
        assert!(result.is_empty());
    }

    #[test]
    fn untyped_documents_only_pass_the_sentinel() {
        let docs = documents();

        for selected in ["-", "", "contract"] {
            let result = filter_documents(&docs, "untyped", &TypeFilter::Only(selected.into()));
            assert!(result.is_empty(), "matched type filter {:?}", selected);
        }

        let result = filter_documents(&docs, "untyped", &TypeFilter::Any);
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn type_match_folds_non_ascii_case() {
        let docs = vec![Arc::new(normalize(
            serde_json::from_value::<RawDocument>(json!({ "id": 5, "title": "Ticket", "type": "REÇU" }))
                .unwrap(),
        ))];
        let result = filter_documents(&docs, "", &TypeFilter::from_select_value("reçu"));
        assert_eq!(ids(&result), vec!["5"]);
        assert!(same_type("Reçu", "REÇU"));
    }

    #[test]
    fn both_predicates_must_hold() {
        let docs = documents();
        let result = filter_documents(&docs, "b", &TypeFilter::Only("contract".into()));
        assert_eq!(ids(&result), vec!["3"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let docs = documents();
        let filter = TypeFilter::Only("Contract".into());

        let once = filter_documents(&docs, "lease", &filter);
        let twice = filter_documents(&once, "lease", &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let docs = documents();
        assert!(filter_documents(&docs, "payslip", &TypeFilter::Any).is_empty());
    }

    #[test]
    fn select_value_all_clears_the_filter() {
        assert_eq!(TypeFilter::from_select_value("all"), TypeFilter::Any);
        assert_eq!(TypeFilter::from_select_value("ALL"), TypeFilter::Any);
        assert_eq!(
            TypeFilter::from_select_value("invoice"),
            TypeFilter::Only("invoice".into())
        );
        assert_eq!(TypeFilter::from(None), TypeFilter::Any);
    }
}
