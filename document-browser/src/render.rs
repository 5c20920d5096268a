//! Plain-text rendering of a [`DocumentsViewModel`].

use crate::models::{DisplayDocument, PLACEHOLDER};
use crate::services::filter::{same_type, ALL_TYPES_VALUE};
use crate::view::DocumentsViewModel;
use std::io::{self, Write};

pub const PAGE_TITLE: &str = "Mes documents";
pub const LOADING_TEXT: &str = "Chargement...";
pub const EMPTY_TEXT: &str = "Aucun document trouvé.";
pub const ALL_TYPES_LABEL: &str = "Tous les types";

/// Options of the type selector as `(value, label)` pairs. Values are the
/// lowercased labels; the first entry clears the filter.
pub fn type_options(doc_types: &[String]) -> Vec<(String, String)> {
    std::iter::once((ALL_TYPES_VALUE.to_string(), ALL_TYPES_LABEL.to_string()))
        .chain(doc_types.iter().map(|t| (t.to_lowercase(), t.clone())))
        .collect()
}

pub fn render_page(out: &mut impl Write, model: &DocumentsViewModel) -> io::Result<()> {
    writeln!(out, "{}", PAGE_TITLE)?;
    writeln!(out, "{}", "=".repeat(PAGE_TITLE.chars().count()))?;
    render_filters(out, model)?;
    writeln!(out)?;
    render_grid(out, model)?;

    if let (true, Some(doc)) = (model.show_preview, &model.preview_doc) {
        writeln!(out)?;
        render_preview(out, doc)?;
    }
    Ok(())
}

fn render_filters(out: &mut impl Write, model: &DocumentsViewModel) -> io::Result<()> {
    let selected = model.filter_type.as_deref().unwrap_or(ALL_TYPES_VALUE);
    let options: Vec<String> = type_options(&model.doc_types)
        .into_iter()
        .map(|(value, label)| {
            if same_type(&value, selected) {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();

    writeln!(out, "Recherche : {}", model.search)?;
    writeln!(out, "Type : {}", options.join(" | "))
}

fn render_grid(out: &mut impl Write, model: &DocumentsViewModel) -> io::Result<()> {
    if model.loading {
        return writeln!(out, "{}", LOADING_TEXT);
    }
    if let Some(error) = &model.error {
        return writeln!(out, "{}", error);
    }
    if model.filtered_documents.is_empty() {
        return writeln!(out, "{}", EMPTY_TEXT);
    }

    for doc in &model.filtered_documents {
        render_card(out, doc)?;
    }
    Ok(())
}

fn render_card(out: &mut impl Write, doc: &DisplayDocument) -> io::Result<()> {
    writeln!(out, "📄 {} (#{})", doc.label, doc.id)?;
    writeln!(out, "   {:<20} {}", doc.type_label(), doc.date_label())?;
    writeln!(
        out,
        "   Télécharger : {}",
        doc.url.as_deref().unwrap_or(PLACEHOLDER)
    )
}

pub fn render_preview(out: &mut impl Write, doc: &DisplayDocument) -> io::Result<()> {
    writeln!(out, "--- Prévisualiser : {} ---", doc.label)?;
    writeln!(out, "Type : {}", doc.type_label())?;
    writeln!(out, "Créé le : {}", doc.date_label())?;
    writeln!(out, "Source : {}", doc.url.as_deref().unwrap_or(PLACEHOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentId;
    use std::sync::Arc;

    fn doc(id: i64, label: &str, doc_type: Option<&str>) -> Arc<DisplayDocument> {
        Arc::new(DisplayDocument {
            id: DocumentId::from(id),
            label: label.to_string(),
            doc_type: doc_type.map(str::to_string),
            created_on: None,
            url: Some(format!("https://files.example.com/{}.pdf", id)),
        })
    }

    fn model() -> DocumentsViewModel {
        let docs = vec![doc(1, "Lease A", Some("Contract")), doc(2, "Misc", None)];
        DocumentsViewModel {
            documents: docs.clone(),
            loading: false,
            error: None,
            filtered_documents: docs,
            search: String::new(),
            filter_type: None,
            doc_types: vec!["Contract".into(), "Invoice".into()],
            preview_doc: None,
            show_preview: false,
        }
    }

    fn render(model: &DocumentsViewModel) -> String {
        let mut out = Vec::new();
        render_page(&mut out, model).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn type_options_start_with_all_and_lowercase_values() {
        let options = type_options(&["Contract".to_string()]);
        assert_eq!(
            options,
            vec![
                ("all".to_string(), "Tous les types".to_string()),
                ("contract".to_string(), "Contract".to_string()),
            ]
        );
    }

    #[test]
    fn cards_show_placeholders_for_missing_fields() {
        let text = render(&model());
        assert!(text.contains("📄 Lease A (#1)"));
        assert!(text.contains("📄 Misc (#2)"));
        assert!(text.contains("Télécharger : https://files.example.com/2.pdf"));
        assert!(text.contains("[Tous les types] | Contract | Invoice"));
    }

    #[test]
    fn loading_error_and_empty_states_replace_the_grid() {
        let mut m = model();
        m.loading = true;
        assert!(render(&m).contains(LOADING_TEXT));

        let mut m = model();
        m.error = Some("Erreur lors du chargement des documents".into());
        let text = render(&m);
        assert!(text.contains("Erreur lors du chargement des documents"));
        assert!(!text.contains("Lease A"));

        let mut m = model();
        m.filtered_documents.clear();
        assert!(render(&m).contains(EMPTY_TEXT));
    }

    #[test]
    fn selected_type_is_highlighted() {
        let mut m = model();
        m.filter_type = Some("invoice".into());
        assert!(render(&m).contains("Tous les types | Contract | [Invoice]"));
    }

    #[test]
    fn non_ascii_selection_is_highlighted() {
        let mut m = model();
        m.doc_types = vec!["REÇU".into()];
        m.filter_type = Some("reçu".into());
        assert!(render(&m).contains("Tous les types | [REÇU]"));
    }

    #[test]
    fn preview_panel_follows_modal_state() {
        let mut m = model();
        m.preview_doc = Some(m.documents[0].clone());
        m.show_preview = true;
        let text = render(&m);
        assert!(text.contains("--- Prévisualiser : Lease A ---"));
        assert!(text.contains("Créé le : -"));

        m.show_preview = false;
        assert!(!render(&m).contains("Prévisualiser"));
    }
}
