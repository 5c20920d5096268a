use clap::Parser;
use client_core::observability::{init_tracing, shutdown_tracing};
use document_browser::cli::{Cli, OutputArg};
use document_browser::config::Settings;
use document_browser::render::render_page;
use document_browser::startup::{mount_view, SERVICE_NAME};
use document_browser::TypeFilter;
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(&cli.config).map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(SERVICE_NAME, &settings.log)?;

    let result = run(&cli, &settings).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "document-browser failed");
    }

    shutdown_tracing();
    result
}

async fn run(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let view = mount_view(settings)?;

    view.set_search(cli.search.as_str());
    if let Some(doc_type) = &cli.doc_type {
        view.set_filter_type(TypeFilter::from_select_value(doc_type));
    }

    let mut model = view.settled().await;

    if let Some(id) = &cli.preview {
        if view.open_preview_by_id(id) {
            model = view.snapshot();
        } else {
            tracing::warn!(document_id = %id, "No loaded document matches the preview id");
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputArg::Text => render_page(&mut out, &model)?,
        OutputArg::Json => {
            serde_json::to_writer_pretty(&mut out, &model)?;
            writeln!(out)?;
        }
    }

    view.close_preview();
    view.unmount();
    Ok(())
}
