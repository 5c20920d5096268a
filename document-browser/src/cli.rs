//! Command-line arguments for the document browser.

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "document-browser",
    version,
    about = "List, filter and preview documents from the documents API"
)]
pub struct Cli {
    /// Free-text search applied to document titles (case-insensitive).
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Only show documents of this type; "all" shows every type.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub doc_type: Option<String>,

    /// Open the preview for the document with this id.
    #[arg(long, value_name = "ID")]
    pub preview: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputArg,

    /// Configuration file stem (without extension).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human readable cards.
    Text,
    /// The view model as JSON.
    Json,
}
