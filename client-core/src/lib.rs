//! client-core: Shared infrastructure for the document browser client.
pub mod config;
pub mod error;
pub mod observability;
