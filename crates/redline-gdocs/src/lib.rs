//! # redline-gdocs
//!
//! Google Docs and Drive collaborator for Redline.
//!
//! - URL inspection: file id extraction, application detection, export format
//! - Plain-text fetch via Drive export (Docs, Sheets, Slides) or raw download
//! - Structural fetch via `documents.get`, converted into the native tree
//! - `batchUpdate` submission of edit operations
//!
//! [`GoogleDocsClient`] implements both `DocumentFetcher` and
//! `DocumentEditor` from `redline-engine`.

mod client;
mod error;
mod http;
pub mod model;
pub mod requests;
pub mod url;

pub use client::GoogleDocsClient;
pub use error::GdocsError;
pub use url::{GoogleApp, detect_app, export_mime, extract_file_id};
