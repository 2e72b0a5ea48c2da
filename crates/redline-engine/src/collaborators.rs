//! Interfaces to the external systems the engine depends on.
//!
//! The engine never performs I/O itself. Fetching documents, calling a
//! generative model and mutating a live document are delegated to
//! implementations of these traits (see `redline-gdocs` and `redline-llm`).
//! Their errors are propagated unchanged to the caller.

use std::future::Future;

use redline_core::document::DocumentBody;
use redline_core::edits::EditOperation;
use serde::{Deserialize, Serialize};

/// How a fetched document's text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSource {
    /// Exported to text by the document service.
    DriveExport,
    /// Raw file download, decoded as UTF-8.
    DriveDownload,
    /// Read from the local filesystem.
    LocalFile,
}

/// Plain-text rendering of a document plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedDocument {
    pub content: String,
    pub mime_type: String,
    pub source: DocumentSource,
}

/// Retrieves the plain text of a document by URL.
pub trait DocumentFetcher {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedDocument, Self::Error>> + Send;
}

/// Input to a text producer.
#[derive(Debug, Clone, Copy)]
pub struct ProduceRequest<'a> {
    pub system_prompt: &'a str,
    pub user_message: &'a str,
    /// JSON Schema the output is expected to match. Advisory only.
    pub schema_hint: &'a serde_json::Value,
    /// Whether the producer should stream. The engine only ever sees the
    /// fully accumulated text.
    pub stream: bool,
}

/// Produces one text blob believed to contain a JSON patch plan.
pub trait TextProducer {
    type Error: std::error::Error + Send + Sync + 'static;

    fn produce(
        &self,
        request: &ProduceRequest<'_>,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Reads the native structure of a live document and applies edit batches to it.
pub trait DocumentEditor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch_body(
        &self,
        document_id: &str,
    ) -> impl Future<Output = Result<DocumentBody, Self::Error>> + Send;

    /// Apply `operations` atomically, in order.
    fn submit(
        &self,
        document_id: &str,
        operations: &[EditOperation],
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
