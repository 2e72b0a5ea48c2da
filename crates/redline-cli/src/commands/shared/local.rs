use redline_engine::collaborators::{DocumentFetcher, DocumentSource, FetchedDocument};

/// Reads a plain-text document from disk. The "URL" is a file path.
pub struct LocalFileFetcher;

impl DocumentFetcher for LocalFileFetcher {
    type Error = std::io::Error;

    async fn fetch(&self, url: &str) -> Result<FetchedDocument, std::io::Error> {
        let content = tokio::fs::read_to_string(url).await?;
        Ok(FetchedDocument {
            content,
            mime_type: "text/plain".to_string(),
            source: DocumentSource::LocalFile,
        })
    }
}
