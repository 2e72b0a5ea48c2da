//! Authenticated Google Docs / Drive client.

use std::time::Duration;

use redline_config::GoogleConfig;
use redline_core::document::DocumentBody;
use redline_core::edits::EditOperation;
use redline_engine::collaborators::{
    DocumentEditor, DocumentFetcher, DocumentSource, FetchedDocument,
};

use crate::error::GdocsError;
use crate::http::check_response;
use crate::model::Document;
use crate::requests::batch_update_body;
use crate::url::{detect_app, export_mime, extract_file_id};

/// Bearer-token client for the Drive export and Docs structural APIs.
pub struct GoogleDocsClient {
    http: reqwest::Client,
    token: String,
    docs_api_base: String,
    drive_api_base: String,
}

impl GoogleDocsClient {
    /// Build a client from the `google` config section.
    ///
    /// # Errors
    ///
    /// [`GdocsError::MissingToken`] when no access token is configured, or
    /// [`GdocsError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GoogleConfig) -> Result<Self, GdocsError> {
        if !config.is_configured() {
            return Err(GdocsError::MissingToken);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("redline/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            token: config.access_token.trim().to_string(),
            docs_api_base: config.docs_api_base.trim_end_matches('/').to_string(),
            drive_api_base: config.drive_api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Plain-text rendering of the file behind `url`.
    ///
    /// Docs, Sheets and Slides are exported as text; other Drive files are
    /// downloaded and decoded as UTF-8. A download that is not valid UTF-8
    /// yields empty content with an `application/octet-stream` mime type.
    ///
    /// # Errors
    ///
    /// [`GdocsError::InvalidUrl`] if `url` carries no file id, otherwise any
    /// transport or API error.
    pub async fn fetch_text(&self, url: &str) -> Result<FetchedDocument, GdocsError> {
        let file_id =
            extract_file_id(url).ok_or_else(|| GdocsError::InvalidUrl(url.to_string()))?;
        let app = detect_app(url);
        let encoded = urlencoding::encode(&file_id);

        if let Some(mime) = export_mime(app) {
            tracing::debug!(%file_id, ?app, mime, "exporting document");
            let endpoint = format!(
                "{}/files/{encoded}/export?mimeType={}",
                self.drive_api_base,
                urlencoding::encode(mime)
            );
            let bytes = self.get(&endpoint).await?.bytes().await?;
            return Ok(FetchedDocument {
                content: String::from_utf8_lossy(&bytes).into_owned(),
                mime_type: mime.to_string(),
                source: DocumentSource::DriveExport,
            });
        }

        tracing::debug!(%file_id, ?app, "downloading raw file");
        let endpoint = format!("{}/files/{encoded}?alt=media", self.drive_api_base);
        let bytes = self.get(&endpoint).await?.bytes().await?;
        Ok(match String::from_utf8(bytes.to_vec()) {
            Ok(content) => FetchedDocument {
                content,
                mime_type: "text/plain".to_string(),
                source: DocumentSource::DriveDownload,
            },
            Err(_) => {
                tracing::warn!(%file_id, "downloaded file is not UTF-8 text");
                FetchedDocument {
                    content: String::new(),
                    mime_type: "application/octet-stream".to_string(),
                    source: DocumentSource::DriveDownload,
                }
            }
        })
    }

    /// The structural document (`documents.get`).
    ///
    /// # Errors
    ///
    /// Any transport or API error, or [`GdocsError::Parse`] for an
    /// unexpected response shape.
    pub async fn get_document(&self, document_id: &str) -> Result<Document, GdocsError> {
        let endpoint = format!(
            "{}/documents/{}",
            self.docs_api_base,
            urlencoding::encode(document_id)
        );
        let text = self.get(&endpoint).await?.text().await?;
        serde_json::from_str(&text).map_err(|e| GdocsError::Parse(e.to_string()))
    }

    /// Submit `operations` as one atomic `batchUpdate`.
    ///
    /// # Errors
    ///
    /// Any transport or API error. Google applies none of the requests if
    /// any of them fails.
    pub async fn batch_update(
        &self,
        document_id: &str,
        operations: &[EditOperation],
    ) -> Result<(), GdocsError> {
        let endpoint = format!(
            "{}/documents/{}:batchUpdate",
            self.docs_api_base,
            urlencoding::encode(document_id)
        );
        let resp = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.token)
            .json(&batch_update_body(operations))
            .send()
            .await?;
        check_response(resp).await?;
        tracing::debug!(document_id, requests = operations.len(), "batch update applied");
        Ok(())
    }

    async fn get(&self, endpoint: &str) -> Result<reqwest::Response, GdocsError> {
        let resp = self
            .http
            .get(endpoint)
            .bearer_auth(&self.token)
            .send()
            .await?;
        check_response(resp).await
    }
}

impl DocumentFetcher for GoogleDocsClient {
    type Error = GdocsError;

    async fn fetch(&self, url: &str) -> Result<FetchedDocument, GdocsError> {
        self.fetch_text(url).await
    }
}

impl DocumentEditor for GoogleDocsClient {
    type Error = GdocsError;

    async fn fetch_body(&self, document_id: &str) -> Result<DocumentBody, GdocsError> {
        Ok(self.get_document(document_id).await?.into_body())
    }

    async fn submit(
        &self,
        document_id: &str,
        operations: &[EditOperation],
    ) -> Result<(), GdocsError> {
        self.batch_update(document_id, operations).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_requires_a_token() {
        let result = GoogleDocsClient::new(&GoogleConfig::default());
        assert!(matches!(result, Err(GdocsError::MissingToken)));
    }

    #[test]
    fn client_normalises_api_bases() {
        let config = GoogleConfig {
            access_token: " ya29.token ".into(),
            docs_api_base: "http://localhost:8080/v1/".into(),
            ..GoogleConfig::default()
        };
        let client = GoogleDocsClient::new(&config).unwrap();
        assert_eq!(client.token, "ya29.token");
        assert_eq!(client.docs_api_base, "http://localhost:8080/v1");
    }

    #[tokio::test]
    async fn fetch_text_rejects_urls_without_ids() {
        let config = GoogleConfig {
            access_token: "ya29.token".into(),
            ..GoogleConfig::default()
        };
        let client = GoogleDocsClient::new(&config).unwrap();
        let err = client
            .fetch_text("https://docs.google.com/document/")
            .await
            .unwrap_err();
        assert!(matches!(err, GdocsError::InvalidUrl(_)));
    }
}
