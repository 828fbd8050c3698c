//! Attachment resource: scoped listing, multipart upload, download.

use reqwest::multipart::{Form, Part};

use crate::client::ApiClient;
use crate::error::RestError;
use crate::models::{DocumentRecord, DocumentScope, UploadMetadata};

/// Collection path for attachments.
pub const PATH: &str = "documents";

/// One file staged for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A downloaded attachment, paired with the name to save it under.
#[derive(Debug, Clone)]
pub struct DownloadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Typed calls against the `/documents` resource.
pub struct DocumentResource;

impl DocumentResource {
    /// List attachments visible under a scope. Empty scope fields are
    /// omitted from the query string.
    pub async fn list(
        client: &ApiClient,
        scope: &DocumentScope,
    ) -> Result<Vec<DocumentRecord>, RestError> {
        client.list_records_where(PATH, &scope.query_pairs()).await
    }

    /// Upload one or more files with shared metadata.
    ///
    /// The multipart body carries a `metadata` JSON part followed by one
    /// `files` part per file.
    pub async fn upload(
        client: &ApiClient,
        files: Vec<UploadFile>,
        metadata: &UploadMetadata,
    ) -> Result<(), RestError> {
        let mut form = Form::new().text("metadata", serde_json::to_string(metadata)?);
        for file in files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part("files", part);
        }
        client
            .post_multipart(&format!("{PATH}/upload"), form)
            .await?;
        Ok(())
    }

    /// Download an attachment's content, named after its stored file name.
    pub async fn download(
        client: &ApiClient,
        record: &DocumentRecord,
    ) -> Result<DownloadedFile, RestError> {
        let bytes = client
            .get_bytes(&format!("{PATH}/{}/download", record.id))
            .await?;
        Ok(DownloadedFile {
            file_name: record.file_name.clone(),
            bytes,
        })
    }
}
