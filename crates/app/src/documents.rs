//! Attachment manager for one owning scope.
//!
//! Lists, uploads, and downloads attachments bound to a
//! `{module, category, entity_type, entity_id}` scope. Upload progress is
//! reported as staged percentages over the request lifecycle, not a
//! byte-level stream. Access permissions are surfaced for display only;
//! the server enforces them.

use opsdesk_rest::client::ApiClient;
use opsdesk_rest::models::{DocumentRecord, DocumentScope, UploadMetadata};
use opsdesk_rest::resources::{DocumentResource, DownloadedFile, UploadFile};

use crate::banner::Banner;

/// Progress stage of an in-flight upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Preparing,
    Uploading,
    Finalizing,
    Complete,
}

impl UploadStage {
    /// Percentage shown by a progress bar for this stage.
    pub fn percent(self) -> u8 {
        match self {
            Self::Preparing => 10,
            Self::Uploading => 60,
            Self::Finalizing => 90,
            Self::Complete => 100,
        }
    }
}

/// Attachment list and upload/download state for one scope.
pub struct AttachmentManager {
    client: ApiClient,
    pub scope: DocumentScope,
    pub attachments: Vec<DocumentRecord>,
    pub loading: bool,
    pub banner: Banner,
}

impl AttachmentManager {
    pub fn new(client: ApiClient, scope: DocumentScope) -> Self {
        Self {
            client,
            scope,
            attachments: Vec::new(),
            loading: false,
            banner: Banner::None,
        }
    }

    /// Refetch the attachment list for this scope.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match DocumentResource::list(&self.client, &self.scope).await {
            Ok(attachments) => {
                self.attachments = attachments;
            }
            Err(e) => {
                tracing::error!(error = %e, "Attachment list fetch failed");
                self.attachments = Vec::new();
                self.banner = Banner::error(e.user_message());
            }
        }
        self.loading = false;
    }

    /// Upload files with shared metadata, reporting staged progress, then
    /// refetch the listing.
    pub async fn upload(
        &mut self,
        files: Vec<UploadFile>,
        metadata: UploadMetadata,
        mut on_progress: impl FnMut(UploadStage),
    ) {
        if files.is_empty() {
            self.banner = Banner::error("Choose at least one file to upload");
            return;
        }

        on_progress(UploadStage::Preparing);
        self.loading = true;
        on_progress(UploadStage::Uploading);
        let result = DocumentResource::upload(&self.client, files, &metadata).await;
        self.loading = false;

        match result {
            Ok(()) => {
                on_progress(UploadStage::Finalizing);
                tracing::info!(title = %metadata.title, "Attachment uploaded");
                self.banner = Banner::success("Upload complete");
                self.refresh().await;
                on_progress(UploadStage::Complete);
            }
            Err(e) => {
                tracing::error!(error = %e, "Attachment upload failed");
                self.banner = Banner::error(e.user_message());
            }
        }
    }

    /// Download an attachment by id, named after its stored file name.
    /// Failures land in the banner and yield nothing to save.
    pub async fn download(&mut self, id: &str) -> Option<DownloadedFile> {
        let record = match self.attachments.iter().find(|a| a.id == id) {
            Some(record) => record.clone(),
            None => {
                self.banner = Banner::error("Attachment is no longer listed");
                return None;
            }
        };
        match DocumentResource::download(&self.client, &record).await {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::error!(id, error = %e, "Attachment download failed");
                self.banner = Banner::error(e.user_message());
                None
            }
        }
    }
}
