//! Integration tests for the attachment manager: scoped listing,
//! multipart upload with staged progress, and download.

mod common;

use opsdesk_rest::models::{AccessPolicy, DocumentScope, UploadMetadata};
use opsdesk_rest::resources::UploadFile;

use opsdesk_app::documents::{AttachmentManager, UploadStage};

fn metadata_for(entity_id: &str) -> UploadMetadata {
    UploadMetadata {
        title: "Signed contract".to_string(),
        description: "Countersigned copy".to_string(),
        tags: vec!["contract".to_string(), "legal".to_string()],
        module: "employees".to_string(),
        category: "contracts".to_string(),
        entity_type: "employee".to_string(),
        entity_id: entity_id.to_string(),
        access: AccessPolicy {
            roles: vec!["hr".to_string()],
            users: Vec::new(),
            departments: vec!["HR".to_string()],
            is_public: false,
        },
        retain_until: None,
    }
}

fn pdf_file(name: &str, content: &[u8]) -> UploadFile {
    UploadFile {
        file_name: name.to_string(),
        content_type: "application/pdf".to_string(),
        bytes: content.to_vec(),
    }
}

#[tokio::test]
async fn upload_lists_and_downloads_within_scope() {
    let api = common::spawn().await;
    let scope = DocumentScope::for_entity("employees", "employee", "emp-1");
    let mut manager = AttachmentManager::new(api.client(), scope);

    let mut stages = Vec::new();
    manager
        .upload(
            vec![pdf_file("contract.pdf", b"%PDF-1.7 contract body")],
            metadata_for("emp-1"),
            |stage| stages.push(stage),
        )
        .await;

    assert!(manager.banner.is_success());
    assert_eq!(
        stages,
        vec![
            UploadStage::Preparing,
            UploadStage::Uploading,
            UploadStage::Finalizing,
            UploadStage::Complete,
        ]
    );
    assert_eq!(UploadStage::Complete.percent(), 100);

    assert_eq!(manager.attachments.len(), 1);
    let attachment = &manager.attachments[0];
    assert_eq!(attachment.file_name, "contract.pdf");
    assert_eq!(attachment.title, "Signed contract");
    assert_eq!(attachment.file_size, Some(22));
    // Private upload renders locked; enforcement stays server-side.
    assert!(attachment.is_locked());

    let id = attachment.id.clone();
    let file = manager.download(&id).await.expect("download succeeds");
    assert_eq!(file.file_name, "contract.pdf");
    assert_eq!(file.bytes, b"%PDF-1.7 contract body");
}

#[tokio::test]
async fn listing_is_narrowed_by_scope() {
    let api = common::spawn().await;

    let mut first = AttachmentManager::new(
        api.client(),
        DocumentScope::for_entity("employees", "employee", "emp-1"),
    );
    first
        .upload(
            vec![pdf_file("contract.pdf", b"first")],
            metadata_for("emp-1"),
            |_| {},
        )
        .await;

    let mut second = AttachmentManager::new(
        api.client(),
        DocumentScope::for_entity("employees", "employee", "emp-2"),
    );
    second
        .upload(
            vec![pdf_file("badge.pdf", b"second")],
            metadata_for("emp-2"),
            |_| {},
        )
        .await;

    assert_eq!(first.attachments.len(), 1);
    assert_eq!(second.attachments.len(), 1);
    assert_eq!(second.attachments[0].file_name, "badge.pdf");

    // An unscoped listing sees both.
    let mut all = AttachmentManager::new(api.client(), DocumentScope::default());
    all.refresh().await;
    assert_eq!(all.attachments.len(), 2);
}

#[tokio::test]
async fn empty_upload_fails_locally() {
    let api = common::spawn().await;
    let mut manager = AttachmentManager::new(
        api.client(),
        DocumentScope::for_entity("employees", "employee", "emp-1"),
    );

    let mut stages = Vec::new();
    manager
        .upload(Vec::new(), metadata_for("emp-1"), |stage| {
            stages.push(stage)
        })
        .await;

    assert!(manager.banner.is_error());
    assert!(stages.is_empty());
    assert!(api.state.records("documents").is_empty());
}

#[tokio::test]
async fn download_of_unlisted_attachment_raises_the_banner() {
    let api = common::spawn().await;
    let mut manager = AttachmentManager::new(api.client(), DocumentScope::default());
    assert!(manager.download("documents-999").await.is_none());
    assert!(manager.banner.is_error());
}
