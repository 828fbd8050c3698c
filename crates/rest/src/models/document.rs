//! Attachment records and the scope tuple that binds them to an owning
//! entity.

use serde::{Deserialize, Serialize};

use opsdesk_core::types::{DateOnly, RecordId, Timestamp};

/// A record from the `/documents` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub entity_type: String,
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub access: AccessPolicy,
    #[serde(default)]
    pub retain_until: Option<DateOnly>,
    #[serde(default)]
    pub uploaded_at: Option<Timestamp>,
}

impl DocumentRecord {
    /// Presentation flag for the lock/public icon. Access is enforced by
    /// the server, never here.
    pub fn is_locked(&self) -> bool {
        !self.access.is_public
    }
}

/// Who may see an attachment. Declared by the uploader, surfaced in the
/// listing, enforced entirely server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessPolicy {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
}

/// The `{module, category, entity_type, entity_id}` tuple scoping an
/// attachment listing to an owning record.
#[derive(Debug, Clone, Default)]
pub struct DocumentScope {
    pub module: Option<String>,
    pub category: Option<String>,
    pub entity_type: Option<String>,
    pub entity_id: Option<String>,
}

impl DocumentScope {
    /// The scope of one owning record.
    pub fn for_entity(
        module: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            module: Some(module.into()),
            category: None,
            entity_type: Some(entity_type.into()),
            entity_id: Some(entity_id.into()),
        }
    }

    /// Query parameters for a scoped listing. Empty scope fields are
    /// omitted entirely, not sent as empty strings.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let fields = [
            ("module", &self.module),
            ("category", &self.category),
            ("entity_type", &self.entity_type),
            ("entity_id", &self.entity_id),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                if !value.is_empty() {
                    pairs.push((key, value.clone()));
                }
            }
        }
        pairs
    }
}

/// Metadata submitted alongside file content in an upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub module: String,
    pub category: String,
    pub entity_type: String,
    pub entity_id: String,
    pub access: AccessPolicy,
    pub retain_until: Option<DateOnly>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scope_fields_are_omitted_from_the_query() {
        let scope = DocumentScope {
            module: Some("employees".into()),
            category: Some(String::new()),
            entity_type: None,
            entity_id: Some("emp-9".into()),
        };
        assert_eq!(
            scope.query_pairs(),
            vec![("module", "employees".to_string()), ("entity_id", "emp-9".to_string())]
        );
    }

    #[test]
    fn private_attachment_shows_locked() {
        let record = DocumentRecord {
            id: "doc-1".into(),
            title: String::new(),
            description: String::new(),
            file_name: "contract.pdf".into(),
            content_type: "application/pdf".into(),
            file_size: None,
            tags: Vec::new(),
            module: String::new(),
            category: String::new(),
            entity_type: String::new(),
            entity_id: String::new(),
            access: AccessPolicy::default(),
            retain_until: None,
            uploaded_at: None,
        };
        assert!(record.is_locked());
    }
}
