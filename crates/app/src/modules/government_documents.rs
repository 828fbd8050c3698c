//! Government documents screen.

use opsdesk_core::forms::{FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::GovernmentDocument;

use crate::controller::ModuleDef;

const CATEGORIES: &[&str] = &["license", "permit", "registration", "certificate", "other"];
const STATUSES: &[&str] = &["active", "renewal_in_progress", "expired"];

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        label: "Title",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "reference_number",
        label: "Reference Number",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "authority",
        label: "Issuing Authority",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "category",
        label: "Category",
        kind: FieldKind::Select {
            options: CATEGORIES,
        },
        requirement: Requirement::Optional,
        default: Some("other"),
        searchable: false,
    },
    FieldSpec {
        name: "issued_on",
        label: "Issue Date",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "expires_on",
        label: "Expiry Date",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "renewal_fee",
        label: "Renewal Fee",
        kind: FieldKind::Currency,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "notes",
        label: "Notes",
        kind: FieldKind::LongText,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "status",
        label: "Status",
        kind: FieldKind::Select { options: STATUSES },
        requirement: Requirement::Required,
        default: Some("active"),
        searchable: false,
    },
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct GovernmentDocumentsModule;

impl ModuleDef for GovernmentDocumentsModule {
    type Record = GovernmentDocument;

    const RESOURCE: &'static str = "government-documents";
    const TITLE: &'static str = "Government document";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}
