//! Guidelines screen.

use opsdesk_core::forms::{FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::Guideline;

use crate::controller::ModuleDef;

const CATEGORIES: &[&str] = &["hr", "safety", "operations", "finance"];
const STATUSES: &[&str] = &["draft", "published", "archived"];

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
        name: "category",
        label: "Category",
        kind: FieldKind::Select {
            options: CATEGORIES,
        },
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "body",
        label: "Body",
        kind: FieldKind::LongText,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "effective_on",
        label: "Effective Date",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "status",
        label: "Status",
        kind: FieldKind::Select { options: STATUSES },
        requirement: Requirement::Required,
        default: Some("draft"),
        searchable: false,
    },
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct GuidelinesModule;

impl ModuleDef for GuidelinesModule {
    type Record = Guideline;

    const RESOURCE: &'static str = "guidelines";
    const TITLE: &'static str = "Guideline";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}
