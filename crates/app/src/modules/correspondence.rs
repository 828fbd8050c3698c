//! Correspondence screen.

use opsdesk_core::forms::{FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::correspondence::{
    Correspondence, DIRECTION_INCOMING, DIRECTION_OUTGOING,
};

use crate::controller::ModuleDef;

const DIRECTIONS: &[&str] = &[DIRECTION_INCOMING, DIRECTION_OUTGOING];
const PRIORITIES: &[&str] = &["low", "normal", "high"];
const STATUSES: &[&str] = &["open", "closed"];

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "subject",
        label: "Subject",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "direction",
        label: "Direction",
        kind: FieldKind::Select {
            options: DIRECTIONS,
        },
        requirement: Requirement::Required,
        default: Some(DIRECTION_INCOMING),
        searchable: false,
    },
    FieldSpec {
        name: "counterparty",
        label: "Counterparty",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "reference_number",
        label: "Reference Number",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "sent_on",
        label: "Date",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "priority",
        label: "Priority",
        kind: FieldKind::Select {
            options: PRIORITIES,
        },
        requirement: Requirement::Required,
        default: Some("normal"),
        searchable: false,
    },
    FieldSpec {
        name: "status",
        label: "Status",
        kind: FieldKind::Select { options: STATUSES },
        requirement: Requirement::Required,
        default: Some("open"),
        searchable: false,
    },
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct CorrespondenceModule;

impl ModuleDef for CorrespondenceModule {
    type Record = Correspondence;

    const RESOURCE: &'static str = "correspondence";
    const TITLE: &'static str = "Correspondence";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}
