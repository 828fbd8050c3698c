//! Travel authorizations screen.

use opsdesk_core::forms::{FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::TravelAuthorization;

use crate::controller::ModuleDef;

const STATUSES: &[&str] = &["pending", "granted", "denied"];

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "request_id",
        label: "Travel Request",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "approver",
        label: "Approver",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "decided_on",
        label: "Decision Date",
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
        name: "remarks",
        label: "Remarks",
        kind: FieldKind::LongText,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "status",
        label: "Status",
        kind: FieldKind::Select { options: STATUSES },
        requirement: Requirement::Required,
        default: Some("pending"),
        searchable: false,
    },
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct TravelAuthorizationsModule;

impl ModuleDef for TravelAuthorizationsModule {
    type Record = TravelAuthorization;

    const RESOURCE: &'static str = "travel-authorizations";
    const TITLE: &'static str = "Travel authorization";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}
