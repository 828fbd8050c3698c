//! Facility approvals screen.

use opsdesk_core::forms::{FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::FacilityApproval;

use crate::controller::ModuleDef;

const STATUSES: &[&str] = &["active", "suspended", "expired"];

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "facility_name",
        label: "Facility",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "approval_type",
        label: "Approval Type",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "authority",
        label: "Issuing Authority",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
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
        name: "status",
        label: "Status",
        kind: FieldKind::Select { options: STATUSES },
        requirement: Requirement::Required,
        default: Some("active"),
        searchable: false,
    },
    FieldSpec {
        name: "other_approvals",
        label: "Other Approvals",
        kind: FieldKind::Group,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct FacilitiesModule;

impl ModuleDef for FacilitiesModule {
    type Record = FacilityApproval;

    const RESOURCE: &'static str = "facility-approvals";
    const TITLE: &'static str = "Facility approval";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}
