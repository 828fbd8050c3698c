//! Vehicle registrations screen.

use opsdesk_core::forms::{FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::Vehicle;

use crate::controller::ModuleDef;

const STATUSES: &[&str] = &["active", "in_maintenance", "retired"];

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "plate_number",
        label: "Plate Number",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "make",
        label: "Make",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "model",
        label: "Model",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "year",
        label: "Year",
        kind: FieldKind::Integer,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "assigned_employee_id",
        label: "Assigned Employee",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "registration_expires_on",
        label: "Registration Expiry",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "insurance_expires_on",
        label: "Insurance Expiry",
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
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct VehiclesModule;

impl ModuleDef for VehiclesModule {
    type Record = Vehicle;

    const RESOURCE: &'static str = "vehicles";
    const TITLE: &'static str = "Vehicle";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}
