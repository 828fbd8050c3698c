//! Travel requests screen.

use opsdesk_core::forms::{FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::travel_request::{TravelRequest, STATUS_PENDING};

use crate::controller::ModuleDef;

const STATUSES: &[&str] = &["pending", "approved", "rejected"];

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "employee_id",
        label: "Employee",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "employee_name",
        label: "Employee Name",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "destination_country",
        label: "Destination Country",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "destination_city",
        label: "Destination City",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "purpose",
        label: "Purpose",
        kind: FieldKind::LongText,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "starts_on",
        label: "Start Date",
        kind: FieldKind::Date,
        requirement: Requirement::Required,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "ends_on",
        label: "End Date",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "estimated_cost",
        label: "Estimated Cost",
        kind: FieldKind::Currency,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "status",
        label: "Status",
        kind: FieldKind::Select { options: STATUSES },
        requirement: Requirement::Required,
        default: Some(STATUS_PENDING),
        searchable: false,
    },
    FieldSpec {
        name: "itinerary",
        label: "Itinerary",
        kind: FieldKind::Group,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct TravelRequestsModule;

impl ModuleDef for TravelRequestsModule {
    type Record = TravelRequest;

    const RESOURCE: &'static str = "travel-requests";
    const TITLE: &'static str = "Travel request";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}
