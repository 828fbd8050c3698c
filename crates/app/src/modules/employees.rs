//! Employees screen.
//!
//! The kind discriminant drives conditional requiredness: a citizen must
//! carry a civil id, a foreigner a residency number. Emergency contacts,
//! skills, and site passes are repeatable sub-groups edited through
//! [`opsdesk_core::subrecords::KeyedList`].

use opsdesk_core::forms::{FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::employee::{
    Employee, KIND_CITIZEN, KIND_FOREIGNER, STATUS_ACTIVE, VALID_KINDS, VALID_STATUSES,
};

use crate::controller::ModuleDef;

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "department",
        label: "Department",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "job_title",
        label: "Job Title",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "kind",
        label: "Kind",
        kind: FieldKind::Select {
            options: VALID_KINDS,
        },
        requirement: Requirement::Required,
        default: Some(KIND_CITIZEN),
        searchable: false,
    },
    FieldSpec {
        name: "civil_id",
        label: "Civil ID",
        kind: FieldKind::Text,
        requirement: Requirement::RequiredWhen {
            field: "kind",
            equals: KIND_CITIZEN,
        },
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "residency_number",
        label: "Residency Number",
        kind: FieldKind::Text,
        requirement: Requirement::RequiredWhen {
            field: "kind",
            equals: KIND_FOREIGNER,
        },
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "phone",
        label: "Phone",
        kind: FieldKind::Text,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "hired_on",
        label: "Hire Date",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "monthly_salary",
        label: "Monthly Salary",
        kind: FieldKind::Currency,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "license_expires_on",
        label: "License Expiry",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "training_completed",
        label: "Training Completed",
        kind: FieldKind::Flag,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "medical_fitness_until",
        label: "Medical Fitness Until",
        kind: FieldKind::Date,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "status",
        label: "Status",
        kind: FieldKind::Select {
            options: VALID_STATUSES,
        },
        requirement: Requirement::Required,
        default: Some(STATUS_ACTIVE),
        searchable: false,
    },
    FieldSpec {
        name: "emergency_contacts",
        label: "Emergency Contacts",
        kind: FieldKind::Group,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "skills",
        label: "Skills",
        kind: FieldKind::Group,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "passes",
        label: "Site Passes",
        kind: FieldKind::Group,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct EmployeesModule;

impl ModuleDef for EmployeesModule {
    type Record = Employee;

    const RESOURCE: &'static str = "employees";
    const TITLE: &'static str = "Employee";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}
