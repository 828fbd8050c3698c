//! Legal cases screen.
//!
//! Payment terms are conditional: an installment plan needs a total
//! amount and a period count; a lump-sum case needs neither. The
//! per-installment figure shown next to the period field is derived from
//! the draft, never stored.

use serde_json::Value;

use opsdesk_core::forms::{Draft, FieldKind, FieldSpec, FormSchema, Requirement};
use opsdesk_core::payments::{self, SYSTEM_INSTALLMENTS, SYSTEM_LUMP_SUM, VALID_PAYMENT_SYSTEMS};
use opsdesk_core::types::RecordId;
use opsdesk_rest::models::LegalCase;

use crate::controller::ModuleDef;

const STATUSES: &[&str] = &["open", "in_progress", "closed"];

static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "case_number",
        label: "Case Number",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "court",
        label: "Court",
        kind: FieldKind::Text,
        requirement: Requirement::Required,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "subject",
        label: "Subject",
        kind: FieldKind::LongText,
        requirement: Requirement::Optional,
        default: None,
        searchable: true,
    },
    FieldSpec {
        name: "filed_on",
        label: "Filing Date",
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
        default: Some("open"),
        searchable: false,
    },
    FieldSpec {
        name: "parties",
        label: "Parties",
        kind: FieldKind::Group,
        requirement: Requirement::Optional,
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "payment_system",
        label: "Payment System",
        kind: FieldKind::Select {
            options: VALID_PAYMENT_SYSTEMS,
        },
        requirement: Requirement::Required,
        default: Some(SYSTEM_LUMP_SUM),
        searchable: false,
    },
    FieldSpec {
        name: "total_amount",
        label: "Total Amount",
        kind: FieldKind::Currency,
        requirement: Requirement::RequiredWhen {
            field: "payment_system",
            equals: SYSTEM_INSTALLMENTS,
        },
        default: None,
        searchable: false,
    },
    FieldSpec {
        name: "installment_periods",
        label: "Installment Periods",
        kind: FieldKind::Integer,
        requirement: Requirement::RequiredWhen {
            field: "payment_system",
            equals: SYSTEM_INSTALLMENTS,
        },
        default: None,
        searchable: false,
    },
];

static SCHEMA: FormSchema = FormSchema { fields: FIELDS };

pub struct LegalCasesModule;

impl ModuleDef for LegalCasesModule {
    type Record = LegalCase;

    const RESOURCE: &'static str = "legal-cases";
    const TITLE: &'static str = "Legal case";

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn record_id(record: &Self::Record) -> &RecordId {
        &record.id
    }
}

/// Per-installment amount for the plan currently in the draft, or `None`
/// while the draft is not a complete installment plan.
pub fn planned_installment(draft: &Draft) -> Option<f64> {
    if draft.get("payment_system").and_then(Value::as_str) != Some(SYSTEM_INSTALLMENTS) {
        return None;
    }
    let total: f64 = draft
        .get("total_amount")
        .and_then(Value::as_str)?
        .trim()
        .parse()
        .ok()?;
    let periods: u32 = draft
        .get("installment_periods")
        .and_then(Value::as_str)?
        .trim()
        .parse()
        .ok()?;
    payments::installment_amount(total, periods).ok()
}
