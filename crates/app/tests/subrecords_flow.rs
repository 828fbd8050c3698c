//! Keyed sub-record editing driven through the legal cases screen.

mod common;

use serde_json::json;

use opsdesk_core::subrecords::KeyedList;
use opsdesk_rest::models::legal_case::CaseParty;

use opsdesk_app::controller::ResourceController;
use opsdesk_app::modules::LegalCasesModule;

fn party(name: &str, role: &str) -> CaseParty {
    CaseParty {
        name: name.to_string(),
        role: role.to_string(),
    }
}

#[tokio::test]
async fn parties_are_edited_by_key_and_submit_as_a_plain_array() {
    let api = common::spawn().await;
    let mut controller = ResourceController::<LegalCasesModule>::new(api.client());

    controller.open_create();
    controller.set_field("case_number", json!("2026/114"));
    controller.set_field("court", json!("Commercial Court"));

    // Edit the parties group through keyed entries, then write the plain
    // array back into the draft.
    let mut parties = KeyedList::from_values(vec![
        party("Acme Shipping", "plaintiff"),
        party("Globex Freight", "defendant"),
        party("Initech", "witness"),
    ]);
    let keys: Vec<String> = parties.iter().map(|e| e.key.clone()).collect();
    parties.remove(&keys[1]).unwrap();
    parties
        .update(&keys[2], party("Initech", "expert witness"))
        .unwrap();
    controller.set_field("parties", parties.to_draft_value().unwrap());

    controller.submit().await;
    assert!(controller.banner.is_success());

    assert_eq!(controller.records.len(), 1);
    let case = &controller.records[0];
    assert_eq!(case.parties.len(), 2);
    assert_eq!(case.parties[0].name, "Acme Shipping");
    assert_eq!(case.parties[1].role, "expert witness");

    // No client-local keys leaked onto the wire.
    let stored = &api.state.records("legal-cases")[0];
    assert_eq!(
        stored["parties"],
        json!([
            {"name": "Acme Shipping", "role": "plaintiff"},
            {"name": "Initech", "role": "expert witness"},
        ])
    );
}

#[tokio::test]
async fn installment_plan_requires_its_conditional_fields() {
    let api = common::spawn().await;
    let mut controller = ResourceController::<LegalCasesModule>::new(api.client());

    controller.open_create();
    controller.set_field("case_number", json!("2026/115"));
    controller.set_field("court", json!("Civil Court"));
    controller.set_field("payment_system", json!("installments"));
    controller.submit().await;

    // Total amount and periods are required under the installments
    // discriminant.
    assert!(controller.banner.is_error());
    assert!(api.state.records("legal-cases").is_empty());

    controller.set_field("total_amount", json!("2400"));
    controller.set_field("installment_periods", json!("12"));
    controller.submit().await;
    assert!(controller.banner.is_success());

    let case = &controller.records[0];
    assert_eq!(case.total_amount, Some(2400.0));
    assert_eq!(case.installment_periods, Some(12));
    assert_eq!(case.installment_amount().unwrap(), Some(200.0));
}
