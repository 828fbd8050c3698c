//! One CRUD cycle through every screen definition.
//!
//! The controller machinery is generic; what varies per module is the
//! schema. Driving the same create/edit/delete cycle through each module
//! definition catches a schema whose required fields, defaults, or wire
//! names drifted from its record shape.

mod common;

use serde_json::json;

use opsdesk_app::controller::{ModuleDef, ResourceController};
use opsdesk_app::modules::{
    CorrespondenceModule, EmployeesModule, FacilitiesModule, GovernmentDocumentsModule,
    GuidelinesModule, LegalCasesModule, TravelAuthorizationsModule, TravelRequestsModule,
    VehiclesModule,
};

/// Create, reload, edit, and delete one record through a module's
/// controller, asserting the lifecycle invariants at each step.
async fn crud_cycle<M: ModuleDef>(
    api: &common::MockApi,
    fill: impl Fn(&mut ResourceController<M>),
) {
    let mut controller = ResourceController::<M>::new(api.client());

    controller.load().await;
    assert!(controller.records.is_empty(), "{} starts empty", M::RESOURCE);

    controller.open_create();
    fill(&mut controller);
    controller.submit().await;
    assert!(
        controller.banner.is_success(),
        "{} create failed: {:?}",
        M::RESOURCE,
        controller.banner
    );
    assert_eq!(controller.records.len(), 1);

    let record = controller.records[0].clone();
    controller.open_edit(&record);
    controller.submit().await;
    assert!(
        controller.banner.is_success(),
        "{} update failed: {:?}",
        M::RESOURCE,
        controller.banner
    );
    assert_eq!(controller.records.len(), 1);

    let id = M::record_id(&controller.records[0]).clone();
    controller.request_delete(id);
    controller.confirm_delete().await;
    assert!(controller.records.is_empty(), "{} delete failed", M::RESOURCE);
}

#[tokio::test]
async fn every_module_survives_a_full_crud_cycle() {
    let api = common::spawn().await;

    crud_cycle::<EmployeesModule>(&api, |c| {
        c.set_field("name", json!("Jane Doe"));
        c.set_field("department", json!("Logistics"));
        c.set_field("civil_id", json!("290010112345"));
    })
    .await;

    crud_cycle::<GovernmentDocumentsModule>(&api, |c| {
        c.set_field("title", json!("Trade License"));
        c.set_field("reference_number", json!("TL-2026-009"));
        c.set_field("authority", json!("Ministry of Commerce"));
    })
    .await;

    crud_cycle::<VehiclesModule>(&api, |c| {
        c.set_field("plate_number", json!("KW-1188"));
    })
    .await;

    crud_cycle::<CorrespondenceModule>(&api, |c| {
        c.set_field("subject", json!("Customs clearance delay"));
        c.set_field("counterparty", json!("Port Authority"));
    })
    .await;

    crud_cycle::<LegalCasesModule>(&api, |c| {
        c.set_field("case_number", json!("2026/114"));
        c.set_field("court", json!("Commercial Court"));
    })
    .await;

    crud_cycle::<FacilitiesModule>(&api, |c| {
        c.set_field("facility_name", json!("Central Warehouse"));
        c.set_field("approval_type", json!("fire safety"));
    })
    .await;

    crud_cycle::<TravelRequestsModule>(&api, |c| {
        c.set_field("employee_id", json!("emp-1"));
        c.set_field("destination_country", json!("Jordan"));
        c.set_field("starts_on", json!("2026-09-14"));
    })
    .await;

    crud_cycle::<TravelAuthorizationsModule>(&api, |c| {
        c.set_field("request_id", json!("travel-requests-1"));
        c.set_field("approver", json!("Operations Director"));
    })
    .await;

    crud_cycle::<GuidelinesModule>(&api, |c| {
        c.set_field("title", json!("Site access policy"));
        c.set_field("body", json!("Badges must be visible at all times."));
    })
    .await;
}
