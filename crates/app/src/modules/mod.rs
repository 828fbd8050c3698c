//! Field schemas and module definitions, one file per admin screen.

pub mod correspondence;
pub mod employees;
pub mod facilities;
pub mod government_documents;
pub mod guidelines;
pub mod legal_cases;
pub mod travel_authorizations;
pub mod travel_requests;
pub mod vehicles;

pub use correspondence::CorrespondenceModule;
pub use employees::EmployeesModule;
pub use facilities::FacilitiesModule;
pub use government_documents::GovernmentDocumentsModule;
pub use guidelines::GuidelinesModule;
pub use legal_cases::LegalCasesModule;
pub use travel_authorizations::TravelAuthorizationsModule;
pub use travel_requests::TravelRequestsModule;
pub use vehicles::VehiclesModule;
