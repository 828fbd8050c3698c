//! Record shapes for every backend collection.
//!
//! Records are owned by the server: it assigns ids and timestamps, and it
//! is the source of truth for acceptance. Fields other than `id` default
//! when absent so a partially-filled record still lists.

pub mod attendance;
pub mod correspondence;
pub mod document;
pub mod employee;
pub mod facility;
pub mod government_document;
pub mod guideline;
pub mod legal_case;
pub mod travel_authorization;
pub mod travel_request;
pub mod vehicle;

pub use attendance::AttendanceRecord;
pub use correspondence::Correspondence;
pub use document::{AccessPolicy, DocumentRecord, DocumentScope, UploadMetadata};
pub use employee::{EmergencyContact, Employee, SitePass};
pub use facility::{FacilityApproval, OtherApproval};
pub use government_document::GovernmentDocument;
pub use guideline::Guideline;
pub use legal_case::{CaseParty, LegalCase};
pub use travel_authorization::TravelAuthorization;
pub use travel_request::{ItineraryLeg, TravelRequest};
pub use vehicle::Vehicle;
