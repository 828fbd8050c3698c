//! Dashboard assembly.
//!
//! The dashboard fetches the participating lists once (concurrently) and
//! derives every widget purely in memory: status histograms, the
//! upcoming-expiry alert list, travel rollups, and the per-employee
//! readiness tracker. No aggregation issues a network call of its own.

use chrono::NaiveDate;
use serde::Serialize;

use opsdesk_core::expiry::{upcoming_expiries, ExpiryAlert, ExpiryInput};
use opsdesk_core::readiness::{ReadinessChecklist, ReadinessState};
use opsdesk_core::rollup::{
    histogram, rollup_by_country, rollup_by_employee, CountBucket, TripFact, TripRollup,
};
use opsdesk_core::types::RecordId;
use opsdesk_rest::client::ApiClient;
use opsdesk_rest::error::RestError;
use opsdesk_rest::models::{Employee, FacilityApproval, GovernmentDocument, TravelRequest, Vehicle};

use crate::controller::ModuleDef;
use crate::modules::{
    EmployeesModule, FacilitiesModule, GovernmentDocumentsModule, TravelRequestsModule,
    VehiclesModule,
};

/// The raw lists the dashboard aggregates.
#[derive(Debug, Default)]
pub struct DashboardData {
    pub employees: Vec<Employee>,
    pub documents: Vec<GovernmentDocument>,
    pub vehicles: Vec<Vehicle>,
    pub facilities: Vec<FacilityApproval>,
    pub travel_requests: Vec<TravelRequest>,
}

/// Everything the dashboard page renders.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub headcount: usize,
    pub employee_status: Vec<CountBucket>,
    pub document_categories: Vec<CountBucket>,
    pub travel_status: Vec<CountBucket>,
    pub expiry_alerts: Vec<ExpiryAlert>,
    pub trips_by_country: Vec<TripRollup>,
    pub trips_by_employee: Vec<TripRollup>,
    pub readiness: Vec<EmployeeReadiness>,
}

/// Readiness row for one employee.
#[derive(Debug, Serialize)]
pub struct EmployeeReadiness {
    pub employee_id: RecordId,
    pub name: String,
    pub checklist: ReadinessChecklist,
    pub state: ReadinessState,
}

impl DashboardData {
    /// Fetch all participating lists concurrently.
    pub async fn load(client: &ApiClient) -> Result<Self, RestError> {
        let (employees, documents, vehicles, facilities, travel_requests) = tokio::join!(
            client.list_records::<Employee>(EmployeesModule::RESOURCE),
            client.list_records::<GovernmentDocument>(GovernmentDocumentsModule::RESOURCE),
            client.list_records::<Vehicle>(VehiclesModule::RESOURCE),
            client.list_records::<FacilityApproval>(FacilitiesModule::RESOURCE),
            client.list_records::<TravelRequest>(TravelRequestsModule::RESOURCE),
        );
        Ok(Self {
            employees: employees?,
            documents: documents?,
            vehicles: vehicles?,
            facilities: facilities?,
            travel_requests: travel_requests?,
        })
    }

    /// Derive the full dashboard for `today`.
    pub fn summarize(&self, today: NaiveDate) -> DashboardSummary {
        DashboardSummary {
            headcount: self.employees.len(),
            employee_status: histogram(&self.employees, |e| e.status.as_str()),
            document_categories: histogram(&self.documents, |d| d.category.as_str()),
            travel_status: histogram(&self.travel_requests, |t| t.status.as_str()),
            expiry_alerts: upcoming_expiries(self.expiry_inputs(), today),
            trips_by_country: rollup_by_country(&self.trip_facts()),
            trips_by_employee: rollup_by_employee(&self.trip_facts()),
            readiness: self.readiness(today),
        }
    }

    /// Every date-bearing record offered to the alert list.
    fn expiry_inputs(&self) -> Vec<ExpiryInput> {
        let mut inputs = Vec::new();

        for doc in &self.documents {
            inputs.push(ExpiryInput {
                source: GovernmentDocumentsModule::RESOURCE,
                record_id: doc.id.clone(),
                label: doc.title.clone(),
                expires_on: doc.expires_on,
            });
        }

        for vehicle in &self.vehicles {
            inputs.push(ExpiryInput {
                source: VehiclesModule::RESOURCE,
                record_id: vehicle.id.clone(),
                label: format!("{} registration", vehicle.plate_number),
                expires_on: vehicle.registration_expires_on,
            });
            inputs.push(ExpiryInput {
                source: VehiclesModule::RESOURCE,
                record_id: vehicle.id.clone(),
                label: format!("{} insurance", vehicle.plate_number),
                expires_on: vehicle.insurance_expires_on,
            });
        }

        for facility in &self.facilities {
            inputs.push(ExpiryInput {
                source: FacilitiesModule::RESOURCE,
                record_id: facility.id.clone(),
                label: facility.facility_name.clone(),
                expires_on: facility.expires_on,
            });
            for approval in &facility.other_approvals {
                inputs.push(ExpiryInput {
                    source: FacilitiesModule::RESOURCE,
                    record_id: facility.id.clone(),
                    label: format!("{}: {}", facility.facility_name, approval.name),
                    expires_on: approval.expires_on,
                });
            }
        }

        for employee in &self.employees {
            for pass in &employee.passes {
                inputs.push(ExpiryInput {
                    source: EmployeesModule::RESOURCE,
                    record_id: employee.id.clone(),
                    label: format!("{}: {} pass", employee.name, pass.area),
                    expires_on: pass.expires_on,
                });
            }
        }

        inputs
    }

    /// Trip facts for the rollups. Requests without a destination country
    /// carry no usable group key and are skipped.
    fn trip_facts(&self) -> Vec<TripFact> {
        self.travel_requests
            .iter()
            .filter(|r| !r.destination_country.is_empty())
            .map(|r| TripFact {
                country: r.destination_country.clone(),
                employee: if r.employee_name.is_empty() {
                    r.employee_id.clone()
                } else {
                    r.employee_name.clone()
                },
                cost: r.estimated_cost.unwrap_or(0.0),
            })
            .collect()
    }

    /// Per-employee readiness rows, evaluated against `today`.
    fn readiness(&self, today: NaiveDate) -> Vec<EmployeeReadiness> {
        self.employees
            .iter()
            .map(|employee| {
                let checklist = ReadinessChecklist {
                    license_valid: employee
                        .license_expires_on
                        .is_some_and(|expires| expires >= today),
                    training_complete: employee.training_completed,
                    medically_fit: employee
                        .medical_fitness_until
                        .is_some_and(|until| until >= today),
                    vehicle_assigned: self.vehicles.iter().any(|v| {
                        v.assigned_employee_id.as_deref() == Some(employee.id.as_str())
                    }),
                };
                EmployeeReadiness {
                    employee_id: employee.id.clone(),
                    name: employee.name.clone(),
                    state: checklist.state(),
                    checklist,
                }
            })
            .collect()
    }
}
