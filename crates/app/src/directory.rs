//! Shared read-only employee directory.
//!
//! Fetched once per session and shared across screens for "select
//! employee" dropdowns. No screen mutates it; a stale directory is
//! refreshed only by loading a new one.

use std::sync::Arc;

use opsdesk_core::types::RecordId;
use opsdesk_rest::client::ApiClient;
use opsdesk_rest::models::Employee;
use opsdesk_rest::resources::EmployeeResource;

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeOption {
    pub id: RecordId,
    pub name: String,
}

/// The loaded employee list, shared read-only.
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    employees: Vec<Employee>,
}

impl EmployeeDirectory {
    /// Fetch the directory. A failed fetch yields an empty directory
    /// (dropdowns render empty rather than the whole screen failing).
    pub async fn load(client: &ApiClient) -> Arc<Self> {
        let employees = match EmployeeResource::list(client).await {
            Ok(employees) => employees,
            Err(e) => {
                tracing::warn!(error = %e, "Employee directory fetch failed");
                Vec::new()
            }
        };
        Arc::new(Self { employees })
    }

    /// Dropdown options, sorted by display name.
    pub fn options(&self) -> Vec<EmployeeOption> {
        let mut options: Vec<EmployeeOption> = self
            .employees
            .iter()
            .map(|e| EmployeeOption {
                id: e.id.clone(),
                name: e.name.clone(),
            })
            .collect();
        options.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        options
    }

    /// Display name for an employee id, if known.
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
