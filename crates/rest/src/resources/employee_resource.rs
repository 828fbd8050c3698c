//! Employee resource: listing plus the attendance action verbs.

use crate::client::ApiClient;
use crate::error::RestError;
use crate::models::Employee;

/// Collection path for employees.
pub const PATH: &str = "employees";

/// Typed calls against the `/employees` resource.
pub struct EmployeeResource;

impl EmployeeResource {
    /// List all employees.
    pub async fn list(client: &ApiClient) -> Result<Vec<Employee>, RestError> {
        client.list_records(PATH).await
    }

    /// Record a check-in for today.
    pub async fn check_in(client: &ApiClient, id: &str) -> Result<(), RestError> {
        client.post_action(&format!("{PATH}/{id}/check-in")).await
    }

    /// Record a check-out for today.
    pub async fn check_out(client: &ApiClient, id: &str) -> Result<(), RestError> {
        client.post_action(&format!("{PATH}/{id}/check-out")).await
    }

    /// Mark today as leave.
    pub async fn mark_leave(client: &ApiClient, id: &str) -> Result<(), RestError> {
        client.post_action(&format!("{PATH}/{id}/mark-leave")).await
    }
}
