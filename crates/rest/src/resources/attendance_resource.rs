//! Attendance resource: read side of the check-in/check-out/mark-leave
//! verbs.

use crate::client::ApiClient;
use crate::error::RestError;
use crate::models::AttendanceRecord;

/// Collection path for attendance records.
pub const PATH: &str = "attendance";

/// Typed calls against the `/attendance` resource.
pub struct AttendanceResource;

impl AttendanceResource {
    /// List attendance records, optionally narrowed to one employee.
    pub async fn list(
        client: &ApiClient,
        employee_id: Option<&str>,
    ) -> Result<Vec<AttendanceRecord>, RestError> {
        match employee_id {
            Some(id) => {
                client
                    .list_records_where(PATH, &[("employee_id", id.to_string())])
                    .await
            }
            None => client.list_records(PATH).await,
        }
    }
}
