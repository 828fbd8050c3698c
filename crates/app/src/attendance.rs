//! Attendance board.
//!
//! Attendance is action-driven rather than form CRUD: check-in,
//! check-out, and mark-leave are thin POST verbs on the employee
//! resource, each followed by a full refetch of the attendance list.

use opsdesk_rest::client::ApiClient;
use opsdesk_rest::error::RestError;
use opsdesk_rest::models::AttendanceRecord;
use opsdesk_rest::resources::{AttendanceResource, EmployeeResource};

use crate::banner::Banner;

/// Attendance list and action state, optionally narrowed to one employee.
pub struct AttendanceBoard {
    client: ApiClient,
    /// When set, only this employee's records are listed.
    pub employee_id: Option<String>,
    pub records: Vec<AttendanceRecord>,
    pub loading: bool,
    pub banner: Banner,
}

impl AttendanceBoard {
    pub fn new(client: ApiClient, employee_id: Option<String>) -> Self {
        Self {
            client,
            employee_id,
            records: Vec::new(),
            loading: false,
            banner: Banner::None,
        }
    }

    /// Refetch the attendance list.
    pub async fn load(&mut self) {
        self.loading = true;
        match AttendanceResource::list(&self.client, self.employee_id.as_deref()).await {
            Ok(records) => {
                self.records = records;
            }
            Err(e) => {
                tracing::error!(error = %e, "Attendance fetch failed");
                self.records = Vec::new();
                self.banner = Banner::error(e.user_message());
            }
        }
        self.loading = false;
    }

    /// Record a check-in for today.
    pub async fn check_in(&mut self, employee_id: &str) {
        let result = EmployeeResource::check_in(&self.client, employee_id).await;
        self.after_action("Checked in", employee_id, result).await;
    }

    /// Record a check-out for today.
    pub async fn check_out(&mut self, employee_id: &str) {
        let result = EmployeeResource::check_out(&self.client, employee_id).await;
        self.after_action("Checked out", employee_id, result).await;
    }

    /// Mark today as leave.
    pub async fn mark_leave(&mut self, employee_id: &str) {
        let result = EmployeeResource::mark_leave(&self.client, employee_id).await;
        self.after_action("Leave recorded", employee_id, result).await;
    }

    async fn after_action(
        &mut self,
        success: &str,
        employee_id: &str,
        result: Result<(), RestError>,
    ) {
        match result {
            Ok(()) => {
                tracing::info!(employee_id, "{success}");
                self.banner = Banner::success(success);
            }
            Err(e) => {
                tracing::error!(employee_id, error = %e, "Attendance action failed");
                self.banner = Banner::error(e.user_message());
            }
        }
        self.load().await;
    }
}
