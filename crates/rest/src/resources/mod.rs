//! Typed call surfaces for resources with behavior beyond plain
//! collection CRUD (plain CRUD goes through [`crate::client::ApiClient`]'s
//! generic verbs).

pub mod attendance_resource;
pub mod document_resource;
pub mod employee_resource;

pub use attendance_resource::AttendanceResource;
pub use document_resource::{DocumentResource, DownloadedFile, UploadFile};
pub use employee_resource::EmployeeResource;
