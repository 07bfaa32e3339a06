//! Employee domain and transfer types.

use serde::{Deserialize, Serialize};

use pet_store_core::{EmployeeId, PetStoreId};

/// An employee row (domain type).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Employee {
    /// Unique employee ID.
    pub employee_id: EmployeeId,
    /// The store this employee works at.
    pub pet_store_id: PetStoreId,
    pub employee_first_name: Option<String>,
    pub employee_last_name: Option<String>,
    pub employee_phone: Option<String>,
    pub employee_job_title: Option<String>,
}

/// Employee transfer record.
///
/// Carries no store back-reference; the owning store is always taken from the
/// request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStoreEmployee {
    pub employee_id: Option<EmployeeId>,
    pub employee_first_name: Option<String>,
    pub employee_last_name: Option<String>,
    pub employee_phone: Option<String>,
    pub employee_job_title: Option<String>,
}

impl From<Employee> for PetStoreEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: Some(employee.employee_id),
            employee_first_name: employee.employee_first_name,
            employee_last_name: employee.employee_last_name,
            employee_phone: employee.employee_phone,
            employee_job_title: employee.employee_job_title,
        }
    }
}
