//! Legacy employee models.
//!
//! Square replaced these with team members; they are kept for existing integrations.

use crate::clients::ErrorEntry;

model! {
    /// An employee of a business.
    pub struct Employee / EmployeeBuilder {
        optional {
            id: String,
            first_name: String,
            last_name: String,
            email: String,
            phone_number: String,
            location_ids: Vec<String>,
            /// `ACTIVE` or `INACTIVE`.
            status: String,
            is_owner: bool,
            created_at: String,
            updated_at: String,
        }
    }
}

model! {
    /// Query parameters for `ListEmployees`.
    pub struct ListEmployeesRequest / ListEmployeesRequestBuilder {
        optional {
            location_id: String,
            status: String,
            /// Between 1 and 200. Defaults to 100.
            limit: i64,
            cursor: String,
        }
    }
}

model! {
    /// A page of employees.
    pub struct ListEmployeesResponse / ListEmployeesResponseBuilder {
        optional {
            employees: Vec<Employee>,
            cursor: String,
            errors: Vec<ErrorEntry>,
        }
    }
}

model! {
    /// A single employee.
    pub struct RetrieveEmployeeResponse / RetrieveEmployeeResponseBuilder {
        optional {
            employee: Employee,
            errors: Vec<ErrorEntry>,
        }
    }
}
