//! Employee operations, superseded by the Team API.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{ListEmployeesRequest, ListEmployeesResponse, RetrieveEmployeeResponse};

/// Operations of the deprecated Employees API.
///
/// Both operations still work but log a warning on every call.
#[derive(Clone, Copy, Debug)]
pub struct EmployeesApi<'a> {
    client: &'a SquareClient,
}

impl<'a> EmployeesApi<'a> {
    /// `GET /v2/employees`
    pub const LIST_EMPLOYEES: Endpoint =
        Endpoint::new("ListEmployees", HttpMethod::Get, "/v2/employees").deprecated();
    /// `GET /v2/employees/{id}`
    pub const RETRIEVE_EMPLOYEE: Endpoint =
        Endpoint::new("RetrieveEmployee", HttpMethod::Get, "/v2/employees/{id}").deprecated();

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Lists employees, optionally filtered by location and status.
    #[deprecated(note = "use the Team API's SearchTeamMembers instead")]
    pub fn list_employees(&self, request: &ListEmployeesRequest) -> ApiCall<'a, ListEmployeesResponse> {
        self.client
            .call(Self::LIST_EMPLOYEES)
            .query_param("location_id", request.location_id.as_option())
            .query_param("status", request.status.as_option())
            .query_param("limit", request.limit.as_option())
            .query_param("cursor", request.cursor.as_option())
    }

    /// Retrieves an employee by ID.
    #[deprecated(note = "use the Team API's RetrieveTeamMember instead")]
    pub fn retrieve_employee(&self, id: impl Into<String>) -> ApiCall<'a, RetrieveEmployeeResponse> {
        self.client.call(Self::RETRIEVE_EMPLOYEE).path_param("id", id)
    }
}
