//! Customer search.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{SearchCustomersRequest, SearchCustomersResponse};

/// Operations of the Customers API.
#[derive(Clone, Copy, Debug)]
pub struct CustomersApi<'a> {
    client: &'a SquareClient,
}

impl<'a> CustomersApi<'a> {
    /// `POST /v2/customers/search`
    pub const SEARCH_CUSTOMERS: Endpoint =
        Endpoint::new("SearchCustomers", HttpMethod::Post, "/v2/customers/search");

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Searches customer profiles with filters and a sort order.
    pub fn search_customers(
        &self,
        body: &SearchCustomersRequest,
    ) -> ApiCall<'a, SearchCustomersResponse> {
        self.client.call(Self::SEARCH_CUSTOMERS).body(body)
    }
}
