//! Catalog listing.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{ListCatalogRequest, ListCatalogResponse};

/// Operations of the Catalog API.
#[derive(Clone, Copy, Debug)]
pub struct CatalogApi<'a> {
    client: &'a SquareClient,
}

impl<'a> CatalogApi<'a> {
    /// `GET /v2/catalog/list`
    pub const LIST_CATALOG: Endpoint =
        Endpoint::new("ListCatalog", HttpMethod::Get, "/v2/catalog/list");

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Returns a page of catalog objects.
    ///
    /// The request fields are sent as query parameters. Follow `cursor` in
    /// the response to read further pages.
    pub fn list_catalog(&self, request: &ListCatalogRequest) -> ApiCall<'a, ListCatalogResponse> {
        self.client
            .call(Self::LIST_CATALOG)
            .query_param("cursor", request.cursor.as_option())
            .query_param("types", request.types.as_option())
            .query_param("catalog_version", request.catalog_version.as_option())
    }
}
