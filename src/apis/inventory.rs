//! Inventory adjustment lookup.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::RetrieveInventoryAdjustmentResponse;

/// Operations of the Inventory API.
#[derive(Clone, Copy, Debug)]
pub struct InventoryApi<'a> {
    client: &'a SquareClient,
}

impl<'a> InventoryApi<'a> {
    /// `GET /v2/inventory/adjustments/{adjustment_id}`
    pub const RETRIEVE_INVENTORY_ADJUSTMENT: Endpoint = Endpoint::new(
        "RetrieveInventoryAdjustment",
        HttpMethod::Get,
        "/v2/inventory/adjustments/{adjustment_id}",
    );

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Returns the inventory adjustment with the given ID.
    pub fn retrieve_inventory_adjustment(
        &self,
        adjustment_id: impl Into<String>,
    ) -> ApiCall<'a, RetrieveInventoryAdjustmentResponse> {
        self.client
            .call(Self::RETRIEVE_INVENTORY_ADJUSTMENT)
            .path_param("adjustment_id", adjustment_id)
    }
}
