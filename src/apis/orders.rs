//! Order operations.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{
    BatchRetrieveOrdersRequest, BatchRetrieveOrdersResponse, CalculateOrderRequest,
    CalculateOrderResponse, CloneOrderRequest, CloneOrderResponse, CreateOrderRequest,
    CreateOrderResponse, PayOrderRequest, PayOrderResponse, RetrieveOrderResponse,
    SearchOrdersRequest, SearchOrdersResponse, UpdateOrderRequest, UpdateOrderResponse,
};

/// Operations of the Orders API.
#[derive(Clone, Copy, Debug)]
pub struct OrdersApi<'a> {
    client: &'a SquareClient,
}

impl<'a> OrdersApi<'a> {
    /// `POST /v2/orders`
    pub const CREATE_ORDER: Endpoint = Endpoint::new("CreateOrder", HttpMethod::Post, "/v2/orders");
    /// `POST /v2/orders/batch-retrieve`
    pub const BATCH_RETRIEVE_ORDERS: Endpoint = Endpoint::new(
        "BatchRetrieveOrders",
        HttpMethod::Post,
        "/v2/orders/batch-retrieve",
    );
    /// `POST /v2/orders/calculate`
    pub const CALCULATE_ORDER: Endpoint =
        Endpoint::new("CalculateOrder", HttpMethod::Post, "/v2/orders/calculate");
    /// `POST /v2/orders/clone`
    pub const CLONE_ORDER: Endpoint = Endpoint::new("CloneOrder", HttpMethod::Post, "/v2/orders/clone");
    /// `POST /v2/orders/search`
    pub const SEARCH_ORDERS: Endpoint =
        Endpoint::new("SearchOrders", HttpMethod::Post, "/v2/orders/search");
    /// `GET /v2/orders/{order_id}`
    pub const RETRIEVE_ORDER: Endpoint =
        Endpoint::new("RetrieveOrder", HttpMethod::Get, "/v2/orders/{order_id}");
    /// `PUT /v2/orders/{order_id}`
    pub const UPDATE_ORDER: Endpoint =
        Endpoint::new("UpdateOrder", HttpMethod::Put, "/v2/orders/{order_id}");
    /// `POST /v2/orders/{order_id}/pay`
    pub const PAY_ORDER: Endpoint =
        Endpoint::new("PayOrder", HttpMethod::Post, "/v2/orders/{order_id}/pay");

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Creates an order, which can include products, taxes and discounts.
    pub fn create_order(&self, body: &CreateOrderRequest) -> ApiCall<'a, CreateOrderResponse> {
        self.client.call(Self::CREATE_ORDER).body(body)
    }

    /// Retrieves up to 100 orders by ID in one request.
    ///
    /// IDs that do not exist are skipped rather than reported as errors.
    pub fn batch_retrieve_orders(
        &self,
        body: &BatchRetrieveOrdersRequest,
    ) -> ApiCall<'a, BatchRetrieveOrdersResponse> {
        self.client.call(Self::BATCH_RETRIEVE_ORDERS).body(body)
    }

    /// Previews prices, taxes and discounts for an order without creating it.
    pub fn calculate_order(&self, body: &CalculateOrderRequest) -> ApiCall<'a, CalculateOrderResponse> {
        self.client.call(Self::CALCULATE_ORDER).body(body)
    }

    /// Creates a new `DRAFT` order from an existing one.
    pub fn clone_order(&self, body: &CloneOrderRequest) -> ApiCall<'a, CloneOrderResponse> {
        self.client.call(Self::CLONE_ORDER).body(body)
    }

    /// Searches orders across one or more locations.
    pub fn search_orders(&self, body: &SearchOrdersRequest) -> ApiCall<'a, SearchOrdersResponse> {
        self.client.call(Self::SEARCH_ORDERS).body(body)
    }

    /// Retrieves an order by ID.
    pub fn retrieve_order(&self, order_id: impl Into<String>) -> ApiCall<'a, RetrieveOrderResponse> {
        self.client.call(Self::RETRIEVE_ORDER).path_param("order_id", order_id)
    }

    /// Updates an open order.
    ///
    /// Use `fields_to_clear` on the request, or `Nullable::Null` on the
    /// order's fields, to remove values.
    pub fn update_order(
        &self,
        order_id: impl Into<String>,
        body: &UpdateOrderRequest,
    ) -> ApiCall<'a, UpdateOrderResponse> {
        self.client
            .call(Self::UPDATE_ORDER)
            .path_param("order_id", order_id)
            .body(body)
    }

    /// Pays for an order using approved payments, or marks a zero-total
    /// order as paid.
    pub fn pay_order(
        &self,
        order_id: impl Into<String>,
        body: &PayOrderRequest,
    ) -> ApiCall<'a, PayOrderResponse> {
        self.client
            .call(Self::PAY_ORDER)
            .path_param("order_id", order_id)
            .body(body)
    }
}
