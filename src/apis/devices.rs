//! Device code operations.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{
    CreateDeviceCodeRequest, CreateDeviceCodeResponse, GetDeviceCodeResponse,
    ListDeviceCodesRequest, ListDeviceCodesResponse,
};

/// Operations of the Devices API.
#[derive(Clone, Copy, Debug)]
pub struct DevicesApi<'a> {
    client: &'a SquareClient,
}

impl<'a> DevicesApi<'a> {
    /// `GET /v2/devices/codes`
    pub const LIST_DEVICE_CODES: Endpoint =
        Endpoint::new("ListDeviceCodes", HttpMethod::Get, "/v2/devices/codes");
    /// `POST /v2/devices/codes`
    pub const CREATE_DEVICE_CODE: Endpoint =
        Endpoint::new("CreateDeviceCode", HttpMethod::Post, "/v2/devices/codes");
    /// `GET /v2/devices/codes/{id}`
    pub const GET_DEVICE_CODE: Endpoint =
        Endpoint::new("GetDeviceCode", HttpMethod::Get, "/v2/devices/codes/{id}");

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Lists the device codes of the merchant.
    pub fn list_device_codes(
        &self,
        request: &ListDeviceCodesRequest,
    ) -> ApiCall<'a, ListDeviceCodesResponse> {
        self.client
            .call(Self::LIST_DEVICE_CODES)
            .query_param("cursor", request.cursor.as_option())
            .query_param("location_id", request.location_id.as_option())
            .query_param("product_type", request.product_type.as_option())
            .query_param("status", request.status.as_option())
    }

    /// Creates a device code used to log in a Square Terminal.
    pub fn create_device_code(
        &self,
        body: &CreateDeviceCodeRequest,
    ) -> ApiCall<'a, CreateDeviceCodeResponse> {
        self.client.call(Self::CREATE_DEVICE_CODE).body(body)
    }

    /// Retrieves a device code by ID.
    pub fn get_device_code(&self, id: impl Into<String>) -> ApiCall<'a, GetDeviceCodeResponse> {
        self.client.call(Self::GET_DEVICE_CODE).path_param("id", id)
    }
}
