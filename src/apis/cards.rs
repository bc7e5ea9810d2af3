//! Card on file operations.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{CreateCardRequest, CreateCardResponse};

/// Operations of the Cards API.
#[derive(Clone, Copy, Debug)]
pub struct CardsApi<'a> {
    client: &'a SquareClient,
}

impl<'a> CardsApi<'a> {
    /// `POST /v2/cards`
    pub const CREATE_CARD: Endpoint = Endpoint::new("CreateCard", HttpMethod::Post, "/v2/cards");

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Adds a card on file to an existing merchant.
    pub fn create_card(&self, body: &CreateCardRequest) -> ApiCall<'a, CreateCardResponse> {
        self.client.call(Self::CREATE_CARD).body(body)
    }
}
