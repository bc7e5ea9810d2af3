//! Gift card activity operations.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{CreateGiftCardActivityRequest, CreateGiftCardActivityResponse};

/// Operations of the Gift Card Activities API.
#[derive(Clone, Copy, Debug)]
pub struct GiftCardActivitiesApi<'a> {
    client: &'a SquareClient,
}

impl<'a> GiftCardActivitiesApi<'a> {
    /// `POST /v2/gift-cards/activities`
    pub const CREATE_GIFT_CARD_ACTIVITY: Endpoint = Endpoint::new(
        "CreateGiftCardActivity",
        HttpMethod::Post,
        "/v2/gift-cards/activities",
    );

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Records an activity, such as activation or a balance adjustment, on a gift card.
    pub fn create_gift_card_activity(
        &self,
        body: &CreateGiftCardActivityRequest,
    ) -> ApiCall<'a, CreateGiftCardActivityResponse> {
        self.client.call(Self::CREATE_GIFT_CARD_ACTIVITY).body(body)
    }
}
