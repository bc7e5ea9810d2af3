//! Subscription operations.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::CancelSubscriptionResponse;

/// Operations of the Subscriptions API.
#[derive(Clone, Copy, Debug)]
pub struct SubscriptionsApi<'a> {
    client: &'a SquareClient,
}

impl<'a> SubscriptionsApi<'a> {
    /// `POST /v2/subscriptions/{subscription_id}/cancel`
    pub const CANCEL_SUBSCRIPTION: Endpoint = Endpoint::new(
        "CancelSubscription",
        HttpMethod::Post,
        "/v2/subscriptions/{subscription_id}/cancel",
    );

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Schedules a subscription to be cancelled at the end of the current
    /// billing cycle.
    pub fn cancel_subscription(
        &self,
        subscription_id: impl Into<String>,
    ) -> ApiCall<'a, CancelSubscriptionResponse> {
        self.client
            .call(Self::CANCEL_SUBSCRIPTION)
            .path_param("subscription_id", subscription_id)
    }
}
