//! Loyalty reward search.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{SearchLoyaltyRewardsRequest, SearchLoyaltyRewardsResponse};

/// Operations of the Loyalty API.
#[derive(Clone, Copy, Debug)]
pub struct LoyaltyApi<'a> {
    client: &'a SquareClient,
}

impl<'a> LoyaltyApi<'a> {
    /// `POST /v2/loyalty/rewards/search`
    pub const SEARCH_LOYALTY_REWARDS: Endpoint = Endpoint::new(
        "SearchLoyaltyRewards",
        HttpMethod::Post,
        "/v2/loyalty/rewards/search",
    );

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Searches the rewards of a loyalty account.
    ///
    /// Without a query, every reward of the seller is returned.
    pub fn search_loyalty_rewards(
        &self,
        body: &SearchLoyaltyRewardsRequest,
    ) -> ApiCall<'a, SearchLoyaltyRewardsResponse> {
        self.client.call(Self::SEARCH_LOYALTY_REWARDS).body(body)
    }
}
