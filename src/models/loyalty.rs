//! Loyalty reward search models.

use crate::clients::ErrorEntry;

model! {
    /// Criteria for a loyalty reward search.
    pub struct SearchLoyaltyRewardsRequestLoyaltyRewardQuery / SearchLoyaltyRewardsRequestLoyaltyRewardQueryBuilder {
        required {
            loyalty_account_id: String,
        }
        optional {
            /// `ISSUED`, `REDEEMED` or `DELETED`.
            status: String,
        }
    }
}

model! {
    /// Searches the rewards of a loyalty account.
    pub struct SearchLoyaltyRewardsRequest / SearchLoyaltyRewardsRequestBuilder {
        optional {
            /// Without a query, all rewards of the seller are returned.
            query: SearchLoyaltyRewardsRequestLoyaltyRewardQuery,
            /// Between 1 and 30.
            limit: i64,
            cursor: String,
        }
    }
}

model! {
    /// A reward a buyer can redeem for points.
    pub struct LoyaltyReward / LoyaltyRewardBuilder {
        required {
            loyalty_account_id: String,
            reward_tier_id: String,
        }
        optional {
            id: String,
            status: String,
            points: i64,
            order_id: String,
            created_at: String,
            updated_at: String,
            redeemed_at: String,
        }
    }
}

model! {
    /// Rewards matching a search.
    pub struct SearchLoyaltyRewardsResponse / SearchLoyaltyRewardsResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            rewards: Vec<LoyaltyReward>,
            cursor: String,
        }
    }
}
