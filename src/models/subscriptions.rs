//! Subscription models.

use crate::clients::ErrorEntry;

model! {
    /// A subscription to a subscription plan.
    pub struct Subscription / SubscriptionBuilder {
        optional {
            id: String,
            location_id: String,
            plan_variation_id: String,
            customer_id: String,
            start_date: String,
            /// The date the subscription is scheduled to be canceled, in `YYYY-MM-DD` format.
            canceled_date: String,
            charged_through_date: String,
            status: String,
            version: i64,
            created_at: String,
            card_id: String,
            timezone: String,
        }
    }
}

model! {
    /// A scheduled action on a subscription.
    pub struct SubscriptionAction / SubscriptionActionBuilder {
        optional {
            id: String,
            /// `CANCEL`, `PAUSE`, `RESUME`, `SWAP_PLAN` or `CHANGE_BILLING_ANCHOR_DATE`.
            #[serde(rename = "type")]
            action_type: String,
            effective_date: String,
            new_plan_variation_id: String,
        }
    }
}

model! {
    /// The subscription after scheduling its cancellation.
    pub struct CancelSubscriptionResponse / CancelSubscriptionResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            subscription: Subscription,
            actions: Vec<SubscriptionAction>,
        }
    }
}
