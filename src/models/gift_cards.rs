//! Gift card activity models.

use super::Money;
use crate::clients::ErrorEntry;

model! {
    /// Details of an `ACTIVATE` activity.
    pub struct GiftCardActivityActivate / GiftCardActivityActivateBuilder {
        optional {
            /// The amount added to the gift card. Required when the activity is not linked to an order.
            amount_money: Money,
            /// The ID of the order that contains the gift card line item.
            order_id: String,
            line_item_uid: String,
            /// A client-specified ID that associates the activity with an entity in another system.
            reference_id: String,
            buyer_payment_instrument_ids: Vec<String>,
        }
    }
}

model! {
    /// Details of a `DEACTIVATE` activity.
    pub struct GiftCardActivityDeactivate / GiftCardActivityDeactivateBuilder {
        required {
            /// `SUSPICIOUS_ACTIVITY`, `UNKNOWN_REASON` or `CHARGEBACK_DEACTIVATE`.
            reason: String,
        }
    }
}

model! {
    /// Details of an `UNBLOCK` activity.
    pub struct GiftCardActivityUnblock / GiftCardActivityUnblockBuilder {
        required {
            /// `CHARGEBACK_UNBLOCK`.
            reason: String,
        }
    }
}

model! {
    /// An action that changes a gift card's balance or state.
    pub struct GiftCardActivity / GiftCardActivityBuilder {
        required {
            /// The activity type, such as `ACTIVATE` or `DEACTIVATE`.
            #[serde(rename = "type")]
            activity_type: String,
            location_id: String,
        }
        optional {
            id: String,
            created_at: String,
            gift_card_id: String,
            gift_card_gan: String,
            gift_card_balance_money: Money,
            activate_activity_details: GiftCardActivityActivate,
            deactivate_activity_details: GiftCardActivityDeactivate,
            unblock_activity_details: GiftCardActivityUnblock,
        }
    }
}

model! {
    /// Creates a gift card activity.
    pub struct CreateGiftCardActivityRequest / CreateGiftCardActivityRequestBuilder {
        required {
            idempotency_key: String,
            gift_card_activity: GiftCardActivity,
        }
    }
}

model! {
    /// The created gift card activity.
    pub struct CreateGiftCardActivityResponse / CreateGiftCardActivityResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            gift_card_activity: GiftCardActivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_activate_activity_serializes_type_and_details() {
        let activity = GiftCardActivity::builder()
            .activity_type("ACTIVATE")
            .location_id("81FN9BNFZTKS4")
            .gift_card_id("gftc:6d55a72470d940c6ba09c0ab8ad08d20")
            .activate_activity_details(
                GiftCardActivityActivate::builder()
                    .order_id("jJNGHm4gLI6XkFbwtiSLqK72KkAZY")
                    .line_item_uid("eIWl7X0nMuO9Ewbh0ChIx")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&activity).unwrap(),
            json!({
                "type": "ACTIVATE",
                "location_id": "81FN9BNFZTKS4",
                "gift_card_id": "gftc:6d55a72470d940c6ba09c0ab8ad08d20",
                "activate_activity_details": {
                    "order_id": "jJNGHm4gLI6XkFbwtiSLqK72KkAZY",
                    "line_item_uid": "eIWl7X0nMuO9Ewbh0ChIx"
                }
            })
        );
    }

    #[test]
    fn test_deactivate_requires_reason() {
        assert!(GiftCardActivityDeactivate::builder().build().is_err());
        assert!(GiftCardActivityUnblock::builder()
            .reason("CHARGEBACK_UNBLOCK")
            .build()
            .is_ok());
    }
}
