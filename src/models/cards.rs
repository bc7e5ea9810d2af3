//! Card on file models.

use super::Address;
use crate::clients::ErrorEntry;

model! {
    /// A payment card stored on file.
    pub struct Card / CardBuilder {
        optional {
            id: String,
            card_brand: String,
            last_4: String,
            exp_month: i64,
            exp_year: i64,
            cardholder_name: String,
            billing_address: Address,
            fingerprint: String,
            customer_id: String,
            merchant_id: String,
            /// An optional user-defined reference ID that associates this card with another entity.
            reference_id: String,
            enabled: bool,
            card_type: String,
            prepaid_type: String,
            bin: String,
            version: i64,
            card_co_brand: String,
        }
    }
}

model! {
    /// Adds a card on file to an existing merchant.
    pub struct CreateCardRequest / CreateCardRequestBuilder {
        required {
            /// A unique string that identifies this request. Reusing it makes the call idempotent.
            idempotency_key: String,
            /// The ID of the source which represents the card information to be stored.
            source_id: String,
            /// Payment details associated with the card to be stored.
            card: Card,
        }
        optional {
            /// An identifying token generated by `Payments.verifyBuyer()`.
            verification_token: String,
        }
    }
}

model! {
    /// The card created by a `CreateCard` call.
    pub struct CreateCardResponse / CreateCardResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            card: Card,
        }
    }
}
