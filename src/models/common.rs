//! Models shared across resources.

model! {
    /// An amount of money in the smallest denomination of its currency.
    ///
    /// For USD, `amount` is in cents.
    pub struct Money / MoneyBuilder {
        optional {
            /// The amount in the smallest currency unit. May be negative for refunds.
            amount: i64,
            /// ISO 4217 currency code, such as `USD`.
            currency: String,
        }
    }
}

model! {
    /// A postal address.
    pub struct Address / AddressBuilder {
        optional {
            address_line_1: String,
            address_line_2: String,
            address_line_3: String,
            locality: String,
            sublocality: String,
            administrative_district_level_1: String,
            postal_code: String,
            /// ISO 3166 Alpha-2 country code.
            country: String,
            first_name: String,
            last_name: String,
        }
    }
}

model! {
    /// A window of time bounded by RFC 3339 timestamps.
    pub struct TimeRange / TimeRangeBuilder {
        optional {
            start_at: String,
            end_at: String,
        }
    }
}
