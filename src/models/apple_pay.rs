//! Apple Pay domain registration models.

use crate::clients::ErrorEntry;

model! {
    /// Registers a domain for Apple Pay on the Web.
    pub struct RegisterDomainRequest / RegisterDomainRequestBuilder {
        required {
            /// A domain name as described in RFC 1034 that will be registered with Apple Pay.
            domain_name: String,
        }
    }
}

model! {
    /// The result of a domain registration.
    pub struct RegisterDomainResponse / RegisterDomainResponseBuilder {
        optional {
            errors: Vec<ErrorEntry>,
            /// `VERIFIED` or `PENDING`.
            status: String,
        }
    }
}
