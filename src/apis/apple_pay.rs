//! Apple Pay domain registration.

use crate::apis::{ApiCall, Endpoint};
use crate::client::SquareClient;
use crate::clients::HttpMethod;
use crate::models::{RegisterDomainRequest, RegisterDomainResponse};

/// Operations of the Apple Pay API.
#[derive(Clone, Copy, Debug)]
pub struct ApplePayApi<'a> {
    client: &'a SquareClient,
}

impl<'a> ApplePayApi<'a> {
    /// `POST /v2/apple-pay/domains`
    pub const REGISTER_DOMAIN: Endpoint =
        Endpoint::new("RegisterDomain", HttpMethod::Post, "/v2/apple-pay/domains");

    pub(crate) const fn new(client: &'a SquareClient) -> Self {
        Self { client }
    }

    /// Activates a domain for use with Apple Pay on the Web and Square.
    ///
    /// The domain must host Square's domain association file under
    /// `/.well-known/apple-developer-merchantid-domain-association` before
    /// this call is made.
    pub fn register_domain(&self, body: &RegisterDomainRequest) -> ApiCall<'a, RegisterDomainResponse> {
        self.client.call(Self::REGISTER_DOMAIN).body(body)
    }
}
