//! Square API operations.
//!
//! Each resource group is exposed as a small handle borrowed from a
//! [`SquareClient`](crate::SquareClient), for example
//! [`SquareClient::orders`](crate::SquareClient::orders). Every operation is
//! a const [`Endpoint`] plus a method that returns an [`ApiCall`], which is
//! then sent asynchronously, with cancellation, or blocking.
//!
//! ```rust,ignore
//! use square_api::{AccessToken, Environment, SquareClient, SquareConfig};
//!
//! let config = SquareConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .access_token(AccessToken::new("EAAAE...")?)
//!     .build()?;
//! let client = SquareClient::new(config)?;
//!
//! let response = client.orders().retrieve_order("CAISENgvlJ6jLWAzERDzjyHVybY").send().await?;
//! println!("{:?}", response.order);
//! ```

mod apple_pay;
mod call;
mod cards;
mod catalog;
mod customers;
mod devices;
mod employees;
mod endpoint;
mod gift_card_activities;
mod inventory;
mod loyalty;
mod orders;
mod response;
mod subscriptions;

pub use apple_pay::ApplePayApi;
pub use call::ApiCall;
pub use cards::CardsApi;
pub use catalog::CatalogApi;
pub use customers::CustomersApi;
pub use devices::DevicesApi;
pub use employees::EmployeesApi;
pub use endpoint::Endpoint;
pub use gift_card_activities::GiftCardActivitiesApi;
pub use inventory::InventoryApi;
pub use loyalty::LoyaltyApi;
pub use orders::OrdersApi;
pub use response::ApiResponse;
pub use subscriptions::SubscriptionsApi;
