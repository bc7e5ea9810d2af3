//! Request and response models.
//!
//! Models mirror Square's wire schema field-for-field. Every model is
//! immutable once built, compares structurally, and is created either by
//! its builder (requests) or by decoding a response body (responses).
//!
//! Optional fields use [`Nullable<T>`] so that a field that was never set is
//! omitted from the JSON body while an explicit [`Nullable::Null`] is sent as
//! `null`.
//!
//! # Example
//!
//! ```rust
//! use square_api::models::{CreateCardRequest, Card};
//! use square_api::ValidationError;
//!
//! let missing = CreateCardRequest::builder()
//!     .card(Card::builder().build().unwrap())
//!     .build();
//!
//! assert_eq!(
//!     missing.unwrap_err(),
//!     ValidationError::MissingRequiredFields {
//!         model: "CreateCardRequest",
//!         fields: vec!["idempotency_key", "source_id"],
//!     }
//! );
//! ```

#[macro_use]
mod macros;

mod nullable;

pub mod apple_pay;
pub mod cards;
pub mod catalog;
pub mod common;
pub mod customers;
pub mod devices;
pub mod employees;
pub mod gift_cards;
pub mod inventory;
pub mod loyalty;
pub mod orders;
pub mod subscriptions;

pub use nullable::Nullable;

pub use apple_pay::*;
pub use cards::*;
pub use catalog::*;
pub use common::*;
pub use customers::*;
pub use devices::*;
pub use employees::*;
pub use gift_cards::*;
pub use inventory::*;
pub use loyalty::*;
pub use orders::*;
pub use subscriptions::*;
