//! # Square API Rust SDK
//!
//! A Rust client for the Square REST API, providing type-safe configuration,
//! bearer authentication and typed request and response models.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`SquareConfig`] and [`SquareConfigBuilder`]
//! - Validated newtypes for credentials and environment values
//! - One [`SquareClient`] handing out a handle per API, such as
//!   [`SquareClient::orders`]
//! - Immutable models with builders that report every missing required field
//! - Three-state optional fields through [`models::Nullable`]
//! - Async, cancellable and blocking variants of every operation
//! - Webhook signature verification via [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use square_api::{AccessToken, Environment, SquareClient, SquareConfig, SquareVersion};
//!
//! let config = SquareConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .access_token(AccessToken::new("EAAAE-your-token").unwrap())
//!     .square_version(SquareVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = SquareClient::new(config).unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use square_api::idempotency::new_idempotency_key;
//! use square_api::models::{CreateOrderRequest, Order, OrderLineItem};
//!
//! let order = Order::builder()
//!     .location_id("057P5VYJ4A5X1")
//!     .line_items(vec![OrderLineItem::builder()
//!         .quantity("1")
//!         .name("Coffee")
//!         .build()?])
//!     .build()?;
//! let request = CreateOrderRequest::builder()
//!     .order(order)
//!     .idempotency_key(new_idempotency_key())
//!     .build()?;
//!
//! let response = client.orders().create_order(&request).send().await?;
//! println!("created {:?}", response.order);
//! ```
//!
//! ## Blocking Calls
//!
//! Outside an async runtime, every call can also be completed synchronously:
//!
//! ```rust,ignore
//! let response = client.orders().retrieve_order("CAISENgvlJ6jLWAzERDzjyHVybY").send_blocking()?;
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`SquareError`], which tells validation, authentication,
//! network, API, decoding and cancellation failures apart:
//!
//! ```rust,ignore
//! use square_api::clients::{ApiErrorKind, SquareError};
//!
//! match client.orders().retrieve_order("missing").send().await {
//!     Ok(response) => println!("{:?}", response.order),
//!     Err(SquareError::Api(e)) if e.kind() == ApiErrorKind::NotFound => println!("no such order"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and model builders validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **Async-first**: Built on Tokio, with blocking wrappers
//! - **No hidden retries**: Every failure is reported to the caller

pub mod apis;
pub mod auth;
mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod idempotency;
pub mod models;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use client::{SquareClient, SquareClientBuilder};
pub use config::{
    AccessToken, CustomUrl, Environment, SquareConfig, SquareConfigBuilder, SquareVersion,
};
pub use error::{ConfigError, ValidationError};

// Re-export call types
pub use apis::{ApiCall, ApiResponse, Endpoint};
pub use clients::{ApiError, ApiErrorKind, SquareError};

// Re-export for cancellable calls
pub use tokio_util::sync::CancellationToken;
