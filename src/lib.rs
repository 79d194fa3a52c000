//! Client SDK for the ProxyPay payment-reference API, the gateway behind
//! MULTICAIXA reference payments in Angola.
//!
//! Build a [`ProxyPayConfig`] once, hand it to a [`ProxyPay`] client and
//! issue operations: create or update references, generate reference ids,
//! list and acknowledge payment events, delete references, and simulate
//! payments in the sandbox.
//!
//! ```no_run
//! use proxypay_client::{
//! 	Environment, ProxyPay, ProxyPayConfig,
//! 	model::PaymentReferenceRequest,
//! };
//!
//! # async fn run() -> Result<(), proxypay_client::Error> {
//! let config = ProxyPayConfig::new(Environment::Sandbox, "YOUR_API_KEY")?;
//! let client = ProxyPay::new(config);
//!
//! let request =
//! 	PaymentReferenceRequest::new("3000.00", None, "2030-10-12")?;
//! let confirmation = client
//! 	.generate_or_update_reference("841520000", &request)
//! 	.await?;
//! println!("{confirmation}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;

mod request;
mod response;

pub use client::{MAX_PAYMENTS_PER_PAGE, ProxyPay};
pub use config::{Environment, ProxyPayConfig};
pub use error::Error;
