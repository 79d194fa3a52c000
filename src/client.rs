use log::{error, info};
use reqwest::{Client, Method, StatusCode};

use crate::config::ProxyPayConfig;
use crate::error::Error;
use crate::model::{
	MockPaymentRequest, MockPaymentResponse, PaymentEvent,
	PaymentReferenceRequest,
};
use crate::request::{self, OutboundRequest};
use crate::response;

/// Upper bound (and default) for the number of payment events returned by
/// [`ProxyPay::list_payments`].
pub const MAX_PAYMENTS_PER_PAGE: u32 = 100;

/// Asynchronous client for the ProxyPay payment-reference API.
///
/// One instance owns its configuration and a single shared HTTP client;
/// every operation assembles an isolated request, so concurrent calls need
/// no coordination. Validation failures surface before any I/O, transport
/// and API failures through the returned `Result`. Nothing is retried.
#[derive(Debug, Clone)]
pub struct ProxyPay {
	config:   ProxyPayConfig,
	base_url: String,
	http:     Client,
}

impl ProxyPay {
	/// Builds a client against the configured environment's gateway.
	pub fn new(config: ProxyPayConfig) -> Self {
		let base_url = config.environment().base_url().to_string();
		ProxyPay { config, base_url, http: Client::new() }
	}

	/// Builds a client against an arbitrary base URL, for self-hosted
	/// gateways and tests. Environment preconditions still apply.
	pub fn with_base_url(
		config: ProxyPayConfig,
		base_url: impl Into<String>,
	) -> Self {
		ProxyPay { config, base_url: base_url.into(), http: Client::new() }
	}

	/// Creates or updates the payment reference with the given id.
	pub async fn generate_or_update_reference(
		&self,
		id: &str,
		reference_request: &PaymentReferenceRequest,
	) -> Result<String, Error> {
		info!("Initiated request to generate MULTICAIXA reference");
		require_reference_id(id)?;

		let request = request::build(
			&self.base_url,
			self.config.api_key(),
			&format!("/references/{id}"),
			Method::PUT,
			Some(reference_request),
			true,
		)?;

		let (status, body) = self.dispatch(request).await?;
		response::confirm(status, &body)
	}

	/// Asks the gateway to allocate a fresh reference id.
	pub async fn generate_reference_id(&self) -> Result<String, Error> {
		info!("Initiated request to generate reference ID via MULTICAIXA");

		let request = request::build::<()>(
			&self.base_url,
			self.config.api_key(),
			"/reference_ids",
			Method::POST,
			None,
			false,
		)?;

		let (status, body) = self.dispatch(request).await?;
		response::confirm(status, &body)
	}

	/// Returns payment events not yet acknowledged by this application.
	/// `n` limits the page size to between 1 and 100; `None` means 100.
	pub async fn list_payments(
		&self,
		n: Option<u32>,
	) -> Result<Vec<PaymentEvent>, Error> {
		info!("Initiated request to list unacknowledged payments");
		let n = n.unwrap_or(MAX_PAYMENTS_PER_PAGE);
		if !(1..=MAX_PAYMENTS_PER_PAGE).contains(&n) {
			return Err(Error::validation(
				"You must specify a value between 1 and 100",
			));
		}

		let request = request::build::<()>(
			&self.base_url,
			self.config.api_key(),
			&format!("/payments?n={n}"),
			Method::GET,
			None,
			false,
		)?;

		let (status, body) = self.dispatch(request).await?;
		response::decode(status, &body)
	}

	/// Confirms that a retrieved payment event was processed, causing the
	/// server to discard it.
	pub async fn acknowledge_payment(&self, id: &str) -> Result<String, Error> {
		info!("Initiated request to acknowledge payment");
		require_reference_id(id)?;

		let request = request::build::<()>(
			&self.base_url,
			self.config.api_key(),
			&format!("/payments/{id}"),
			Method::DELETE,
			None,
			false,
		)?;

		let (status, body) = self.dispatch(request).await?;
		response::confirm(status, &body)
	}

	/// Deletes the payment reference with the given id.
	pub async fn delete_reference(&self, id: &str) -> Result<String, Error> {
		info!("Initiated request to delete reference");
		require_reference_id(id)?;

		let request = request::build::<()>(
			&self.base_url,
			self.config.api_key(),
			&format!("/references/{id}"),
			Method::DELETE,
			None,
			false,
		)?;

		let (status, body) = self.dispatch(request).await?;
		response::confirm(status, &body)
	}

	/// Simulates a payment against an existing reference. Only available
	/// when the client is configured for the sandbox environment.
	pub async fn mock_payment(
		&self,
		mock_request: &MockPaymentRequest,
	) -> Result<MockPaymentResponse, Error> {
		info!("Initiated request to mock/simulate payment in SANDBOX");
		if !self.config.environment().is_sandbox() {
			return Err(Error::Environment);
		}

		let request = request::build(
			&self.base_url,
			self.config.api_key(),
			"/payments",
			Method::POST,
			Some(mock_request),
			true,
		)?;

		let (status, body) = self.dispatch(request).await?;
		response::decode(status, &body)
	}

	async fn dispatch(
		&self,
		request: OutboundRequest,
	) -> Result<(StatusCode, String), Error> {
		let mut builder = self
			.http
			.request(request.method, &request.url)
			.headers(request.headers);
		if let Some(body) = request.body {
			builder = builder.body(body);
		}

		let response = match builder.send().await {
			Ok(response) => response,
			Err(e) => {
				error!("Failed to reach ProxyPay: {e}");
				return Err(e.into());
			}
		};

		let status = response.status();
		let body = response.text().await?;
		Ok((status, body))
	}
}

fn require_reference_id(id: &str) -> Result<(), Error> {
	if id.trim().is_empty() {
		return Err(Error::validation(
			"You must provide a valid and existing payment reference id.",
		));
	}
	Ok(())
}
