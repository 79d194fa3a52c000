use serde::Deserialize;

use crate::error::Error;

const SANDBOX_URL: &str = "https://api.sandbox.proxypay.co.ao";
const PRODUCTION_URL: &str = "https://api.proxypay.co.ao";

/// The ProxyPay deployment the client talks to.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	#[serde(alias = "SANDBOX")]
	Sandbox,
	#[serde(alias = "PRODUCTION")]
	Production,
}

impl Environment {
	pub fn base_url(&self) -> &'static str {
		match self {
			Environment::Sandbox => SANDBOX_URL,
			Environment::Production => PRODUCTION_URL,
		}
	}

	pub fn is_sandbox(&self) -> bool {
		matches!(self, Environment::Sandbox)
	}
}

/// Environment and API key for a ProxyPay account.
///
/// Built once and handed to every [`ProxyPay`](crate::ProxyPay) instance
/// that needs it; immutable afterwards.
#[derive(Debug, Deserialize, Clone)]
pub struct ProxyPayConfig {
	environment: Environment,
	api_key:     String,
}

impl ProxyPayConfig {
	/// Creates a configuration for the given environment and API key.
	/// Fails when the key is empty.
	pub fn new(
		environment: Environment,
		api_key: impl Into<String>,
	) -> Result<Self, Error> {
		let api_key = api_key.into();
		if api_key.is_empty() {
			return Err(Error::configuration("ApiKey cannot be empty"));
		}
		Ok(ProxyPayConfig { environment, api_key })
	}

	/// Loads the configuration from `PROXYPAY_ENVIRONMENT` and
	/// `PROXYPAY_API_KEY`.
	pub fn load() -> Result<Self, Error> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix("PROXYPAY"))
			.build()?;

		let config: ProxyPayConfig = config_builder.try_deserialize()?;
		ProxyPayConfig::new(config.environment, config.api_key)
	}

	pub fn environment(&self) -> Environment {
		self.environment
	}

	pub fn api_key(&self) -> &str {
		&self.api_key
	}
}
