use derive_more::derive::{Display, Error};

/// Every way a ProxyPay operation can fail.
///
/// `Configuration`, `Validation` and `Environment` are produced before any
/// network I/O. `Transport`, `Api` and `Deserialization` come back through
/// the same `Result` once the HTTP exchange has completed; a call fails at
/// most once and is never retried by the client.
#[derive(Debug, Display, Error)]
pub enum Error {
	#[display("Configuration error: {message}")]
	Configuration { message: String },

	#[display("Validation error: {message}")]
	Validation { message: String },

	#[display("Can not run mock payments in production environment")]
	Environment,

	#[display("Transport error: {message}")]
	Transport { message: String },

	#[display("{message}")]
	Api { status: u16, message: String },

	#[display("Deserialization error: {message}")]
	Deserialization { message: String },
}

impl Error {
	pub fn configuration(message: impl Into<String>) -> Self {
		Error::Configuration { message: message.into() }
	}

	pub fn validation(message: impl Into<String>) -> Self {
		Error::Validation { message: message.into() }
	}

	/// The HTTP status that produced this error, when the server answered
	/// at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			Error::Api { status, .. } => Some(*status),
			_ => None,
		}
	}
}

impl From<reqwest::Error> for Error {
	fn from(e: reqwest::Error) -> Self {
		Error::Transport { message: e.to_string() }
	}
}

impl From<serde_json::Error> for Error {
	fn from(e: serde_json::Error) -> Self {
		Error::Deserialization { message: e.to_string() }
	}
}

impl From<config::ConfigError> for Error {
	fn from(e: config::ConfigError) -> Self {
		Error::Configuration { message: e.to_string() }
	}
}
