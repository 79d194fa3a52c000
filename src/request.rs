use reqwest::Method;
use reqwest::header::{
	ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue,
};
use serde::Serialize;

use crate::error::Error;

pub(crate) const ACCEPT_MEDIA_TYPE: &str = "application/vnd.proxypay.v2+json";
pub(crate) const CONTENT_MEDIA_TYPE: &str = "application/json";

/// A fully assembled HTTP request, ready for dispatch. Built fresh for
/// every operation and never reused.
#[derive(Debug)]
pub(crate) struct OutboundRequest {
	pub method:  Method,
	pub url:     String,
	pub headers: HeaderMap,
	pub body:    Option<String>,
}

/// Assembles an outbound request without performing any I/O.
///
/// `GET` and `DELETE` never carry a body. `PUT` and `POST` carry the
/// serialized payload when `send_body` is set; a bodyless `POST` still sends
/// an empty JSON object because the gateway rejects requests without one.
pub(crate) fn build<T: Serialize>(
	base_url: &str,
	api_key: &str,
	endpoint: &str,
	method: Method,
	payload: Option<&T>,
	send_body: bool,
) -> Result<OutboundRequest, Error> {
	let url = format!("{}{endpoint}", base_url.trim_end_matches('/'));

	let body = if method == Method::POST || method == Method::PUT {
		if send_body {
			match payload {
				Some(payload) => Some(serde_json::to_string(payload)?),
				None => None,
			}
		} else if method == Method::POST {
			Some("{}".to_string())
		} else {
			None
		}
	} else {
		None
	};

	Ok(OutboundRequest {
		method,
		url,
		headers: headers_for(api_key)?,
		body,
	})
}

fn headers_for(api_key: &str) -> Result<HeaderMap, Error> {
	let token = HeaderValue::from_str(&format!("Token {api_key}")).map_err(
		|_| Error::configuration("ApiKey contains invalid header characters"),
	)?;

	let mut headers = HeaderMap::new();
	headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_MEDIA_TYPE));
	headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_MEDIA_TYPE));
	headers.insert(AUTHORIZATION, token);
	Ok(headers)
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	const BASE_URL: &str = "https://api.sandbox.proxypay.co.ao";

	#[test]
	fn test_build_joins_base_url_and_endpoint() {
		let request = build::<()>(
			BASE_URL,
			"key123",
			"/references/841520000",
			Method::PUT,
			None,
			false,
		)
		.unwrap();

		assert_eq!(
			request.url,
			"https://api.sandbox.proxypay.co.ao/references/841520000"
		);
	}

	#[test]
	fn test_build_trims_trailing_slash_from_base_url() {
		let request = build::<()>(
			"https://api.proxypay.co.ao/",
			"key123",
			"/payments?n=100",
			Method::GET,
			None,
			false,
		)
		.unwrap();

		assert_eq!(request.url, "https://api.proxypay.co.ao/payments?n=100");
	}

	#[test]
	fn test_build_always_attaches_proxypay_headers() {
		let request = build::<()>(
			BASE_URL,
			"key123",
			"/reference_ids",
			Method::POST,
			None,
			false,
		)
		.unwrap();

		assert_eq!(
			request.headers.get(ACCEPT).unwrap(),
			"application/vnd.proxypay.v2+json"
		);
		assert_eq!(
			request.headers.get(CONTENT_TYPE).unwrap(),
			"application/json"
		);
		assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Token key123");
	}

	#[test]
	fn test_put_with_send_body_serializes_payload() {
		let payload = json!({"amount": "3000.00"});
		let request = build(
			BASE_URL,
			"key123",
			"/references/1",
			Method::PUT,
			Some(&payload),
			true,
		)
		.unwrap();

		assert_eq!(request.body.as_deref(), Some(r#"{"amount":"3000.00"}"#));
	}

	#[test]
	fn test_bodyless_post_sends_empty_object() {
		let request = build::<()>(
			BASE_URL,
			"key123",
			"/reference_ids",
			Method::POST,
			None,
			false,
		)
		.unwrap();

		assert_eq!(request.body.as_deref(), Some("{}"));
	}

	#[test]
	fn test_get_and_delete_never_carry_a_body() {
		let payload = json!({"amount": "3000.00"});

		for method in [Method::GET, Method::DELETE] {
			let request = build(
				BASE_URL,
				"key123",
				"/payments/1",
				method,
				Some(&payload),
				true,
			)
			.unwrap();

			assert!(request.body.is_none());
		}
	}

	#[test]
	fn test_invalid_api_key_fails_as_configuration_error() {
		let result = build::<()>(
			BASE_URL,
			"key\nwith\nnewlines",
			"/payments",
			Method::GET,
			None,
			false,
		);

		assert!(matches!(result, Err(Error::Configuration { .. })));
	}
}
