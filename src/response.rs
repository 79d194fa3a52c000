use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Fixed confirmation returned for `204 No Content` answers, which carry no
/// body to parse.
pub(crate) const NO_CONTENT_MESSAGE: &str = "Operation terminated successfully";

/// Classifies a response whose success body is a JSON document of type `T`.
/// Pure function of status and body.
pub(crate) fn decode<T: DeserializeOwned>(
	status: StatusCode,
	body: &str,
) -> Result<T, Error> {
	match status.as_u16() {
		200 => serde_json::from_str(body).map_err(Error::from),
		status => Err(failure(status)),
	}
}

/// Classifies a response for operations whose success value is a string:
/// a JSON-encoded string on 200, or a fixed confirmation on 204.
pub(crate) fn confirm(status: StatusCode, body: &str) -> Result<String, Error> {
	match status.as_u16() {
		200 => serde_json::from_str(body).map_err(Error::from),
		204 => Ok(NO_CONTENT_MESSAGE.to_string()),
		status => Err(failure(status)),
	}
}

fn failure(status: u16) -> Error {
	Error::Api { status, message: message_for(status) }
}

fn message_for(status: u16) -> String {
	match status {
		400 => "Bad Request -- Request is malformed.".to_string(),
		401 => "Your API key is wrong".to_string(),
		404 => "Not Found -- The specified resource could not be found"
			.to_string(),
		405 => "Method Not Allowed -- You tried to access a resource with an \
		        invalid HTTP method"
			.to_string(),
		406 => "Not Acceptable -- You requested a format that is not json"
			.to_string(),
		422 => "Unprocessable Entity -- Your request includes invalid \
		        fields. Check the response body for details"
			.to_string(),
		429 => "Too Many Requests -- You're exceeding the API rate limit! \
		        Reduce the number of requests / minute."
			.to_string(),
		500 => "Internal Server Error -- We had a problem with our server. \
		        Try again later "
			.to_string(),
		503 => "Service Unavailable -- We're temporarily offline for \
		        maintenance. Please try again later."
			.to_string(),
		status => format!("An error occurred => HTTP Status {status}"),
	}
}
