use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::Error;

const END_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]");

/// Opaque merchant-side metadata attached to a reference. ProxyPay stores
/// and echoes these fields without interpreting them.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CustomFields {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub app_description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub invoice:         Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order_number:    Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub proposal_number: Option<String>,
}

/// Payload for creating or updating a payment reference.
///
/// Only obtainable through [`PaymentReferenceRequest::new`], which enforces
/// the end-date rules, so a value of this type is always safe to send.
#[derive(Debug, Serialize, Clone)]
pub struct PaymentReferenceRequest {
	amount:        String,
	#[serde(skip_serializing_if = "Option::is_none")]
	custom_fields: Option<CustomFields>,
	end_datetime:  String,
}

impl PaymentReferenceRequest {
	/// Validates and assembles a reference request. `end_datetime` must be
	/// a `YYYY-MM-DD` date strictly after today (UTC).
	pub fn new(
		amount: impl Into<String>,
		custom_fields: Option<CustomFields>,
		end_datetime: impl Into<String>,
	) -> Result<Self, Error> {
		let end_datetime = end_datetime.into();

		let end_date = Date::parse(&end_datetime, END_DATE_FORMAT).map_err(
			|_| {
				Error::validation(
					"Date is mal-formatted. Should be in YYYY-MM-DD format.",
				)
			},
		)?;

		if end_date <= OffsetDateTime::now_utc().date() {
			return Err(Error::validation(
				"Invalid date. Date must be in the future.",
			));
		}

		Ok(PaymentReferenceRequest {
			amount: amount.into(),
			custom_fields,
			end_datetime,
		})
	}

	pub fn amount(&self) -> &str {
		&self.amount
	}

	pub fn end_datetime(&self) -> &str {
		&self.end_datetime
	}
}

/// Payload for simulating a payment against an existing reference.
/// Accepted by the gateway only in the sandbox environment.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MockPaymentRequest {
	pub amount:       String,
	pub reference_id: String,
}

impl MockPaymentRequest {
	pub fn new(
		amount: impl Into<String>,
		reference_id: impl Into<String>,
	) -> Self {
		MockPaymentRequest {
			amount:       amount.into(),
			reference_id: reference_id.into(),
		}
	}
}

/// Server-side view of a simulated payment, returned by the sandbox.
#[derive(Debug, Deserialize, Clone)]
pub struct MockPaymentResponse {
	pub id:           Option<i64>,
	pub reference_id: Option<String>,
	pub amount:       Option<String>,
	pub datetime:     Option<String>,
}

/// A payment event recorded by the gateway and not yet acknowledged by the
/// client application. Field set mirrors what MULTICAIXA terminals report.
#[derive(Debug, Deserialize, Clone)]
pub struct PaymentEvent {
	pub id:                      Option<i64>,
	pub reference_id:            Option<i64>,
	pub transaction_id:          Option<i64>,
	pub amount:                  Option<String>,
	pub fee:                     Option<serde_json::Value>,
	pub custom_fields:           Option<CustomFields>,
	pub datetime:                Option<String>,
	pub entity_id:               Option<i64>,
	pub product_id:              Option<i64>,
	pub period_id:               Option<i64>,
	pub period_start_datetime:   Option<String>,
	pub period_end_datetime:     Option<String>,
	pub parameter_id:            Option<serde_json::Value>,
	pub terminal_id:             Option<String>,
	pub terminal_type:           Option<String>,
	pub terminal_location:       Option<String>,
	pub terminal_period_id:      Option<i64>,
	pub terminal_transaction_id: Option<i64>,
}

/// A payment reference as the server reports it.
#[derive(Debug, Deserialize, Clone)]
pub struct Reference {
	pub id:            Option<String>,
	pub number:        Option<String>,
	pub amount:        Option<String>,
	pub status:        Option<String>,
	pub entity_id:     Option<String>,
	pub custom_fields: Option<CustomFields>,
	pub expiry_date:   Option<String>,
	pub created_at:    Option<String>,
	pub updated_at:    Option<String>,
}
