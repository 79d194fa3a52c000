#![allow(dead_code)]

use proxypay_client::{Environment, ProxyPay, ProxyPayConfig};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "key123";

fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Starts a mock gateway and a client pointed at it.
pub async fn mock_gateway(environment: Environment) -> (ProxyPay, MockServer) {
	init_logging();
	let server = MockServer::start().await;
	let config = ProxyPayConfig::new(environment, TEST_API_KEY)
		.expect("Failed to build test config");
	let client = ProxyPay::with_base_url(config, server.uri());
	(client, server)
}

/// A client pointed at an address nothing listens on, to provoke
/// transport failures.
pub fn unreachable_client() -> ProxyPay {
	init_logging();
	let config = ProxyPayConfig::new(Environment::Sandbox, TEST_API_KEY)
		.expect("Failed to build test config");
	ProxyPay::with_base_url(config, "http://127.0.0.1:1")
}
