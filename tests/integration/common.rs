use affinity_api::{AffinityCredentials, AffinityRestClient};
use base64::Engine;
use wiremock::MockServer;

pub const API_KEY: &str = "integration-key";

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, AffinityRestClient) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("affinity_client=debug,affinity_rest=debug")
        .with_test_writer()
        .try_init();

    let server = MockServer::start().await;
    let client = AffinityRestClient::with_credentials(
        AffinityCredentials::new(API_KEY).with_base_url(server.uri()),
    )
    .expect("client should build against mock server");
    (server, client)
}

/// The `Authorization` header every request must carry.
pub fn basic_auth_header() -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!(":{}", API_KEY));
    format!("Basic {}", token)
}
