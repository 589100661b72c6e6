use store::AppConfig;

/// Build the API client for the current deployment.
///
/// Components call this inside their handlers rather than threading a
/// client through props; construction is cheap and the configuration is
/// fixed at compile time.
pub fn make_client() -> api::Client {
    match api::Client::from_config(&AppConfig::from_env()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("invalid API base URL in config: {e}");
            api::Client::from_config(&AppConfig::default())
                .expect("default API base URL is valid")
        }
    }
}
