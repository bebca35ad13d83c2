use admin_client::config::DEFAULT_BASE_URL;
use admin_client::{ClientConfig, HttpClient};
use gloo_storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "admin_token";

/// Backend base URL, fixed at build time.
pub fn api_base_url() -> &'static str {
    option_env!("ADMIN_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Client for the admin API, authenticated with the stored session token if any.
pub fn connect() -> HttpClient {
    let mut config = ClientConfig::new(api_base_url());
    match stored_token() {
        Some(token) => config = config.with_token(token),
        None => tracing::warn!("no admin token in local storage, requests are unauthenticated"),
    }
    tracing::info!(base_url = api_base_url(), "admin api client ready");
    HttpClient::with_config(config)
}
