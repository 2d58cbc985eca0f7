use reqwest::Client;
use std::path::Path;
use super::config::{config_from, Config};

// local mock servers must never be reached through a system proxy
pub fn test_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

// configuration pointing at a plain-http host, e.g. a wiremock server address
pub fn test_config(domain: &str, csv_path: &Path) -> Config {
    let csv_path = csv_path.display().to_string();
    config_from(|name| match name {
        "MP_DOMAIN" => Some(domain.to_owned()),
        "CLIENT_ID" => Some("importer".to_owned()),
        "CLIENT_SECRET" => Some("s3cret".to_owned()),
        "MP_SCHEME" => Some("http".to_owned()),
        "CSV_FILE_PATH" => Some(csv_path.clone()),
        _ => None,
    })
    .unwrap()
}
