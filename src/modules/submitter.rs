use reqwest::Client;
use serde_json::Value;
use super::auth::AccessToken;
use super::config::Config;
use super::error::SubmitError;
use super::record::Record;
use super::utility::pretty_json;

pub const TABLES_PATH: &str = "/api/tables";

#[derive(Debug, PartialEq)]
pub enum SubmissionResult {
    // nothing to send, the api was not called
    Skipped,
    // parsed body of the api response
    Created(Value),
}

// create every record in the destination table with one request
// the api decides which rows it accepts, there is no per-row accounting here
pub async fn submit(
    client: &Client,
    config: &Config,
    token: &AccessToken,
    records: &[Record],
) -> Result<SubmissionResult, SubmitError> {
    if records.is_empty() {
        println!("No records to import.");
        return Ok(SubmissionResult::Skipped);
    }

    println!(
        "Preparing to import {} records into the '{}' table...",
        records.len(),
        config.table_name
    );

    let api_url = format!("{}{}/{}", config.base_url(), TABLES_PATH, config.table_name);
    tracing::debug!(url = %api_url, records = records.len(), "submitting records");

    let response = client
        .post(&api_url)
        .bearer_auth(token.secret())
        .json(records)
        .send()
        .await
        .map_err(|error| SubmitError::TransportFailure { detail: error.to_string() })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| SubmitError::TransportFailure { detail: error.to_string() })?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "tables endpoint responded");

    if !status.is_success() {
        return Err(SubmitError::HttpFailure { status: status.as_u16(), body });
    }

    let created: Value = serde_json::from_str(&body)
        .map_err(|_| SubmitError::MalformedResponse { body: body.clone() })?;

    println!("Bulk import successful!");
    println!("API Response:");
    println!("{}", pretty_json(&created));

    Ok(SubmissionResult::Created(created))
}
