use itertools::Itertools;
use reqwest::Client;
use std::{path::Path, process::ExitCode};
use super::auth::authenticate;
use super::config::{config_from, Config};
use super::error::{ConfigError, FileError, ImportError, SubmitError};
use super::parser::Parser;
use super::record::Record;
use super::submitter::{submit, SubmissionResult};
use super::utility::{parse_csv, END_BANNER, START_BANNER};

// one whole run: banners around the pipeline, 1 on any failure
// lookup reads a configuration variable, normally from the process environment
pub async fn run<F>(lookup: F, client: &Client) -> ExitCode
where
    F: Fn(&str) -> Option<String>,
{
    println!("{}", START_BANNER);

    let outcome = match config_from(lookup) {
        Ok(config) => import(client, &config).await,
        Err(error) => Err(error.into()),
    };

    let exit_code = match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    };

    println!("{}", END_BANNER);
    exit_code
}

// read csv -> authenticate -> submit, stopping at the first failure
pub async fn import(client: &Client, config: &Config) -> Result<SubmissionResult, ImportError> {
    let records = read_records(&config.csv_path)?;
    let token = authenticate(client, config).await?;
    let result = submit(client, config, &token, &records).await?;
    Ok(result)
}

pub fn read_records(path: &Path) -> Result<Vec<Record>, FileError> {
    println!("Reading data from '{}'...", path.display());

    let (header, rows) = parse_csv(path)?;
    let parser = Parser::new(header);
    println!(
        "Found {} rows with columns: {}",
        rows.len(),
        parser.columns().iter().join(", ")
    );

    Ok(parser.build_records(rows))
}

// what the operator sees when a run fails, one line per entry
pub fn report_lines(error: &ImportError) -> Vec<String> {
    let mut lines = vec![format!("Error: {}.", error)];

    match error {
        ImportError::Config(ConfigError::Missing(_)) => {
            lines.push("Please create a .env file and add these variables.".to_owned());
        }
        ImportError::File(FileError::NotFound(_)) => {
            lines.push("Please make sure the CSV file is in the working directory, or set CSV_FILE_PATH to its full path.".to_owned());
        }
        ImportError::Submit(SubmitError::HttpFailure { .. }) => {
            lines.push("The server responded with an error. This could be due to:".to_owned());
            lines.push("- Invalid data in your CSV (e.g., wrong data types, missing required fields).".to_owned());
            lines.push("- Incorrect table or field names in your configuration or CSV headers.".to_owned());
        }
        _ => {}
    }

    if let Some(body) = error.response_body() {
        lines.push(format!("Response content: {}", body));
    }

    lines
}

pub fn report(error: &ImportError) {
    tracing::debug!(?error, "import failed");
    for line in report_lines(error) {
        eprintln!("{}", line);
    }
}
