use std::{env, process::ExitCode};
use modules::config::load_dotenv;
use modules::importer::run;
use tracing_subscriber::EnvFilter;

mod modules;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();
    run(|name| env::var(name).ok(), &reqwest::Client::new()).await
}
