pub mod auth;
pub mod config;
pub mod error;
pub mod importer;
pub mod parser;
pub mod record;
pub mod submitter;
pub mod utility;

#[cfg(test)]
pub mod test_support;
