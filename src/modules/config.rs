use std::path::PathBuf;
use super::error::ConfigError;

pub struct Config {
    // host only, e.g. my.ministryplatform.com
    pub domain: String,
    pub client_id: String,
    pub client_secret: String,
    pub table_name: String,
    pub csv_path: PathBuf,

    /*
        option: scheme
        default: https
        effect: scheme used for both api calls. Only useful to point the
        importer at a local mock of the platform, e.g. MP_SCHEME=http
    */
    pub scheme: String,
}

pub const DOMAIN_VAR: &str = "MP_DOMAIN";
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";
pub const TABLE_VAR: &str = "MP_TABLE";
pub const CSV_PATH_VAR: &str = "CSV_FILE_PATH";
pub const SCHEME_VAR: &str = "MP_SCHEME";

pub const TABLE_DEFAULT: &str = "Contacts";
pub const CSV_PATH_DEFAULT: &str = "sample-data.csv";
pub const SCHEME_DEFAULT: &str = "https";

impl Config {
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.domain)
    }
}

// manual Debug so the secret never ends up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("table_name", &self.table_name)
            .field("csv_path", &self.csv_path)
            .field("scheme", &self.scheme)
            .finish()
    }
}

// merge .env into the process environment, real variables win
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(error) if error.not_found() => tracing::debug!("no .env file, using process environment"),
        Err(error) => tracing::warn!(%error, "ignoring unreadable .env file"),
    }
}

pub fn config_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // blank values count as missing
    let read = |name: &str| {
        lookup(name)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    };

    let mut missing = Vec::new();
    let mut required = |name: &'static str| {
        let value = read(name);
        if value.is_none() {
            missing.push(name);
        }
        value.unwrap_or_default()
    };

    let domain = required(DOMAIN_VAR);
    let client_id = required(CLIENT_ID_VAR);
    let client_secret = required(CLIENT_SECRET_VAR);

    if !missing.is_empty() {
        return Err(ConfigError::Missing(missing));
    }

    let scheme = read(SCHEME_VAR)
        .unwrap_or_else(|| SCHEME_DEFAULT.to_owned())
        .to_lowercase();
    if scheme != "https" && scheme != "http" {
        return Err(ConfigError::InvalidScheme(scheme));
    }

    Ok(Config {
        domain,
        client_id,
        client_secret,
        table_name: read(TABLE_VAR).unwrap_or_else(|| TABLE_DEFAULT.to_owned()),
        csv_path: PathBuf::from(read(CSV_PATH_VAR).unwrap_or_else(|| CSV_PATH_DEFAULT.to_owned())),
        scheme,
    })
}
