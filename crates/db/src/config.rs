use std::fmt;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// Default PostgreSQL port when assembling options from parts.
const DEFAULT_DB_PORT: u16 = 5432;

/// Default pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Default time to wait for a free pooled connection.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Error raised while reading catalog configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set (or provide DATABASE_URL)")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which catalog schema the process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogVariant {
    /// Products with info, child variants and linked properties.
    #[default]
    Composite,
    /// Frame moldings grouped by color.
    FrameMolding,
}

impl FromStr for CatalogVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "composite" | "product" => Ok(Self::Composite),
            "frame_molding" | "frame-molding" | "molding" => Ok(Self::FrameMolding),
            other => Err(format!(
                "unknown catalog variant '{other}', expected 'composite' or 'frame_molding'"
            )),
        }
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Composite => "composite",
            Self::FrameMolding => "frame_molding",
        })
    }
}

/// Database and variant configuration.
///
/// Not `Debug`: the connect options carry the password.
#[derive(Clone)]
pub struct CatalogConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub variant: CatalogVariant,
}

impl CatalogConfig {
    /// Load configuration from process environment variables.
    ///
    /// | Env Var                   | Default        |
    /// |---------------------------|----------------|
    /// | `DATABASE_URL`            | (from parts)   |
    /// | `HOST`                    | required*      |
    /// | `DB_PORT`                 | `5432`         |
    /// | `DB_NAME`                 | required*      |
    /// | `DB_USER` / `USER`        | required*      |
    /// | `DB_PASSWORD` / `PASSWORD`| none           |
    /// | `DB_MAX_CONNECTIONS`      | `20`           |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`           |
    /// | `CATALOG_VARIANT`         | `composite`    |
    ///
    /// \* only when `DATABASE_URL` is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let connect_options = match get("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url).map_err(|e| ConfigError::Invalid {
                var: "DATABASE_URL",
                value: redact_url(&url),
                reason: e.to_string(),
            })?,
            None => {
                let host = get("HOST").ok_or(ConfigError::Missing("HOST"))?;
                let database = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
                let user = get("DB_USER")
                    .or_else(|| get("USER"))
                    .ok_or(ConfigError::Missing("DB_USER"))?;
                let port = parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?;

                let mut options = PgConnectOptions::new()
                    .host(&host)
                    .port(port)
                    .database(&database)
                    .username(&user);
                if let Some(password) = get("DB_PASSWORD").or_else(|| get("PASSWORD")) {
                    options = options.password(&password);
                }
                options
            }
        };

        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let acquire_timeout_secs = parse_or(
            "DB_ACQUIRE_TIMEOUT_SECS",
            get("DB_ACQUIRE_TIMEOUT_SECS"),
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        let variant = match get("CATALOG_VARIANT") {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                var: "CATALOG_VARIANT",
                value: raw,
                reason,
            })?,
            None => CatalogVariant::default(),
        };

        Ok(Self {
            connect_options,
            max_connections,
            acquire_timeout_secs,
            variant,
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

/// Strip the password from a connection URL before it reaches an error message.
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let creds = &url[scheme_end + 3..at];
            match creds.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &creds[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}
