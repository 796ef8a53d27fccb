/// Configuration management for the web server
///
/// Configuration comes from environment variables, with a `.env` file loaded
/// first when present.
///
/// # Environment Variables
///
/// - `HOST`: Host to bind to (default: 0.0.0.0)
/// - `PORT`: Port to bind to (default: 3000)
/// - `DATABASE_URL`: PostgreSQL connection string (unset: in-memory store)
/// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 10)
/// - `OMDB_API_KEY`: OMDb API key (required)
/// - `OMDB_BASE_URL`: OMDb endpoint (default: https://www.omdbapi.com)
/// - `PASSWORD_SCHEME`: `bcrypt` or `argon2` (default: bcrypt)
/// - `BCRYPT_COST`: bcrypt cost factor, 4 to 31 (default: 10)
/// - `STATIC_DIR`: Directory served for static assets (default: public)
/// - `PRODUCTION`: Enables HSTS when `true` (default: false)
/// - `RUST_LOG`: Log filter
///
/// # Example
///
/// ```no_run
/// use moviedash_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use anyhow::Context;
use moviedash_shared::{
    auth::password::{PasswordConfig, PasswordScheme, MAX_BCRYPT_COST, MIN_BCRYPT_COST},
    db::pool::DatabaseConfig,
    omdb::{OmdbConfig, DEFAULT_BASE_URL},
};
use std::{env, path::PathBuf};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// PostgreSQL settings; None selects the in-memory store
    pub database: Option<DatabaseConfig>,

    /// OMDb client settings
    pub omdb: OmdbConfig,

    /// Parameters for newly hashed passwords
    pub password: PasswordConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Directory of static assets served as the router fallback
    pub static_dir: PathBuf,

    /// Production mode (HTTPS-only headers)
    pub production: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("public"),
            production: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `OMDB_API_KEY` is missing
    /// - A numeric or boolean variable does not parse
    /// - `PASSWORD_SCHEME` names an unknown scheme
    /// - `BCRYPT_COST` is outside 4..=31
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let defaults = ServerConfig::default();

        let host = get("HOST").unwrap_or(defaults.host);
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            None => defaults.port,
        };
        let static_dir = get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir);
        let production = match get("PRODUCTION") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .with_context(|| format!("PRODUCTION must be true or false, got {:?}", raw))?,
            None => defaults.production,
        };

        let database = match get("DATABASE_URL") {
            Some(url) => {
                let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw.trim().parse::<u32>().with_context(|| {
                        format!("DATABASE_MAX_CONNECTIONS must be a number, got {:?}", raw)
                    })?,
                    None => DatabaseConfig::default().max_connections,
                };
                Some(DatabaseConfig {
                    url,
                    max_connections,
                    ..Default::default()
                })
            }
            None => None,
        };

        let api_key = get("OMDB_API_KEY")
            .ok_or_else(|| anyhow::anyhow!("OMDB_API_KEY environment variable is required"))?;
        let base_url = get("OMDB_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let scheme = match get("PASSWORD_SCHEME") {
            Some(raw) => raw.parse::<PasswordScheme>().map_err(anyhow::Error::msg)?,
            None => PasswordScheme::default(),
        };
        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("BCRYPT_COST must be a number, got {:?}", raw))?,
            None => PasswordConfig::default().bcrypt_cost,
        };
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            anyhow::bail!(
                "BCRYPT_COST must be between {} and {}, got {}",
                MIN_BCRYPT_COST,
                MAX_BCRYPT_COST,
                bcrypt_cost
            );
        }

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                static_dir,
                production,
            },
            database,
            omdb: OmdbConfig::new(api_key).with_base_url(base_url),
            password: PasswordConfig {
                scheme,
                bcrypt_cost,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
