use axum::http::HeaderValue;
use core_config::{AppInfo, FromEnv, app_info, env_bool, env_or_default, server::ServerConfig};
use domain_products::DistinctPolicy;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5000;

/// Storefront origins allowed when `CORS_ALLOWED_ORIGIN` is unset
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,https://electric-museum.web.app,https://electric-museum.firebaseapp.com";

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub cors_origins: Vec<HeaderValue>,
    /// `CATALOG_DISTINCT_INCLUDE_MISSING`: report missing brand/category as `null`
    pub distinct_policy: DistinctPolicy,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env_with_port(DEFAULT_PORT)?;

        let raw_origins = env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_CORS_ORIGINS);
        let cors_origins = axum_helpers::parse_allowed_origins(&raw_origins)?;

        let distinct_policy =
            DistinctPolicy::from_include_missing(env_bool("CATALOG_DISTINCT_INCLUDE_MISSING", false)?);

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            cors_origins,
            distinct_policy,
        })
    }
}
