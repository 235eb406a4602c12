// src/config.rs
//
// All environment access happens here, once, at startup. Workflows
// receive the typed sub-config they need by value and never touch the
// environment at request time.
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.parse::<T>()
        .map_err(|_| ConfigError::Invalid(key, raw))
}

/// JWT lifetimes are configured in the units the API reports them in:
/// hours for access tokens, days for refresh tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub access_token_lifetime_hours: i64,
    pub refresh_token_lifetime_days: i64,
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;
        // HS256 needs a key of at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid(
                "JWT_SECRET",
                "must be at least 32 characters".to_string(),
            ));
        }

        let access_token_lifetime_hours: i64 = parse(
            "ACCESS_TOKEN_LIFETIME_HOURS",
            optional("ACCESS_TOKEN_LIFETIME_HOURS").unwrap_or_else(|| "5".to_string()),
        )?;
        let refresh_token_lifetime_days: i64 = parse(
            "REFRESH_TOKEN_LIFETIME_DAYS",
            optional("REFRESH_TOKEN_LIFETIME_DAYS").unwrap_or_else(|| "7".to_string()),
        )?;

        if access_token_lifetime_hours <= 0 {
            return Err(ConfigError::Invalid(
                "ACCESS_TOKEN_LIFETIME_HOURS",
                access_token_lifetime_hours.to_string(),
            ));
        }
        if refresh_token_lifetime_days <= 0 {
            return Err(ConfigError::Invalid(
                "REFRESH_TOKEN_LIFETIME_DAYS",
                refresh_token_lifetime_days.to_string(),
            ));
        }

        Ok(Self {
            secret_key,
            access_token_lifetime_hours,
            refresh_token_lifetime_days,
        })
    }
}

#[derive(Debug, Clone)]
pub enum SmtpConfig {
    /// Authenticated relay for real deployments.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Unauthenticated local relay (Mailpit and friends).
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub from_address: String,
    pub smtp: SmtpConfig,
}

impl EmailConfig {
    fn from_env(rust_env: &str) -> Result<Self, ConfigError> {
        let from_address = required("EMAIL_FROM")?;

        let smtp = if rust_env == "test" || rust_env == "development" {
            let host = optional("SMTP_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = parse(
                "SMTP_PORT",
                optional("SMTP_PORT").unwrap_or_else(|| "1025".to_string()),
            )?;
            SmtpConfig::Local { host, port }
        } else {
            SmtpConfig::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        Ok(Self { from_address, smtp })
    }
}

/// The `{"web": {...}}` client blob as issued by Google's console.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleClientBlob {
    pub web: GoogleWebClient,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleWebClient {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
}

#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub redirect_uri: String,
}

impl GoogleOAuthConfig {
    fn from_env(site_base_url: &str) -> Result<Self, ConfigError> {
        let raw = required("GOOGLE_OAUTH_CLIENT_JSON")?;
        let blob: GoogleClientBlob = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::Invalid("GOOGLE_OAUTH_CLIENT_JSON", e.to_string()))?;

        Ok(Self {
            client_id: blob.web.client_id,
            client_secret: blob.web.client_secret,
            auth_uri: blob.web.auth_uri,
            token_uri: blob.web.token_uri,
            redirect_uri: format!("{}/sso/google/callback", site_base_url.trim_end_matches('/')),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub bucket_name: String,
    pub folder: String,
    pub max_upload_size_bytes: u64,
}

impl MediaConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let bucket_name = required("GCS_BUCKET_NAME")?;
        let folder = optional("MEDIA_FOLDER").unwrap_or_else(|| "talentlink".to_string());
        let max_mb: u64 = parse(
            "MAX_UPLOAD_SIZE_MB",
            optional("MAX_UPLOAD_SIZE_MB").unwrap_or_else(|| "5".to_string()),
        )?;

        Ok(Self {
            bucket_name,
            folder,
            max_upload_size_bytes: max_mb * 1024 * 1024,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_env: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub site_base_url: String,
    pub jwt: JwtConfig,
    pub email: EmailConfig,
    pub google_oauth: GoogleOAuthConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` first, falling back to `.env`, then reads
    /// everything in one pass.
    pub fn load() -> Result<Self, ConfigError> {
        let rust_env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let site_base_url = required("SITE_BASE_URL")?;

        Ok(Self {
            host: required("HOST")?,
            port: parse("PORT", required("PORT")?)?,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            jwt: JwtConfig::from_env()?,
            email: EmailConfig::from_env(&rust_env)?,
            google_oauth: GoogleOAuthConfig::from_env(&site_base_url)?,
            media: MediaConfig::from_env()?,
            site_base_url,
            rust_env,
        })
    }
}
