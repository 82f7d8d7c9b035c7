use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

/// SMTP relay settings. The username doubles as the sender address.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    pub cors_origin: String,
    /// `None` when EMAIL_USER / EMAIL_PASS are not set
    pub smtp: Option<SmtpConfig>,
    /// Recipients the booking endpoint may mail; `None` accepts any
    pub allowed_recipients: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            frontend_dist: PathBuf::from(DEFAULT_FRONTEND_DIST),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            smtp: None,
            allowed_recipients: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment (after `.env`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 127.0.0.1:3000")?;

        let smtp = match (get("EMAIL_USER"), get("EMAIL_PASS")) {
            (Some(username), Some(password)) => {
                let port = match get("SMTP_PORT") {
                    Some(port) => port
                        .parse::<u16>()
                        .with_context(|| format!("SMTP_PORT '{}' is not a valid port", port))?,
                    None => DEFAULT_SMTP_PORT,
                };
                Some(SmtpConfig {
                    host: get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                    port,
                    username,
                    password,
                })
            }
            _ => None,
        };

        let allowed_recipients = get("ALLOWED_RECIPIENTS").map(|list| {
            list.split(',')
                .map(|address| address.trim().to_lowercase())
                .filter(|address| !address.is_empty())
                .collect::<Vec<_>>()
        });

        Ok(Self {
            bind_addr,
            frontend_dist: get("FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIST)),
            cors_origin: get("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            smtp,
            allowed_recipients,
        })
    }

    pub fn recipient_allowed(&self, recipient: &str) -> bool {
        match &self.allowed_recipients {
            Some(allowed) => allowed.iter().any(|a| a.eq_ignore_ascii_case(recipient.trim())),
            None => true,
        }
    }
}
