// Configuration: where the secrets file lives, which endpoint to talk to and
// how the Google API key is resolved.
//
// The key is looked up in a TOML secrets file first. If it is not there the
// caller supplies a fallback (the binary uses a masked prompt). An empty
// result halts the application.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the secret holding the Google AI Studio key.
pub const API_KEY_SECRET: &str = "GOOGLE_API_KEY";

/// Default location of the secrets file, relative to the working directory.
pub const DEFAULT_SECRETS_PATH: &str = ".crystalia/secrets.toml";

/// Image shown next to the title. Must exist in the working directory.
pub const DEFAULT_LOGO_PATH: &str = "logo-ief.png";

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// The API key. Held in memory for the whole session and never written
/// anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty (or whitespace-only) key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Credential(key))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Key/value secrets read from a TOML file. Only string values are kept.
#[derive(Debug, Default, Clone)]
pub struct SecretStore {
    values: HashMap<String, String>,
}

impl SecretStore {
    /// Parse a secrets file such as:
    ///
    /// ```toml
    /// GOOGLE_API_KEY = "your-key"
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read secrets file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid secrets file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let table: toml::Table = raw.parse()?;
        let values = table
            .into_iter()
            .filter_map(|(k, v)| match v {
                toml::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect();
        Ok(SecretStore { values })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Runtime settings. Built once at startup from the environment, mirroring
/// how the HTTP client is configured.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub secrets_path: PathBuf,
    pub logo_path: PathBuf,
}

impl Settings {
    /// Read `GEMINI_API_BASE_URL`, `CRYSTALIA_SECRETS` and `CRYSTALIA_LOGO`,
    /// falling back to the defaults above.
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("GEMINI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
        let secrets_path = std::env::var_os("CRYSTALIA_SECRETS")
            .map(PathBuf::from)
            .unwrap_or_else(default_secrets_path);
        let logo_path = std::env::var_os("CRYSTALIA_LOGO")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO_PATH));
        Settings {
            api_base_url,
            secrets_path,
            logo_path,
        }
    }
}

/// `./.crystalia/secrets.toml` if it exists, else the per-user config dir.
fn default_secrets_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_SECRETS_PATH);
    if local.exists() {
        return local;
    }
    match dirs::config_dir() {
        Some(dir) => {
            let user = dir.join("crystalia").join("secrets.toml");
            if user.exists() {
                user
            } else {
                local
            }
        }
        None => local,
    }
}

/// Where the key came from, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    SecretsFile,
    Prompt,
}

/// Outcome of credential resolution.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Ready(Credential, CredentialSource),
    /// No key was supplied. The application must stop.
    Halt,
}

/// Resolve the API key: secrets file first, then `ask`. `ask` is only called
/// when the store has no `GOOGLE_API_KEY` entry at all. A key that is present
/// but empty, or an empty answer, yields `Halt`.
pub fn resolve_credential<F>(store: Option<&SecretStore>, ask: F) -> Result<Resolution>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(stored) = store.and_then(|s| s.get(API_KEY_SECRET)) {
        return Ok(match Credential::new(stored) {
            Some(cred) => {
                tracing::debug!("API key loaded from secrets file");
                Resolution::Ready(cred, CredentialSource::SecretsFile)
            }
            None => {
                tracing::info!("API key in secrets file is empty, halting");
                Resolution::Halt
            }
        });
    }

    let typed = ask()?;
    match Credential::new(typed) {
        Some(cred) => {
            tracing::debug!("API key entered interactively");
            Ok(Resolution::Ready(cred, CredentialSource::Prompt))
        }
        None => {
            tracing::info!("no API key supplied, halting");
            Ok(Resolution::Halt)
        }
    }
}
