use serde::Deserialize;
use anyhow::Result;
use tracing::debug;

pub const DEFAULT_REGION: &str = "eastus";

const KEY_VAR: &str = "TRANSLATOR_KEY";
const ENDPOINT_VAR: &str = "TRANSLATOR_ENDPOINT";
const REGION_VAR: &str = "TRANSLATOR_REGION";

/// Server settings, layered from defaults, an optional file and `RELAY_*` env vars.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on the outbound provider call. Unset means the client default (none).
    #[serde(default)]
    pub provider_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7071
}

impl RelayConfig {
    /// Load settings. `path` is a file stem or full file name; a missing file is not an error.
    pub fn load(path: &str) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(path).required(false))
            .add_source(::config::Environment::with_prefix("RELAY"))
            .build()?;

        let config: RelayConfig = settings.try_deserialize()?;
        debug!("Relay settings resolved from {}: {:?}", path, config);
        Ok(config)
    }

    /// Bind the listening socket. `host` may be a hostname as well as an IP literal.
    pub async fn bind(&self) -> std::io::Result<tokio::net::TcpListener> {
        tokio::net::TcpListener::bind((self.host.as_str(), self.port)).await
    }
}

/// Credentials for the translation provider.
#[derive(Clone, PartialEq, Eq)]
pub struct TranslatorCredentials {
    pub key: String,
    pub endpoint: String,
    pub region: String,
}

// Hand-written so the subscription key never ends up in logs.
impl std::fmt::Debug for TranslatorCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorCredentials")
            .field("key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .finish()
    }
}

impl TranslatorCredentials {
    /// Resolve credentials through `lookup`. Returns `None` when the key or
    /// endpoint is absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let key = non_empty(KEY_VAR)?;
        let endpoint = non_empty(ENDPOINT_VAR)?;
        let region = non_empty(REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string());

        Some(Self { key, endpoint, region })
    }

    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

/// Where the handler gets credentials from on each request.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Read the process environment every time.
    Environment,
    /// A value fixed at construction; `None` behaves like an unconfigured environment.
    Fixed(Option<TranslatorCredentials>),
}

impl CredentialSource {
    pub fn load(&self) -> Option<TranslatorCredentials> {
        match self {
            CredentialSource::Environment => TranslatorCredentials::from_env(),
            CredentialSource::Fixed(credentials) => credentials.clone(),
        }
    }
}
