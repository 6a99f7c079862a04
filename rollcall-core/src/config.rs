use std::env;
use std::path::PathBuf;

/// Written next to the binary when EXPORT_PATH is not set.
pub const DEFAULT_EXPORT_PATH: &str = "member_export.csv";

const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:7897";

/// Explicit runtime configuration, resolved once at startup from the
/// environment. The proxy is a plain value handed to the HTTP client
/// constructor, not a patched-in client subclass.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub token: String,
    /// Guild used for command registration and the roster snapshot; the
    /// first gateway-reported guild is used when unset.
    pub guild_id: Option<u64>,
    pub proxy_url: Option<String>,
    pub export_path: PathBuf,
}

impl BotConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let token =
            env::var("DISCORD_TOKEN").map_err(|_| anyhow::anyhow!("DISCORD_TOKEN is not set"))?;

        let guild_id = match env::var("DISCORD_GUILD_ID") {
            Ok(raw) => Some(raw.trim().parse::<u64>()?),
            Err(_) => None,
        };

        let proxy_url = env_bool("PROXY_ENABLED", false)
            .then(|| env::var("PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_owned()));

        let export_path = env::var("EXPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXPORT_PATH));

        Ok(Self {
            token,
            guild_id,
            proxy_url,
            export_path,
        })
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_bool(&value),
        Err(_) => default,
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
