//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SECURITY_LEVEL: &str = "MAXIMUM";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub security_level: String,
    pub identity: Option<String>,
    pub auto_unlock: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, security_level: DEFAULT_SECURITY_LEVEL.to_owned(), identity: None, auto_unlock: true }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `IDENTRA_SECURITY_LEVEL`: default `MAXIMUM`
    /// - `IDENTRA_IDENTITY`: active identity label, unset by default
    /// - `IDENTRA_AUTO_UNLOCK`: `true` (default) or `false`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let security_level = std::env::var("IDENTRA_SECURITY_LEVEL")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SECURITY_LEVEL.to_owned());
        let identity = std::env::var("IDENTRA_IDENTITY")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        let auto_unlock = parse_bool("IDENTRA_AUTO_UNLOCK", std::env::var("IDENTRA_AUTO_UNLOCK").ok().as_deref())?;

        Ok(Self { port, security_level, identity, auto_unlock })
    }
}

fn parse_bool(var: &'static str, raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(true),
        Some("1" | "true" | "yes") => Ok(true),
        Some("0" | "false" | "no") => Ok(false),
        Some(other) => Err(ConfigError::Invalid { var, value: other.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
