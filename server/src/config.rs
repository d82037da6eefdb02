use std::env;

use log::warn;

const DEFAULT_ENABLED_VAR: &str = "KAVORITES_DEFAULT_ENABLED";
const HOST_VAR: &str = "HOST";
const PORT_VAR: &str = "PORT";

/// Runtime configuration of the server, sourced from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Whether ingresses without the enabled annotation are shown.
    pub default_enabled: bool,
    /// Address the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            default_enabled: true,
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables, keeping the defaults for
    /// anything absent. An unparseable port is logged and ignored.
    pub fn from_env() -> Self {
        let mut config: ServerConfig = ServerConfig::default();
        if let Ok(value) = env::var(DEFAULT_ENABLED_VAR) {
            config.default_enabled = parse_toggle(&value);
        }
        if let Ok(value) = env::var(HOST_VAR) {
            config.host = value;
        }
        if let Ok(value) = env::var(PORT_VAR) {
            match value.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(parse_error) => {
                    warn!(
                        "Ignoring unparseable {} value '{}': {}",
                        PORT_VAR, value, parse_error
                    );
                }
            }
        }
        return config;
    }
}

/// Anything but a case-insensitive `true` counts as `false`.
fn parse_toggle(value: &str) -> bool {
    return value.to_lowercase() == "true";
}

#[cfg(test)]
mod tests {
    use super::{parse_toggle, ServerConfig};

    #[test]
    fn test_default_config() {
        let config: ServerConfig = ServerConfig::default();
        assert!(config.default_enabled);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_toggle_parsing() {
        assert!(parse_toggle("true"));
        assert!(parse_toggle("True"));
        assert!(parse_toggle("TRUE"));
        assert!(!parse_toggle("false"));
        assert!(!parse_toggle("1"));
        assert!(!parse_toggle(""));
    }
}
