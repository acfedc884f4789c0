use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Careguide";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default chat-completions model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default bind address for the relay server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Environment-driven settings for the relay server.
///
/// Absent credentials do not fail startup; the affected endpoints
/// degrade (see the error policy in `api`).
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub openai_api_key: Option<String>,
    pub places_api_key: Option<String>,
    pub model: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            bind_addr: parse_bind_addr(std::env::var("CAREGUIDE_BIND").ok().as_deref()),
            openai_api_key: non_empty(std::env::var("OPENAI_API_KEY").ok()),
            places_api_key: non_empty(std::env::var("GOOGLE_MAPS_API_KEY").ok()),
            model: non_empty(std::env::var("CAREGUIDE_MODEL").ok())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

fn parse_bind_addr(value: Option<&str>) -> SocketAddr {
    let raw = value.unwrap_or(DEFAULT_BIND_ADDR);
    match raw.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!(raw, error = %e, "invalid bind address, using default");
            DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address is valid")
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_parses_explicit_value() {
        let addr = parse_bind_addr(Some("127.0.0.1:9000"));
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn bind_addr_falls_back_on_garbage() {
        let addr = parse_bind_addr(Some("not an address"));
        assert_eq!(addr, DEFAULT_BIND_ADDR.parse().unwrap());
    }

    #[test]
    fn bind_addr_defaults_when_unset() {
        assert_eq!(parse_bind_addr(None), DEFAULT_BIND_ADDR.parse().unwrap());
    }

    #[test]
    fn empty_credentials_are_treated_as_absent() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some("key".to_string())), Some("key".to_string()));
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
