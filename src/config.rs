use anyhow::Context;
use std::env;
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "https://api.truckyapp.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub service_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_service_url(service_url: &str) -> Self {
        Self {
            service_url: service_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Reads `TRUCKY_API_URL` and `TRUCKY_API_TIMEOUT_SECS`, loading a `.env` file first if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_url = lookup("TRUCKY_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        let timeout = match lookup("TRUCKY_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("TRUCKY_API_TIMEOUT_SECS is not a number: {}", raw))?;
                // 0 means no timeout, same as leaving the variable unset.
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            service_url: service_url.trim().trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.service_url, "https://api.truckyapp.com");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("TRUCKY_API_URL", "http://localhost:8080/"),
            ("TRUCKY_API_TIMEOUT_SECS", "7"),
        ]))
        .unwrap();
        assert_eq!(config.service_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(7)));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = ClientConfig::from_lookup(lookup_from(&[("TRUCKY_API_TIMEOUT_SECS", "0")]))
            .unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup_from(&[("TRUCKY_API_URL", "  ")])).unwrap();
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup_from(&[("TRUCKY_API_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("TRUCKY_API_TIMEOUT_SECS"));
    }

    #[test]
    fn with_service_url_trims_trailing_slash() {
        let config = ClientConfig::with_service_url("http://127.0.0.1:9000//");
        assert_eq!(config.service_url, "http://127.0.0.1:9000");
    }
}
