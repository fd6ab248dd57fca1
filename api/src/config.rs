/// Connection settings for the remote backend.
///
/// Resolution order: process environment (`LOCALBOOK_API_URL`,
/// `LOCALBOOK_API_KEY`), then values baked in at compile time via the same
/// variables, then a localhost development default. The wasm shells cannot read
/// a process environment, so they rely on the compile-time values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Self {
        let url = std::env::var("LOCALBOOK_API_URL")
            .ok()
            .or_else(|| option_env!("LOCALBOOK_API_URL").map(String::from))
            .unwrap_or_else(|| "http://localhost:54321".to_string());
        let key = std::env::var("LOCALBOOK_API_KEY")
            .ok()
            .or_else(|| option_env!("LOCALBOOK_API_KEY").map(String::from))
            .unwrap_or_default();
        Self::new(url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = GatewayConfig::new("https://backend.example.com/", "key");
        assert_eq!(config.base_url, "https://backend.example.com");
    }
}
