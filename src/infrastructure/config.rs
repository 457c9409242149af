/// Backend endpoint configuration.
///
/// The WASM bundle has no runtime environment, so host and port are baked
/// in at compile time (`BACKEND_HOST` / `BACKEND_PORT`), with defaults that
/// match a locally running backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    host: String,
    port: String,
}

impl BackendConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: &'static str = "5000";

    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self { host: host.into(), port: port.into() }
    }

    /// Resolve from the build-time environment
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("BACKEND_HOST").unwrap_or(Self::DEFAULT_HOST),
            option_env!("BACKEND_PORT").unwrap_or(Self::DEFAULT_PORT),
        )
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_joins_host_and_port() {
        let config = BackendConfig::new("orders.internal", "8080");
        assert_eq!(config.base_url(), "http://orders.internal:8080");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(BackendConfig::default().base_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn build_env_config_is_well_formed() {
        let url = BackendConfig::from_build_env().base_url();
        assert!(url.starts_with("http://"));
        assert!(url.rsplit(':').next().is_some());
    }
}
