//! Process-wide API host.
//!
//! Server builds record the configured host once at startup. Web builds
//! read it from `SCC_API_HOST` at compile time. An empty host makes every
//! request same-origin.

use std::sync::OnceLock;

use crate::endpoints::Endpoints;

static API_HOST: OnceLock<String> = OnceLock::new();

/// Host baked into the binary, used when nothing was recorded at startup
pub const BUILD_API_HOST: &str = match option_env!("SCC_API_HOST") {
    Some(host) => host,
    None => "",
};

/// Record the API host. Only the first call has an effect; returns whether
/// this call set it.
pub fn init_api_host(host: impl Into<String>) -> bool {
    API_HOST.set(host.into()).is_ok()
}

pub fn api_host() -> &'static str {
    API_HOST.get().map(String::as_str).unwrap_or(BUILD_API_HOST)
}

/// Resolver for the process-wide host
pub fn endpoints() -> Endpoints {
    Endpoints::from_host(api_host())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_is_fixed_after_first_init() {
        init_api_host("https://first.example");
        assert!(!init_api_host("https://second.example"));
        assert_eq!(api_host(), "https://first.example");
        assert_eq!(endpoints().radios(), "https://first.example/api/v1/radios");
    }
}
