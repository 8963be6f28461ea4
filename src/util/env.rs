//! Hosting-environment detection.
//!
//! The synthetic-identity fallback is only allowed on hosts recognized as
//! local development, so recognition is an exact membership test rather
//! than anything heuristic.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// Hostnames treated as local development. Ports are ignored; the local
/// gateway emulator serves on arbitrary ports.
const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Whether `hostname` is a recognized local-development host.
pub fn is_local_host(hostname: &str) -> bool {
    LOCAL_HOSTS.contains(&hostname)
}

/// Whether the page is being served from a local-development host.
///
/// Only meaningful in the browser; every other context answers `false`.
pub fn is_local_development() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .map_or(false, |host| is_local_host(&host))
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
