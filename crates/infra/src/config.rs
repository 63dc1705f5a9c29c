//! Configuration loading and representation.
//!
//! Settings come from environment variables and are read once at startup.
//! Values that fail to parse fall back to their default with a warning.

use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepotConfig {
    /// `BIND_ADDR`: listen address of the HTTP server.
    pub bind_addr: String,
    /// `USE_PERSISTENT_STORES`: Postgres instead of in-memory stores.
    pub use_persistent_stores: bool,
    /// `DATABASE_URL`: required when `use_persistent_stores` is set.
    pub database_url: Option<String>,
    /// `DATABASE_MAX_CONNECTIONS`: pool size.
    pub database_max_connections: u32,
    /// `SEARCH_ENABLED`: whether listing filters narrow results.
    pub search_enabled: bool,
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            use_persistent_stores: false,
            database_url: None,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            search_enabled: true,
        }
    }
}

impl DepotConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.bind_addr),
            use_persistent_stores: parse_or(&lookup, "USE_PERSISTENT_STORES", defaults.use_persistent_stores),
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            ),
            search_enabled: parse_or(&lookup, "SEARCH_ENABLED", defaults.search_enabled),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + core::fmt::Debug,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default = ?default, "unparseable setting; using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> DepotConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DepotConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(from_pairs(&[]), DepotConfig::default());
    }

    #[test]
    fn values_are_read_from_environment() {
        let cfg = from_pairs(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("USE_PERSISTENT_STORES", "true"),
            ("DATABASE_URL", "postgres://depot@localhost/depot"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("SEARCH_ENABLED", "false"),
        ]);
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert!(cfg.use_persistent_stores);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://depot@localhost/depot"));
        assert_eq!(cfg.database_max_connections, 12);
        assert!(!cfg.search_enabled);
    }

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let cfg = from_pairs(&[
            ("USE_PERSISTENT_STORES", "yes please"),
            ("DATABASE_MAX_CONNECTIONS", "-4"),
        ]);
        assert!(!cfg.use_persistent_stores);
        assert_eq!(cfg.database_max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}
