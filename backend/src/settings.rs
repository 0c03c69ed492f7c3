//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI arguments, `ROSTER_*` environment variables and
//! configuration files, in that order of precedence.

use std::net::{Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime configuration for the `roster` server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// PostgreSQL URL. Without it the server keeps records in memory.
    pub database_url: Option<String>,
    /// Listen address.
    pub bind_addr: Option<SocketAddr>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Leave the schema untouched at startup instead of applying the
    /// embedded migrations.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Configured listen address, `0.0.0.0:8080` by default.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or(SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Configured pool size, 10 by default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Whether migrations run at startup; on unless skipped.
    pub const fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 4] = [
        "ROSTER_DATABASE_URL",
        "ROSTER_BIND_ADDR",
        "ROSTER_POOL_MAX_SIZE",
        "ROSTER_SKIP_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("roster")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.pool_max_size(), 10);
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn migrations_run_unless_explicitly_skipped() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert!(!settings.skip_migrations);
        assert!(settings.run_migrations());

        let skipped = ServerSettings::load_from_iter([
            OsString::from("roster"),
            OsString::from("--skip-migrations"),
        ])
        .expect("config should load");
        assert!(skipped.skip_migrations);
        assert!(!skipped.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ROSTER_DATABASE_URL", Some("postgres://db/roster".to_owned())),
            ("ROSTER_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("ROSTER_POOL_MAX_SIZE", Some("4".to_owned())),
            ("ROSTER_SKIP_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url(), Some("postgres://db/roster"));
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000".parse().expect("addr"));
        assert_eq!(settings.pool_max_size(), 4);
        assert!(!settings.run_migrations());
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([
            ("ROSTER_DATABASE_URL", Some("  ".to_owned())),
            ("ROSTER_BIND_ADDR", None),
            ("ROSTER_POOL_MAX_SIZE", None),
            ("ROSTER_SKIP_MIGRATIONS", None),
        ]);

        assert_eq!(load_from_empty_args().database_url(), None);
    }
}
