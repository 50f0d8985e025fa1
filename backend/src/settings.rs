//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `CATALOG_*` environment variables, CLI flags or a config
//! file, in the usual OrthoConfig precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_UPLOADS_PATH: &str = "./uploads";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Catalog server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    /// Directory holding uploaded pictures.
    pub uploads_path: Option<PathBuf>,
    /// PostgreSQL URL; without it the server runs over an empty catalog.
    pub database_url: Option<String>,
    /// Listen address, `host:port`.
    pub bind_addr: Option<String>,
}

/// Errors raised when interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
}

impl CatalogSettings {
    pub fn uploads_path(&self) -> PathBuf {
        self.uploads_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOADS_PATH))
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Parse the listen address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> CatalogSettings {
        CatalogSettings::load_from_iter([OsString::from("catalog")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("CATALOG_UPLOADS_PATH", None::<String>),
            ("CATALOG_DATABASE_URL", None::<String>),
            ("CATALOG_BIND_ADDR", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.uploads_path(), PathBuf::from(DEFAULT_UPLOADS_PATH));
        assert!(settings.database_url().is_none());
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid default")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CATALOG_UPLOADS_PATH", Some("/srv/catalog/img".to_owned())),
            (
                "CATALOG_DATABASE_URL",
                Some("postgres://catalog@localhost/catalog".to_owned()),
            ),
            ("CATALOG_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.uploads_path(), PathBuf::from("/srv/catalog/img"));
        assert_eq!(
            settings.database_url(),
            Some("postgres://catalog@localhost/catalog")
        );
        assert_eq!(
            settings.bind_addr().expect("override parses").port(),
            9090
        );
    }

    #[rstest]
    fn blank_database_url_means_none() {
        let _guard = lock_env([
            ("CATALOG_UPLOADS_PATH", None::<String>),
            ("CATALOG_DATABASE_URL", Some("   ".to_owned())),
            ("CATALOG_BIND_ADDR", None::<String>),
        ]);
        assert!(load_from_empty_args().database_url().is_none());
    }

    #[rstest]
    fn malformed_bind_addr_is_reported() {
        let _guard = lock_env([
            ("CATALOG_UPLOADS_PATH", None::<String>),
            ("CATALOG_DATABASE_URL", None::<String>),
            ("CATALOG_BIND_ADDR", Some("localhost".to_owned())),
        ]);
        let err = load_from_empty_args()
            .bind_addr()
            .expect_err("hostname without port is invalid");
        assert!(matches!(err, SettingsError::BindAddr { .. }));
    }
}
