use std::env;

use actix_web::cookie::Key;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TEMPLATES_GLOB: &str = "templates/**/*";

/// Runtime settings for the web server, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Location of the row store. Credentials, if any, are part of the URL.
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Key material for signing flash message cookies.
    pub secret: Option<String>,
    /// Glob handed to tera when loading templates.
    pub templates_glob: String,
    /// Whether embedded migrations are applied at startup.
    pub run_migrations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            secret: None,
            templates_glob: DEFAULT_TEMPLATES_GLOB.to_string(),
            run_migrations: true,
        }
    }
}

impl ServerConfig {
    /// Load the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("Invalid PORT value `{value}`, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let run_migrations = lookup("RUN_MIGRATIONS")
            .map(|value| !matches!(value.trim().to_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(defaults.run_migrations);

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
            secret: lookup("SECRET_KEY").filter(|value| !value.is_empty()),
            templates_glob: lookup("TEMPLATES_DIR").unwrap_or(defaults.templates_glob),
            run_migrations,
        }
    }

    /// Cookie signing key. A random key is generated when no usable secret is set.
    pub fn cookie_key(&self) -> Key {
        match self.secret.as_deref().map(|secret| Key::try_from(secret.as_bytes())) {
            Some(Ok(key)) => key,
            Some(Err(err)) => {
                log::warn!("SECRET_KEY is unusable ({err}), generating a random key");
                Key::generate()
            }
            None => Key::generate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn from_lookup_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "orders.db"),
            ("ADDRESS", "0.0.0.0"),
            ("PORT", "9000"),
            ("SECRET_KEY", "s3cr3t"),
            ("TEMPLATES_DIR", "views/**/*"),
            ("RUN_MIGRATIONS", "false"),
        ]));

        assert_eq!(config.database_url, "orders.db");
        assert_eq!(config.address, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.secret.as_deref(), Some("s3cr3t"));
        assert_eq!(config.templates_glob, "views/**/*");
        assert!(!config.run_migrations);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn empty_secret_is_ignored() {
        let config = ServerConfig::from_lookup(lookup_from(&[("SECRET_KEY", "")]));

        assert!(config.secret.is_none());
    }
}
