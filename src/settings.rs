use config::{Config, ConfigError, Environment};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use serde_aux::field_attributes::{deserialize_bool_from_anything, deserialize_number_from_string};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:fiszki.db?mode=rwc";

/// Runtime settings, read from the environment (and `.env`) on top of defaults.
#[derive(Deserialize)]
pub struct Settings {
    #[serde(deserialize_with = "deserialize_secret")]
    pub database_url: SecretString,
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub db_max_connections: u32,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub seed_on_startup: bool,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000)?
            .set_default("db_max_connections", 5)?
            .set_default("seed_on_startup", true)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// connection strings may carry credentials, keep them out of Debug output
fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn settings_from(vars: &[(&str, &str)]) -> Settings {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_environment(Environment::default().source(Some(source))).unwrap()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let settings = settings_from(&[]);
        assert_eq!(settings.database_url.expose_secret(), DEFAULT_DATABASE_URL);
        assert_eq!(settings.bind_address(), "0.0.0.0:8000");
        assert_eq!(settings.db_max_connections, 5);
        assert!(settings.seed_on_startup);
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = settings_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "9090"),
            ("HOST", "127.0.0.1"),
            ("SEED_ON_STARTUP", "false"),
        ]);
        assert_eq!(settings.database_url.expose_secret(), "sqlite::memory:");
        assert_eq!(settings.bind_address(), "127.0.0.1:9090");
        assert!(!settings.seed_on_startup);
    }

    #[test]
    fn bad_port_is_rejected() {
        let source: config::Map<String, String> =
            [("PORT".to_string(), "not-a-port".to_string())].into_iter().collect();
        assert!(Settings::from_environment(Environment::default().source(Some(source))).is_err());
    }
}
