use std::{env, path::Path};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub log_directory: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database_name: String,
    pub max_connections: u32,
    pub connect_timeout_seconds: u64,
}

impl DatabaseSettings {
    pub fn connection_string(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.database_name
        )
    }
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'development' or 'production'.",
                other
            )),
        }
    }
}

/// Variable names older deployments set in `configs/.env`, mapped to their keys here.
const LEGACY_ENV_KEYS: [(&str, &str); 6] = [
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.username"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.database_name"),
    ("HTTP_PORT", "application.port"),
];

pub fn get_settings() -> Result<Settings, config::ConfigError> {
    let base_path = env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    get_settings_from(&base_path.join("settings"))
}

/// Same as `get_settings`, reading the yaml layers from `settings_directory`.
pub fn get_settings_from(settings_directory: &Path) -> Result<Settings, config::ConfigError> {
    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let mut builder = config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8080)?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 5432)?
        .set_default("database.username", "postgres")?
        .set_default("database.password", "")?
        .set_default("database.database_name", "postgres")?
        .set_default("database.max_connections", 10)?
        .set_default("database.connect_timeout_seconds", 8)?
        .set_default("debug", false)?
        .set_default("log_directory", "./logs")?
        .add_source(config::File::from(settings_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(settings_directory.join(environment_filename)).required(false),
        )
        // E.g. 'APP_APPLICATION__PORT=5001' would set 'Settings.application.port'
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
    for (var, key) in LEGACY_ENV_KEYS {
        builder = builder.set_override_option(key, env::var(var).ok())?;
    }

    builder.build()?.try_deserialize::<Settings>()
}
