use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

const ENV_PREFIX: &str = "BOARD_";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        Self::from_env(&run_mode, std::env::vars())
    }

    pub fn from_env(
        run_mode: &str,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 33507)?
            .set_default("server.cors_origins", "*")?
            .set_default("database.url", "sqlite://data/comments.db")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name(&format!("config.{}", run_mode)).required(false));

        for (key, value) in collect_env_vars(vars) {
            builder = builder.set_override(key, value)?;
        }

        builder.build()?.try_deserialize()
    }
}

/// Maps `BOARD_SERVER__PORT=8080` to `server.port`. A bare `PORT` is honoured
/// too, but a prefixed setting wins.
fn collect_env_vars(vars: impl IntoIterator<Item = (String, String)>) -> Vec<(String, String)> {
    let mut legacy_port = None;
    let mut prefixed: HashMap<String, String> = HashMap::new();

    for (k, v) in vars {
        if k == "PORT" {
            legacy_port = Some(v);
        } else if let Some(rest) = k.strip_prefix(ENV_PREFIX) {
            prefixed.insert(rest.replace("__", ".").to_lowercase(), v);
        }
    }

    let mut out = Vec::new();
    if let Some(port) = legacy_port {
        if !prefixed.contains_key("server.port") {
            out.push(("server.port".to_string(), port));
        }
    }
    out.extend(prefixed);
    out
}
