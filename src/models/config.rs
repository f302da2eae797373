use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Optional settings file, relative to the working directory.
const CONFIG_FILE: &str = "config/default.yaml";

/// Configuration options of the catalog service.
///
/// Defaults reproduce the historical behaviour (port 3000, `uploads/` in the
/// working directory). `config/default.yaml` and `APP_*` environment
/// variables may override them.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// TCP port of the HTTP server.
    pub port: u16,
    /// Directory product images are written to and served from.
    pub upload_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Build the configuration from defaults, the optional YAML file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::new(CONFIG_FILE, FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("address", DEFAULT_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("upload_dir", DEFAULT_UPLOAD_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_historical_values() {
        let config: ServerConfig = ServerConfig::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.upload_dir, "uploads");
    }

    #[test]
    fn yaml_overrides_defaults() {
        let config: ServerConfig = ServerConfig::builder()
            .unwrap()
            .add_source(File::from_str(
                "port: 8080\nupload_dir: /tmp/imagens\n",
                FileFormat::Yaml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.port, 8080);
        assert_eq!(config.upload_dir, "/tmp/imagens");
    }
}
