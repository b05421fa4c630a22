use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use linkshort_core::DEFAULT_BACKEND;
use linkshort_engine::ApiSettings;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "linkshort.ron";

/// Shorten URLs and inspect click statistics from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "linkshort", version)]
pub struct Args {
    /// Path to the RON configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Backend base URL, overriding the configuration file.
    #[arg(long)]
    pub backend: Option<String>,

    /// Print the effective configuration as RON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend_url: String,
    pub connect_timeout_secs: u64,
    /// Off by default; the transport reports failures on its own.
    pub request_timeout_secs: Option<u64>,
    pub max_body_bytes: u64,
    pub log_level: String,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let api = ApiSettings::default();
        Self {
            backend_url: DEFAULT_BACKEND.to_string(),
            connect_timeout_secs: api.connect_timeout.as_secs(),
            request_timeout_secs: None,
            max_body_bytes: api.max_body_bytes,
            log_level: "info".to_string(),
            log_destination: LogDestination::File,
            log_file: PathBuf::from("./linkshort.log"),
        }
    }
}

impl ClientConfig {
    /// Reads `path`, falling back to defaults.
    ///
    /// A missing file is not an error. Any other failure returns a warning to be
    /// logged once logging is up.
    pub fn load(path: &Path) -> (Self, Option<String>) {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return (Self::default(), None);
            }
            Err(err) => {
                return (
                    Self::default(),
                    Some(format!("Failed to read config from {:?}: {}", path, err)),
                );
            }
        };

        match ron::from_str::<ClientConfig>(&content) {
            Ok(config) => (config, None),
            Err(err) => (
                Self::default(),
                Some(format!("Failed to parse config from {:?}: {}", path, err)),
            ),
        }
    }

    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(backend) = &args.backend {
            self.backend_url = backend.clone();
        }
        self.backend_url = self.backend_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn level(&self) -> LevelFilter {
        linkshort_logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.backend_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_body_bytes: self.max_body_bytes,
        }
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;
    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::{Args, ClientConfig};
    use crate::platform::logging::LogDestination;

    #[test]
    fn missing_file_yields_defaults_silently() {
        let temp = TempDir::new().unwrap();
        let (config, warning) = ClientConfig::load(&temp.path().join("absent.ron"));

        assert_eq!(config, ClientConfig::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("linkshort.ron");
        fs::write(
            &path,
            r#"(backend_url: "http://short.example:9000", request_timeout_secs: Some(5), log_destination: Both)"#,
        )
        .unwrap();

        let (config, warning) = ClientConfig::load(&path);
        assert!(warning.is_none());
        assert_eq!(config.backend_url, "http://short.example:9000");
        assert_eq!(config.log_destination, LogDestination::Both);

        let settings = config.api_settings();
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn invalid_file_warns_and_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("linkshort.ron");
        fs::write(&path, "(backend_url: 42").unwrap();

        let (config, warning) = ClientConfig::load(&path);
        assert_eq!(config, ClientConfig::default());
        assert!(warning.unwrap().contains("Failed to parse config"));
    }

    #[test]
    fn written_config_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("linkshort.ron");
        let config = ClientConfig {
            backend_url: "https://s.example".to_string(),
            log_level: "debug".to_string(),
            ..ClientConfig::default()
        };
        fs::write(&path, config.to_ron().unwrap()).unwrap();

        let (loaded, warning) = ClientConfig::load(&path);
        assert!(warning.is_none());
        assert_eq!(loaded, config);
        assert_eq!(loaded.level(), LevelFilter::Debug);
    }

    #[test]
    fn backend_flag_overrides_file_and_drops_trailing_slash() {
        let args = Args::parse_from(["linkshort", "--backend", "http://10.0.0.2:8080/"]);
        let config = ClientConfig::default().apply_args(&args);

        assert_eq!(config.backend_url, "http://10.0.0.2:8080");
        assert_eq!(args.config, PathBuf::from("linkshort.ron"));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = ClientConfig {
            log_level: "chatty".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.level(), LevelFilter::Info);
    }
}
