use chrono::Local;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use crate::charset::Charset;
use crate::errors::ConfigError;



#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub logs_dir: String,
    pub log_name: String,
    pub string_length: u8,
    pub charsets: Vec<Charset>,
    pub otp_length: i64,
    pub weights: HashMap<String, f64>,
}


impl Default for Config {
    fn default() -> Self {
        Self {
            logs_dir: "./logs".to_string(),
            log_name: "random_module".to_string(),
            string_length: 16,
            charsets: Vec::new(),
            otp_length: 6,
            weights: HashMap::new(),
        }
    }
}


impl Config {
    pub fn charset_strs(&self) -> Vec<&'static str> {
        self.charsets.iter().map(|set| set.as_str()).collect()
    }
}



/// Reads `path` as JSON. A missing file means defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config_data = match fs::read_to_string(path.as_ref()) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(target: "config", "{} not found, using defaults", path.as_ref().display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&config_data)?)
}


pub fn init_tracing(logs_dir: &str, log_name: &str) -> io::Result<()> {
    let date = Local::now().format("%d_%m_%Y").to_string();
    let log_dir = if logs_dir.trim().is_empty() {
        "./logs"
    } else {
        logs_dir
    };

    fs::create_dir_all(log_dir)?;

    let log_path = format!("{}/{}_{}.log", log_dir, log_name, date);
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(Mutex::new(log_file))
        .with_thread_names(true)
        .with_ansi(false)
        .init();

    Ok(())
}



#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("pijn_random_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = load_config(temp_path("missing")).unwrap();
        assert_eq!(config.logs_dir, "./logs");
        assert_eq!(config.string_length, 16);
        assert_eq!(config.otp_length, 6);
        assert!(config.charsets.is_empty());
        assert!(config.weights.is_empty());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "charsets": ["hex", "symbols"], "otp_length": 8, "weights": { "a": 1.5 } }"#).unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.charset_strs(), vec![crate::charset::HEX, crate::charset::SYMBOLS]);
        assert_eq!(config.otp_length, 8);
        assert_eq!(config.weights.get("a"), Some(&1.5));
        assert_eq!(config.log_name, "random_module");
    }

    #[test]
    fn unknown_charset_is_a_parse_error() {
        let path = temp_path("unknown_charset");
        fs::write(&path, r#"{ "charsets": ["emoji"] }"#).unwrap();

        let result = load_config(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
