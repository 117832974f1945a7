use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_NAME: &str = "Virtual Artist Tablet";
pub const DEFAULT_SCREEN_WIDTH: i32 = 1920;
pub const DEFAULT_SCREEN_HEIGHT: i32 = 1080;
pub const DEFAULT_SETTLE_MS: u64 = 1000;

// pid.codes open-source test VID/PID.
const DEFAULT_VENDOR: u16 = 0x1209;
const DEFAULT_PRODUCT: u16 = 0x0001;
const DEFAULT_VERSION: u16 = 1;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub screen_width: Option<i32>,
    pub screen_height: Option<i32>,
    #[serde(default = "default_vendor")]
    pub vendor: u16,
    #[serde(default = "default_product")]
    pub product: u16,
    #[serde(default = "default_version")]
    pub version: u16,
    pub settle_ms: Option<u64>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            screen_width: None,
            screen_height: None,
            vendor: DEFAULT_VENDOR,
            product: DEFAULT_PRODUCT,
            version: DEFAULT_VERSION,
            settle_ms: None,
        }
    }
}

fn default_name() -> String {
    DEFAULT_NAME.into()
}

fn default_vendor() -> u16 {
    DEFAULT_VENDOR
}

fn default_product() -> u16 {
    DEFAULT_PRODUCT
}

fn default_version() -> u16 {
    DEFAULT_VERSION
}

pub fn parse(content: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(content)
}

pub fn load_from_path(path: &Path) -> Option<FileConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };
    match parse(&content) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

pub fn load_from_default_paths() -> Option<FileConfig> {
    for path in default_config_paths() {
        if path.exists() {
            if let Some(config) = load_from_path(&path) {
                return Some(config);
            }
        }
    }
    None
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("virtual-pen.toml")];

    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config").join("virtual-pen.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.vendor, 0x1209);
        assert_eq!(config.screen_width, None);
        assert_eq!(config.settle_ms, None);
    }

    #[test]
    fn full_file() {
        let config = parse(
            r#"
            name = "Studio Pen"
            screen_width = 3840
            screen_height = 2160
            vendor = 0x056a
            product = 0x00e2
            version = 256
            settle_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "Studio Pen");
        assert_eq!(config.screen_width, Some(3840));
        assert_eq!(config.screen_height, Some(2160));
        assert_eq!(config.vendor, 0x056a);
        assert_eq!(config.product, 0x00e2);
        assert_eq!(config.version, 256);
        assert_eq!(config.settle_ms, Some(250));
    }

    #[test]
    fn missing_file_yields_none() {
        let path = std::env::temp_dir().join("virtual-pen-missing-config.toml");
        assert!(load_from_path(&path).is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("tilt = true").is_err());
    }
}
