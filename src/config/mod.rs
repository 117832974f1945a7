mod cli;
mod file;

pub use cli::{Cli, Command};

use std::time::Duration;

use crate::input::DeviceIds;
use crate::pen::ScreenSize;

/// Longest device name uinput accepts (UINPUT_MAX_NAME_SIZE minus the NUL).
const MAX_NAME_LEN: usize = 79;

/// Merged configuration from CLI args and TOML file.
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub screen: ScreenSize,
    pub ids: DeviceIds,
    pub settle: Duration,
}

impl Config {
    /// Load configuration by merging TOML file with CLI overrides.
    pub fn load(cli: &Cli) -> Self {
        let file_config = cli
            .config
            .as_ref()
            .and_then(|p| file::load_from_path(p))
            .or_else(file::load_from_default_paths)
            .unwrap_or_default();

        Self::merge(cli, file_config)
    }

    fn merge(cli: &Cli, file_config: file::FileConfig) -> Self {
        Self {
            name: cli.name.clone().unwrap_or(file_config.name),
            screen: ScreenSize {
                width: cli
                    .screen_width
                    .or(file_config.screen_width)
                    .unwrap_or(file::DEFAULT_SCREEN_WIDTH),
                height: cli
                    .screen_height
                    .or(file_config.screen_height)
                    .unwrap_or(file::DEFAULT_SCREEN_HEIGHT),
            },
            ids: DeviceIds {
                vendor: file_config.vendor,
                product: file_config.product,
                version: file_config.version,
            },
            settle: Duration::from_millis(
                cli.settle_ms
                    .or(file_config.settle_ms)
                    .unwrap_or(file::DEFAULT_SETTLE_MS),
            ),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.screen.width <= 0 || self.screen.height <= 0 {
            return Err("Screen dimensions must be positive");
        }
        if self.name.is_empty() {
            return Err("Device name must not be empty");
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err("Device name must be at most 79 bytes");
        }
        Ok(())
    }
}
