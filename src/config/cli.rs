use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pen::MouseButton;
use crate::stroke::Point;

/// Upper bound on stroke segments, keeping the sample buffer small.
pub const MAX_STEPS: u32 = 10_000;

/// Parse a pressure fraction, rejecting values outside `0.0..=1.0`.
fn parse_pressure(s: &str) -> Result<f32, String> {
    let pressure: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid pressure '{}'", s))?;
    if !(0.0..=1.0).contains(&pressure) {
        return Err(format!("Pressure {} is outside 0.0 - 1.0", pressure));
    }
    Ok(pressure)
}

#[derive(Parser)]
#[command(name = "virtual-pen")]
#[command(about = "Drive a virtual pressure-sensitive pen tablet through uinput")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Virtual device name
    #[arg(long)]
    pub name: Option<String>,

    /// Logical screen width in pixels (X axis maximum)
    #[arg(long, env = "VPEN_SCREEN_WIDTH")]
    pub screen_width: Option<i32>,

    /// Logical screen height in pixels (Y axis maximum)
    #[arg(long, env = "VPEN_SCREEN_HEIGHT")]
    pub screen_height: Option<i32>,

    /// Delay after creating the device before sending events, in milliseconds
    #[arg(long)]
    pub settle_ms: Option<u64>,

    /// Path to config file
    #[arg(long, env = "VPEN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the capabilities the device declares, without creating it
    Capabilities,

    /// Draw a straight pen stroke
    Stroke {
        /// Start point, as X,Y in pixels
        #[arg(long, value_parser = clap::value_parser!(Point))]
        from: Point,

        /// End point, as X,Y in pixels
        #[arg(long, value_parser = clap::value_parser!(Point))]
        to: Point,

        /// Number of segments between the two points
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..=MAX_STEPS as i64))]
        steps: u32,

        /// Peak pressure (0.0 - 1.0) reached in the middle of the stroke
        #[arg(long, default_value_t = 0.8, value_parser = parse_pressure)]
        pressure: f32,

        /// Delay between samples in milliseconds
        #[arg(long, default_value_t = 8)]
        interval_ms: u64,
    },

    /// Press and release a stylus button at a position
    Click {
        /// Position, as X,Y in pixels
        #[arg(long, value_parser = clap::value_parser!(Point))]
        at: Point,

        /// Logical button (right and middle map to stylus buttons)
        #[arg(long, default_value = "right", value_parser = clap::value_parser!(MouseButton))]
        button: MouseButton,
    },

    /// Create the device and keep it alive for inspection
    Hold {
        /// How long to keep the device, in seconds
        #[arg(long, default_value_t = 30)]
        seconds: u64,
    },
}
