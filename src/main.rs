mod config;
mod dump;
mod input;
mod pen;
mod stroke;

use std::thread;
use std::time::Duration;

use clap::Parser;

use config::{Cli, Command, Config};
use input::UinputSink;
use pen::PenDevice;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load(&cli);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    log::info!(
        "virtual-pen starting (name={:?}, screen={}x{})",
        config.name,
        config.screen.width,
        config.screen.height
    );

    match cli.command {
        Command::Capabilities => dump::run_capabilities(config.screen),
        Command::Stroke {
            from,
            to,
            steps,
            pressure,
            interval_ms,
        } => {
            let mut pen = create_pen(&config)?;
            stroke::draw_stroke(
                &mut pen,
                from,
                to,
                steps,
                pressure,
                Duration::from_millis(interval_ms),
            );
        }
        Command::Click { at, button } => {
            let mut pen = create_pen(&config)?;
            stroke::click(&mut pen, at, button);
        }
        Command::Hold { seconds } => {
            let _pen = create_pen(&config)?;
            log::info!("Holding device for {}s", seconds);
            thread::sleep(Duration::from_secs(seconds));
        }
    }

    Ok(())
}

fn create_pen(
    config: &Config,
) -> Result<PenDevice<UinputSink>, Box<dyn std::error::Error + Send + Sync>> {
    log::info!("Creating pen uinput device");
    let pen = PenDevice::new(UinputSink::new(config.ids), &config.name, config.screen);
    if !pen.is_active() {
        return Err("Virtual pen device is not available (is /dev/uinput writable?)".into());
    }

    // Give udev/libinput time to attach before sending events.
    thread::sleep(config.settle);
    Ok(pen)
}
