//! Print the capability table a pen device declares.
//! Run: virtual-pen capabilities

use crate::input::event::{code_name, EV_ABS, EV_KEY};
use crate::input::Capability;
use crate::pen::{self, ScreenSize};

fn describe(capability: &Capability) -> String {
    match *capability {
        Capability::Property(prop) => format!("PROP/{:?}", prop),
        Capability::Axis(abs, range) => format!(
            "{:<20}  min=0 max={} resolution={}",
            code_name(EV_ABS, abs.raw()),
            range.maximum,
            range.resolution
        ),
        Capability::Key(key) => format!("{:<20}  0..1", code_name(EV_KEY, key.raw())),
    }
}

pub fn capability_lines(screen: ScreenSize) -> Vec<String> {
    pen::capabilities(screen)
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:2}  {}", i, describe(c)))
        .collect()
}

pub fn run_capabilities(screen: ScreenSize) {
    println!("Capabilities for a {}x{} screen:\n", screen.width, screen.height);
    for line in capability_lines(screen) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_capability_in_order() {
        let lines = capability_lines(ScreenSize { width: 800, height: 600 });
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with(" 0  PROP/"));
        assert!(lines[1].contains("ABS_X(0)"));
        assert!(lines[1].contains("max=800 resolution=32767"));
        assert!(lines[2].contains("max=600"));
        assert!(lines[3].contains("ABS_PRESSURE(24)"));
        assert!(lines[3].contains("max=65535 resolution=0"));
        assert!(lines[4].contains("BTN_TOUCH"));
        assert!(lines[6].contains("BTN_TOOL_PEN"));
        assert!(lines[8].contains("BTN_STYLUS3"));
    }
}
