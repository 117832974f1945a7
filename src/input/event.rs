//! Raw Linux input event codes used by the virtual pen, plus small builders.

use evdevil::event::{EventType, InputEvent};

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_ABS: u16 = 0x03;
pub const SYN_REPORT: u16 = 0;

pub const ABS_X: u16 = 0x00;
pub const ABS_Y: u16 = 0x01;
pub const ABS_PRESSURE: u16 = 0x18; // 24

pub const BTN_TOOL_PEN: u16 = 0x140; // 320
pub const BTN_TOUCH: u16 = 0x14a; // 330
pub const BTN_STYLUS: u16 = 0x14b; // 331
pub const BTN_STYLUS2: u16 = 0x14c; // 332
pub const BTN_STYLUS3: u16 = 0x149; // 329

/// Build an absolute axis event (EV_ABS).
pub fn abs_event(code: u16, value: i32) -> InputEvent {
    InputEvent::new(EventType::from_raw(EV_ABS), code, value)
}

/// Build a key event (EV_KEY) for uinput.
pub fn key_event(code: u16, value: i32) -> InputEvent {
    InputEvent::new(EventType::from_raw(EV_KEY), code, value)
}

/// Printable name for an event type/code pair, for diagnostics.
pub fn code_name(ty: u16, code: u16) -> String {
    match ty {
        EV_SYN if code == SYN_REPORT => "SYN_REPORT".to_string(),
        EV_KEY => {
            let key = match code {
                BTN_TOOL_PEN => "BTN_TOOL_PEN",
                BTN_TOUCH => "BTN_TOUCH",
                BTN_STYLUS => "BTN_STYLUS",
                BTN_STYLUS2 => "BTN_STYLUS2",
                BTN_STYLUS3 => "BTN_STYLUS3",
                _ => return format!("KEY/{}", code),
            };
            key.to_string()
        }
        EV_ABS => {
            let abs = match code {
                ABS_X => "X",
                ABS_Y => "Y",
                ABS_PRESSURE => "PRESSURE",
                _ => "?",
            };
            format!("ABS_{}({})", abs, code)
        }
        _ => format!("type{} code{}", ty, code),
    }
}
