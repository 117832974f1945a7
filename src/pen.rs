//! Virtual pressure-sensitive pen tablet.
//!
//! Translates pointer position, pressure and stylus button changes into raw
//! input events on an [`EventSink`]. Each operation ends with exactly one sync
//! so the host sees it as a single input report.

use std::fmt;
use std::str::FromStr;

use evdevil::event::{Abs, Key};
use evdevil::InputProp;

use crate::input::event::{abs_event, key_event, ABS_PRESSURE, ABS_X, ABS_Y};
use crate::input::{AxisRange, Capability, EventSink};

/// Largest pressure level reported to the host (16-bit unsigned max).
pub const MAX_PRESSURE: i32 = u16::MAX as i32;

/// Resolution advertised on the X/Y axes. libinput needs a non-zero value to
/// accept the device as a tablet.
pub const AXIS_RESOLUTION: i32 = i16::MAX as i32;

/// Logical screen size in pixels; bounds the X/Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

/// Logical mouse buttons a host application may press with the pen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Backward,
    Forward,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
            MouseButton::Middle => write!(f, "middle"),
            MouseButton::Backward => write!(f, "backward"),
            MouseButton::Forward => write!(f, "forward"),
        }
    }
}

impl FromStr for MouseButton {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(MouseButton::Left),
            "right" | "secondary" => Ok(MouseButton::Right),
            "middle" | "tertiary" => Ok(MouseButton::Middle),
            "backward" | "back" => Ok(MouseButton::Backward),
            "forward" => Ok(MouseButton::Forward),
            _ => Err(format!(
                "Invalid button '{}'. Valid values: left, right, middle, backward, forward",
                s
            )),
        }
    }
}

/// Stylus key a logical button maps to, if any.
pub fn key_for(button: MouseButton) -> Option<Key> {
    match button {
        MouseButton::Right => Some(Key::BTN_STYLUS2),
        MouseButton::Middle => Some(Key::BTN_STYLUS3),
        _ => None,
    }
}

/// Convert a pressure fraction into a device pressure level.
///
/// The product is truncated toward zero, so 0.5 maps to 32767.
pub fn pressure_level(pressure: f32) -> i32 {
    (MAX_PRESSURE as f32 * pressure) as i32
}

/// Absolute pointer positioning in screen pixels.
pub trait VirtualTablet {
    fn set_position(&mut self, x: f32, y: f32);
}

/// Pen pressure reporting, as a fraction in `0.0..=1.0`.
pub trait PressureHandler {
    fn set_pressure(&mut self, pressure: f32);
}

pub trait ButtonHandler {
    fn button_down(&mut self, button: MouseButton);
    fn button_up(&mut self, button: MouseButton);
}

/// Capabilities declared at construction, in registration order.
pub fn capabilities(screen: ScreenSize) -> Vec<Capability> {
    vec![
        Capability::Property(InputProp::DIRECT),
        Capability::Axis(Abs::X, AxisRange::new(screen.width, AXIS_RESOLUTION)),
        Capability::Axis(Abs::Y, AxisRange::new(screen.height, AXIS_RESOLUTION)),
        Capability::Axis(Abs::PRESSURE, AxisRange::new(MAX_PRESSURE, 0)),
        Capability::Key(Key::BTN_TOUCH),
        Capability::Key(Key::BTN_STYLUS),
        Capability::Key(Key::BTN_TOOL_PEN),
        // Targets of `key_for`; undeclared keys would be discarded by the kernel.
        Capability::Key(Key::BTN_STYLUS2),
        Capability::Key(Key::BTN_STYLUS3),
    ]
}

/// A virtual pen device writing into an exclusively owned sink.
///
/// All operations take `&mut self`, so a device can only be driven from one
/// place at a time. Wrap it in a `Mutex` to share it between threads.
pub struct PenDevice<S: EventSink> {
    sink: S,
    active: bool,
}

impl<S: EventSink> PenDevice<S> {
    /// Declare the pen capabilities on `sink` and activate it under `name`.
    ///
    /// Never fails: if activation is refused the error is logged and the
    /// returned device stays inactive (its writes go nowhere).
    pub fn new(mut sink: S, name: &str, screen: ScreenSize) -> Self {
        for capability in capabilities(screen) {
            sink.declare(capability);
        }

        let active = match sink.activate(name) {
            Ok(()) => {
                log::debug!(
                    "Initialized virtual pressure sensitive tablet '{}' ({}x{})",
                    name,
                    screen.width,
                    screen.height
                );
                true
            }
            Err(e) => {
                log::error!("Failed to initialize virtual pressure sensitive tablet: {}", e);
                false
            }
        };

        Self { sink, active }
    }

    /// Whether activation succeeded at construction.
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn write_button(&mut self, button: MouseButton, value: i32) {
        if let Some(key) = key_for(button) {
            self.sink.write_event(key_event(key.raw(), value));
            self.sink.sync();
        }
    }
}

impl<S: EventSink> VirtualTablet for PenDevice<S> {
    fn set_position(&mut self, x: f32, y: f32) {
        self.sink.write_event(abs_event(ABS_X, x as i32));
        self.sink.write_event(abs_event(ABS_Y, y as i32));
        self.sink.sync();
    }
}

impl<S: EventSink> PressureHandler for PenDevice<S> {
    fn set_pressure(&mut self, pressure: f32) {
        self.sink
            .write_event(abs_event(ABS_PRESSURE, pressure_level(pressure)));
        self.sink
            .write_event(key_event(Key::BTN_TOUCH.raw(), i32::from(pressure > 0.0)));
        // The pen is always in range while pressure is being reported.
        self.sink.write_event(key_event(Key::BTN_TOOL_PEN.raw(), 1));
        self.sink.sync();
    }
}

impl<S: EventSink> ButtonHandler for PenDevice<S> {
    fn button_down(&mut self, button: MouseButton) {
        self.write_button(button, 1);
    }

    fn button_up(&mut self, button: MouseButton) {
        self.write_button(button, 0);
    }
}
