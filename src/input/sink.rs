//! The capability-and-event sink a virtual input device writes through.

use std::io;

use evdevil::event::{Abs, InputEvent, Key};
use evdevil::InputProp;

/// Range of an absolute axis. The minimum is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub maximum: i32,
    /// Units per mm (0 = unset).
    pub resolution: i32,
}

impl AxisRange {
    pub const fn new(maximum: i32, resolution: i32) -> Self {
        Self { maximum, resolution }
    }
}

/// One entry of a device's capability declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Property(InputProp),
    Axis(Abs, AxisRange),
    Key(Key),
}

/// Platform transport behind a virtual input device.
///
/// Capabilities are declared first, then the device is activated once.
/// Event writes are collected into a report that `sync` flushes.
/// `write_event` and `sync` have no error channel: transport failures are
/// the implementation's to log.
pub trait EventSink {
    fn declare(&mut self, capability: Capability);
    fn activate(&mut self, name: &str) -> io::Result<()>;
    fn write_event(&mut self, event: InputEvent);
    fn sync(&mut self);
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Recorded {
        Event { ty: u16, code: u16, value: i32 },
        Sync,
    }

    /// In-memory sink that records everything written to it.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub declared: Vec<Capability>,
        pub activations: Vec<String>,
        pub log: Vec<Recorded>,
        pub fail_activation: bool,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                fail_activation: true,
                ..Self::default()
            }
        }

        pub fn take_log(&mut self) -> Vec<Recorded> {
            std::mem::take(&mut self.log)
        }
    }

    impl EventSink for RecordingSink {
        fn declare(&mut self, capability: Capability) {
            self.declared.push(capability);
        }

        fn activate(&mut self, name: &str) -> io::Result<()> {
            self.activations.push(name.to_string());
            if self.fail_activation {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "no access to /dev/uinput"));
            }
            Ok(())
        }

        fn write_event(&mut self, event: InputEvent) {
            self.log.push(Recorded::Event {
                ty: event.event_type().raw(),
                code: event.raw_code(),
                value: event.raw_value(),
            });
        }

        fn sync(&mut self) {
            self.log.push(Recorded::Sync);
        }
    }
}
