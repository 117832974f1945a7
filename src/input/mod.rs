pub mod event;
mod sink;
mod uinput;

pub use sink::{AxisRange, Capability, EventSink};
pub use uinput::{DeviceIds, UinputSink};

#[cfg(test)]
pub use sink::recording;
