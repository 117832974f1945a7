//! `EventSink` backed by a Linux uinput device.

use std::io;

use evdevil::event::{InputEvent, Key};
use evdevil::uinput::{AbsSetup, UinputDevice};
use evdevil::{AbsInfo, Bus, InputId, InputProp};

use super::sink::{Capability, EventSink};

const BUS_USB: u16 = 0x03;

/// Hardware IDs reported by the virtual device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIds {
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

/// Collects capability declarations until `activate`, then owns the uinput device.
pub struct UinputSink {
    ids: DeviceIds,
    declared: Vec<Capability>,
    device: Option<UinputDevice>,
    pending: Vec<InputEvent>,
}

impl UinputSink {
    pub fn new(ids: DeviceIds) -> Self {
        Self {
            ids,
            declared: Vec::new(),
            device: None,
            pending: Vec::with_capacity(8),
        }
    }

    fn create_device(&self, name: &str) -> io::Result<UinputDevice> {
        let mut props: Vec<InputProp> = Vec::new();
        let mut axes: Vec<AbsSetup> = Vec::new();
        let mut keys: Vec<Key> = Vec::new();
        for capability in &self.declared {
            match *capability {
                Capability::Property(prop) => props.push(prop),
                Capability::Axis(abs, range) => axes.push(AbsSetup::new(
                    abs,
                    AbsInfo::new(0, range.maximum).with_resolution(range.resolution),
                )),
                Capability::Key(key) => keys.push(key),
            }
        }

        let id = InputId::new(
            Bus::from_raw(BUS_USB),
            self.ids.vendor,
            self.ids.product,
            self.ids.version,
        );

        UinputDevice::builder()?
            .with_input_id(id)?
            .with_props(props)?
            .with_abs_axes(axes)?
            .with_keys(keys)?
            .build(name)
    }
}

impl EventSink for UinputSink {
    fn declare(&mut self, capability: Capability) {
        self.declared.push(capability);
    }

    fn activate(&mut self, name: &str) -> io::Result<()> {
        if self.device.is_some() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "uinput device already created",
            ));
        }

        let device = self.create_device(name)?;
        if let Ok(sysname) = device.sysname() {
            log::info!(
                "Pen device ready: /sys/devices/virtual/input/{}",
                sysname.to_string_lossy()
            );
        }
        self.device = Some(device);
        Ok(())
    }

    fn write_event(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    fn sync(&mut self) {
        let Some(device) = &self.device else {
            log::trace!("No uinput device, dropping {} events", self.pending.len());
            self.pending.clear();
            return;
        };

        // `finish` terminates the batch with SYN_REPORT.
        let result = device
            .writer()
            .write(&self.pending)
            .and_then(|writer| writer.finish());
        if let Err(e) = result {
            log::warn!("Failed to write {} events to uinput: {}", self.pending.len(), e);
        }
        self.pending.clear();
    }
}
