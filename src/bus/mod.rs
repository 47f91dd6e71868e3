//! Page-granular memory bus: dispatches 16-bit addresses to the attached
//! [`Device`] for that page. Grounded in spirit on `bus.rs`'s address
//! dispatch, generalized from its hardcoded NES memory map to the
//! attach-a-device-to-a-page-range model described in the design.

mod device;
mod printer;
mod ram;
mod rom;

use std::cell::RefCell;
use std::rc::Rc;

pub use device::Device;
pub use printer::Printer;
pub use ram::Ram;
pub use rom::Rom;

use crate::error::BusError;

const PAGE_COUNT: usize = 256;

/// The fixed default a read from an unmapped page returns. The
/// unmapped-read default is fixed at $00.
const UNMAPPED_READ_DEFAULT: u8 = 0x00;

type SharedDevice = Rc<RefCell<dyn Device>>;

#[derive(Clone)]
pub struct Bus {
    pages: Vec<Option<SharedDevice>>,
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus").field("pages", &self.pages.len()).finish()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    pub fn new() -> Self {
        Self { pages: vec![None; PAGE_COUNT] }
    }

    /// Reserves pages `[start_page, end_page]` for `device`. On the first
    /// (non-mirror) attachment the device's offset is set to
    /// `start_page << 8`; mirror attachments reuse whatever offset the
    /// device already has. Overlapping an already-attached page is an
    /// error, not a silent override.
    pub fn attach(
        &mut self,
        device: SharedDevice,
        start_page: u8,
        end_page: u8,
        mirror: bool,
    ) -> Result<(), BusError> {
        if start_page > end_page {
            return Err(BusError::InvertedRange { start: start_page, end: end_page });
        }
        for page in start_page..=end_page {
            if self.pages[page as usize].is_some() {
                return Err(BusError::PageOverlap { page });
            }
        }
        if !mirror {
            device.borrow_mut().set_offset((start_page as u16) << 8);
        }
        for page in start_page..=end_page {
            self.pages[page as usize] = Some(Rc::clone(&device));
        }
        Ok(())
    }

    pub fn read(&self, addr: u16) -> u8 {
        let page = (addr >> 8) as usize;
        match &self.pages[page] {
            Some(device) => device.borrow().read(addr),
            None => UNMAPPED_READ_DEFAULT,
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        let page = (addr >> 8) as usize;
        if let Some(device) = &self.pages[page] {
            device.borrow_mut().write(addr, value);
        }
    }

    pub fn read_u16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    pub fn write_u16(&mut self, addr: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write(addr, low);
        self.write(addr.wrapping_add(1), high);
    }
}
