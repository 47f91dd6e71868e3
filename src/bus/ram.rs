use std::collections::HashMap;

use super::device::Device;

/// Sparse RAM backed by a hash map rather than a dense array, since a
/// device may be attached to a page range much larger than the bytes it
/// actually ends up holding. Addresses no program ever wrote to read back
/// as `default`.
#[derive(Debug)]
pub struct Ram {
    offset: u16,
    size: u32,
    default: u8,
    cells: HashMap<u16, u8>,
}

impl Ram {
    /// `size` is the number of distinct local addresses this RAM holds
    /// before mirroring wraps around; it need not match the page range it
    /// is attached to.
    pub fn new(size: u32, default: u8) -> Self {
        Self { offset: 0, size, default, cells: HashMap::new() }
    }

    fn local_addr(&self, addr: u16) -> u16 {
        let relative = addr.wrapping_sub(self.offset) as u32;
        (relative % self.size.max(1)) as u16
    }
}

impl Device for Ram {
    fn set_offset(&mut self, offset: u16) {
        self.offset = offset;
    }

    fn read(&self, addr: u16) -> u8 {
        let local = self.local_addr(addr);
        *self.cells.get(&local).unwrap_or(&self.default)
    }

    fn write(&mut self, addr: u16, value: u8) {
        let local = self.local_addr(addr);
        self.cells.insert(local, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_cells_read_default() {
        let ram = Ram::new(0x100, 0x00);
        assert_eq!(ram.read(0x0000), 0x00);
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut ram = Ram::new(0x100, 0x00);
        ram.write(0x0010, 0x42);
        assert_eq!(ram.read(0x0010), 0x42);
    }

    #[test]
    fn mirrors_past_its_size() {
        let mut ram = Ram::new(0x10, 0x00);
        ram.write(0x0005, 0x99);
        assert_eq!(ram.read(0x0015), 0x99);
        assert_eq!(ram.read(0x0025), 0x99);
    }

    #[test]
    fn respects_recorded_offset() {
        let mut ram = Ram::new(0x100, 0x00);
        ram.set_offset(0x2000);
        ram.write(0x2010, 0x55);
        assert_eq!(ram.read(0x2010), 0x55);
    }
}
