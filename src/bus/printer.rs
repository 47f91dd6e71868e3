use super::device::Device;

const REG_APPEND: u16 = 0x00;
const REG_EMIT: u16 = 0x01;
const REG_CLEAR: u16 = 0x02;

/// A write-only peripheral with three control registers at local offsets
/// $00-$02. Writing $00 appends a byte to an internal FIFO; $01 emits the
/// FIFO as a 7-bit ASCII text line and clears it; $02 clears without
/// emitting. What happens with the emitted line is out of scope for the
/// core — here it goes to the `log` crate and an in-memory history buffer
/// an embedder can inspect.
#[derive(Debug, Default)]
pub struct Printer {
    offset: u16,
    fifo: Vec<u8>,
    last_write: u8,
    lines: Vec<String>,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn emit(&mut self) {
        let text: String = self.fifo.iter().map(|&b| (b & 0x7F) as char).collect();
        log::info!(target: "mos6502::printer", "PRINTER: {text}");
        self.lines.push(text);
        self.fifo.clear();
    }
}

impl Device for Printer {
    fn set_offset(&mut self, offset: u16) {
        self.offset = offset;
    }

    fn read(&self, _addr: u16) -> u8 {
        self.last_write
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.last_write = value;
        match addr.wrapping_sub(self.offset) {
            REG_APPEND => self.fifo.push(value),
            REG_EMIT => self.emit(),
            REG_CLEAR => self.fifo.clear(),
            _ => {}
        }
    }
}
