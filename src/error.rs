use std::io;

/// Errors raised while attaching a device to the [`crate::bus::Bus`].
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    #[error("page range ${start:02X}..=${end:02X} is inverted (start after end)")]
    InvertedRange { start: u8, end: u8 },

    #[error("page ${page:02X} is already attached to another device")]
    PageOverlap { page: u8 },
}

/// Errors raised while loading a ROM image from disk.
#[derive(Debug, thiserror::Error)]
pub enum RomError {
    #[error("ROM image exceeds 65536 bytes ({0} bytes given)")]
    TooLarge(usize),

    #[error("failed to read ROM image: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised during instruction fetch/decode/execute.
#[derive(Debug, thiserror::Error)]
pub enum CpuError {
    #[error("illegal opcode ${opcode:02X} at ${pc:04X}")]
    UnknownOpcode { pc: u16, opcode: u8 },
}
