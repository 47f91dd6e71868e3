//! A MOS 6502 instruction-set simulator: fetch-decode-execute engine plus
//! a page-granular memory bus with pluggable RAM/ROM/peripheral devices.

mod addressing;
mod alu;
pub mod bus;
mod cpu;
pub mod error;
mod instructions;
mod opcode;
pub mod status;

pub use bus::Bus;
pub use cpu::Cpu;
pub use error::{BusError, CpuError, RomError};
pub use status::StatusFlags;
