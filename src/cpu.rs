use crate::addressing::AddressingMode;
use crate::bus::Bus;
use crate::error::CpuError;
use crate::opcode::OPCODES;
use crate::status::StatusFlags;

const STACK_BASE: u16 = 0x0100;

/// The 6502 register file, status flags, and its exclusively-owned [`Bus`].
///
/// `include_illegal` gates the unofficial opcode subset in [`crate::opcode::OPCODES`]:
/// when false, an illegal opcode byte is treated the same as an opcode
/// with no table entry at all — a fatal unknown-opcode condition.
#[derive(Debug)]
pub struct Cpu {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: StatusFlags,
    pub(crate) bus: Bus,
    include_illegal: bool,
    /// Non-cycle-accurate running total, incremented by each opcode's
    /// textbook base cycle count. Diagnostic only.
    pub cycles: u64,
    /// PC captured at the start of the instruction currently executing.
    pub current_instruction_pc: u16,
    /// Opcode byte followed by whatever operand bytes were fetched for it,
    /// for diagnostics (disassembly, tracing).
    pub current_instruction: Vec<u8>,
}

impl Cpu {
    pub fn new(bus: Bus, origin: u16, include_illegal: bool) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: origin,
            status: StatusFlags::empty(),
            bus,
            include_illegal,
            cycles: 0,
            current_instruction_pc: origin,
            current_instruction: Vec::new(),
        }
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    fn fetch_u8(&mut self) -> u8 {
        let value = self.bus.read(self.pc);
        self.current_instruction.push(value);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_u16(&mut self) -> u16 {
        let low = self.fetch_u8();
        let high = self.fetch_u8();
        u16::from_le_bytes([low, high])
    }

    /// Resolves one of the nine memory-backed addressing modes, consuming
    /// the 1 or 2 operand bytes that follow the opcode and returning
    /// `(effective_address, value)`. `Accumulator`, `Implied` and
    /// `Relative` are handled directly in [`Self::step`].
    fn resolve_operand(&mut self, mode: AddressingMode) -> (Option<u16>, Option<u8>) {
        match mode {
            AddressingMode::Immediate => {
                let addr = self.pc;
                let value = self.fetch_u8();
                (Some(addr), Some(value))
            }
            AddressingMode::ZeroPage => {
                let addr = self.fetch_u8() as u16;
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::ZeroPageX => {
                let addr = self.fetch_u8().wrapping_add(self.x) as u16;
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::ZeroPageY => {
                let addr = self.fetch_u8().wrapping_add(self.y) as u16;
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::IndirectX => {
                let base = self.fetch_u8().wrapping_add(self.x);
                let low = self.bus.read(base as u16);
                let high = self.bus.read(base.wrapping_add(1) as u16);
                let addr = u16::from_le_bytes([low, high]);
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::IndirectY => {
                let base = self.fetch_u8();
                let low = self.bus.read(base as u16);
                let high = self.bus.read(base.wrapping_add(1) as u16);
                let addr = u16::from_le_bytes([low, high]).wrapping_add(self.y as u16);
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_u16();
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::AbsoluteX => {
                let addr = self.fetch_u16().wrapping_add(self.x as u16);
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::AbsoluteY => {
                let addr = self.fetch_u16().wrapping_add(self.y as u16);
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_u16();
                let low = self.bus.read(ptr);
                // JMP ($xxFF) hardware bug: the high byte comes from $xx00,
                // not $(xx+1)00 — the indirect fetch never carries into the
                // next page.
                let high_addr = if ptr & 0x00FF == 0x00FF { ptr & 0xFF00 } else { ptr + 1 };
                let high = self.bus.read(high_addr);
                let addr = u16::from_le_bytes([low, high]);
                (Some(addr), Some(self.bus.read(addr)))
            }
            AddressingMode::Accumulator | AddressingMode::Implied | AddressingMode::Relative => {
                unreachable!("{:?} is resolved directly in step()", mode)
            }
        }
    }

    pub(crate) fn push_byte(&mut self, value: u8) {
        self.bus.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pop_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(STACK_BASE + self.sp as u16)
    }

    /// Pushes `address - 1` as high byte then low byte, the JSR convention.
    pub(crate) fn push_address(&mut self, address: u16) {
        let [low, high] = address.wrapping_sub(1).to_le_bytes();
        self.push_byte(high);
        self.push_byte(low);
    }

    /// Pops low then high. Callers that consumed `address - 1` (RTS) add 1
    /// on use; RTI uses the popped value as-is.
    pub(crate) fn pop_address(&mut self) -> u16 {
        let low = self.pop_byte();
        let high = self.pop_byte();
        u16::from_le_bytes([low, high])
    }

    /// Fetches, decodes and executes exactly one instruction.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let pc = self.pc;
        self.current_instruction_pc = pc;
        self.current_instruction.clear();

        let opcode = self.fetch_u8();
        let entry = OPCODES
            .get(&opcode)
            .filter(|op| self.include_illegal || !op.illegal)
            .copied()
            .ok_or(CpuError::UnknownOpcode { pc, opcode })?;

        let (address, value) = match entry.mode {
            AddressingMode::Implied => (None, None),
            AddressingMode::Accumulator => (None, Some(self.a)),
            AddressingMode::Relative => {
                let offset = self.fetch_u8();
                (None, Some(offset))
            }
            mode => self.resolve_operand(mode),
        };

        let extra_cycles = (entry.handler)(self, value, address);
        self.cycles += entry.base_cycles as u64 + extra_cycles as u64;
        Ok(())
    }

    /// Runs `step()` until the next byte to fetch is `halt_opcode`, if
    /// given, or forever otherwise (callers embed their own termination,
    /// e.g. an unknown-opcode error bubbling out of `step`).
    pub fn run(&mut self, halt_opcode: Option<u8>) -> Result<(), CpuError> {
        loop {
            if let Some(halt) = halt_opcode {
                if self.bus.read(self.pc) == halt {
                    return Ok(());
                }
            }
            self.step()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Rom;

    fn cpu_with_program(program: &[u8]) -> Cpu {
        let mut bus = Bus::new();
        let rom = Rom::from_bytes(program.to_vec()).unwrap();
        bus.attach(
            std::rc::Rc::new(std::cell::RefCell::new(rom)),
            0x80,
            0xFF,
            false,
        )
        .unwrap();
        Cpu::new(bus, 0x8000, false)
    }

    #[test]
    fn new_cpu_has_spec_defined_reset_state() {
        let cpu = cpu_with_program(&[0xEA]);
        assert_eq!(cpu.a, 0);
        assert_eq!(cpu.x, 0);
        assert_eq!(cpu.y, 0);
        assert_eq!(cpu.sp, 0xFF);
        assert_eq!(cpu.pc, 0x8000);
        assert!(cpu.status.is_empty());
    }

    #[test]
    fn step_advances_pc_past_a_one_byte_instruction() {
        let mut cpu = cpu_with_program(&[0xEA, 0xEA]);
        cpu.step().unwrap();
        assert_eq!(cpu.pc, 0x8001);
    }

    #[test]
    fn step_advances_pc_past_a_two_byte_instruction() {
        let mut cpu = cpu_with_program(&[0xA9, 0x42]);
        cpu.step().unwrap();
        assert_eq!(cpu.a, 0x42);
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn unknown_opcode_is_fatal() {
        let mut cpu = cpu_with_program(&[0xFF]);
        let err = cpu.step().unwrap_err();
        assert!(matches!(err, CpuError::UnknownOpcode { opcode: 0xFF, .. }));
    }

    #[test]
    fn illegal_opcode_is_rejected_unless_enabled() {
        let mut bus = Bus::new();
        let rom = Rom::from_bytes(vec![0x07]).unwrap(); // SLO zero page
        bus.attach(std::rc::Rc::new(std::cell::RefCell::new(rom)), 0x80, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x8000, false);
        assert!(cpu.step().is_err());
    }

    #[test]
    fn run_stops_at_the_halt_opcode() {
        let mut cpu = cpu_with_program(&[0xEA, 0xEA, 0x00]);
        cpu.run(Some(0x00)).unwrap();
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn push_byte_then_pop_byte_round_trips() {
        let mut cpu = cpu_with_program(&[0xEA]);
        cpu.push_byte(0x42);
        assert_eq!(cpu.pop_byte(), 0x42);
        assert_eq!(cpu.sp, 0xFF);
    }

    #[test]
    fn sp_wraps_modulo_256_across_pushes() {
        let mut cpu = cpu_with_program(&[0xEA]);
        for _ in 0..=0xFF {
            cpu.push_byte(0);
        }
        assert_eq!(cpu.sp, 0xFF);
    }

    #[test]
    fn jmp_indirect_reproduces_the_page_wrap_bug() {
        let mut bus = Bus::new();
        let ram = crate::bus::Ram::new(0x10000, 0x00);
        bus.attach(std::rc::Rc::new(std::cell::RefCell::new(ram)), 0x00, 0xFF, false).unwrap();
        bus.write(0x8000, 0x6C); // JMP (indirect)
        bus.write(0x8001, 0xFF);
        bus.write(0x8002, 0x20); // pointer = $20FF
        bus.write(0x20FF, 0x34); // low byte of target
        bus.write(0x2000, 0x56); // high byte, wrapped to $2000 not $2100
        bus.write(0x2100, 0x99); // would be wrong target's high byte
        let mut cpu = Cpu::new(bus, 0x8000, false);
        cpu.step().unwrap();
        assert_eq!(cpu.pc, 0x5634);
    }
}
