use crate::alu::rol;
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    /// RLA: ROL the operand, then AND the accumulator with the rotated
    /// value.
    pub(crate) fn handle_rla(&mut self, value: Option<u8>, address: Option<u16>) -> u8 {
        let addr = address.expect("RLA always addresses memory");
        let carry_in = self.status.contains(StatusFlags::CARRY);
        let rotated = rol(value.expect("RLA always has a value operand"), carry_in);
        self.bus.write(addr, rotated.value);
        self.status.set_flag(StatusFlags::CARRY, rotated.carry);
        self.a &= rotated.value;
        let a = self.a;
        self.status.set_zn(a);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::{Bus, Ram};
    use crate::cpu::Cpu;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn rotates_memory_then_ands_into_accumulator() {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x8000, false);
        cpu.a = 0xFF;
        cpu.handle_rla(Some(0b0100_0000), Some(0x10));
        assert_eq!(cpu.bus.read(0x10), 0b1000_0000);
        assert_eq!(cpu.a, 0b1000_0000);
    }
}
