use crate::alu::asl;
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    /// SLO: ASL the operand, then ORA the accumulator with the shifted
    /// value. One of the documented illegal-opcode composites.
    pub(crate) fn handle_slo(&mut self, value: Option<u8>, address: Option<u16>) -> u8 {
        let addr = address.expect("SLO always addresses memory");
        let shifted = asl(value.expect("SLO always has a value operand"));
        self.bus.write(addr, shifted.value);
        self.status.set_flag(StatusFlags::CARRY, shifted.carry);
        self.a |= shifted.value;
        let a = self.a;
        self.status.set_zn(a);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::{Bus, Ram};
    use crate::cpu::Cpu;
    use crate::status::StatusFlags;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn shifts_memory_then_ors_into_accumulator() {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x8000, false);
        cpu.a = 0x01;
        cpu.handle_slo(Some(0b1000_0001), Some(0x10));
        assert_eq!(cpu.bus.read(0x10), 0b0000_0010);
        assert_eq!(cpu.a, 0b0000_0011);
        assert!(cpu.status.contains(StatusFlags::CARRY));
    }
}
