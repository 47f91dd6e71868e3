use crate::alu::compare;
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    /// DCP: DEC the operand, then CMP the accumulator against the
    /// decremented value.
    pub(crate) fn handle_dcp(&mut self, value: Option<u8>, address: Option<u16>) -> u8 {
        let addr = address.expect("DCP always addresses memory");
        let decremented = value.expect("DCP always has a value operand").wrapping_sub(1);
        self.bus.write(addr, decremented);
        let r = compare(self.a, decremented);
        self.status.set_flag(StatusFlags::CARRY, r.carry);
        self.status.set_flag(StatusFlags::ZERO, r.zero);
        self.status.set_flag(StatusFlags::NEGATIVE, r.negative);
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
    fn decrements_memory_then_compares() {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x8000, false);
        cpu.a = 0x09;
        cpu.handle_dcp(Some(0x0A), Some(0x10));
        assert_eq!(cpu.bus.read(0x10), 0x09);
        assert!(cpu.status.contains(StatusFlags::ZERO));
    }
}
