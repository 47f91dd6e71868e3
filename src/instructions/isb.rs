use crate::alu::{sbc_binary, sbc_decimal};
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    /// ISB (a.k.a. ISC): INC the operand, then SBC the accumulator with
    /// the incremented value.
    pub(crate) fn handle_isb(&mut self, value: Option<u8>, address: Option<u16>) -> u8 {
        let addr = address.expect("ISB always addresses memory");
        let incremented = value.expect("ISB always has a value operand").wrapping_add(1);
        self.bus.write(addr, incremented);

        let carry_in = self.status.contains(StatusFlags::CARRY);
        let r = if self.status.contains(StatusFlags::DECIMAL) {
            sbc_decimal(self.a, incremented, carry_in)
        } else {
            sbc_binary(self.a, incremented, carry_in)
        };
        self.a = r.value;
        self.status.set_flag(StatusFlags::CARRY, r.carry);
        self.status.set_flag(StatusFlags::ZERO, r.zero);
        self.status.set_flag(StatusFlags::OVERFLOW, r.overflow);
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
    fn increments_memory_then_subtracts() {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x8000, false);
        cpu.status.insert(StatusFlags::CARRY);
        cpu.a = 0x10;
        cpu.handle_isb(Some(0x04), Some(0x10));
        assert_eq!(cpu.bus.read(0x10), 0x05);
        assert_eq!(cpu.a, 0x0B);
    }
}
