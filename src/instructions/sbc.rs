use crate::alu::{sbc_binary, sbc_decimal};
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    /// Subtract memory from accumulator with borrow (`C` is the inverted
    /// borrow, as in real 6502 convention).
    pub(crate) fn handle_sbc(&mut self, value: Option<u8>, _address: Option<u16>) -> u8 {
        let m = value.expect("SBC always has a value operand");
        let carry_in = self.status.contains(StatusFlags::CARRY);
        let r = if self.status.contains(StatusFlags::DECIMAL) {
            sbc_decimal(self.a, m, carry_in)
        } else {
            sbc_binary(self.a, m, carry_in)
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

    fn cpu() -> Cpu {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        Cpu::new(bus, 0x0200, false)
    }

    #[test]
    fn binary_subtract_with_borrow_set_leaves_carry() {
        let mut cpu = cpu();
        cpu.status.insert(StatusFlags::CARRY);
        cpu.a = 0x50;
        cpu.handle_sbc(Some(0x10), None);
        assert_eq!(cpu.a, 0x40);
        assert!(cpu.status.contains(StatusFlags::CARRY));
    }

    #[test]
    fn missing_carry_in_subtracts_an_extra_one() {
        let mut cpu = cpu();
        cpu.a = 0x50;
        cpu.handle_sbc(Some(0x10), None);
        assert_eq!(cpu.a, 0x3F);
    }

    #[test]
    fn decimal_subtract_produces_bcd_result() {
        let mut cpu = cpu();
        cpu.status.insert(StatusFlags::DECIMAL);
        cpu.status.insert(StatusFlags::CARRY);
        cpu.a = 0x46;
        cpu.handle_sbc(Some(0x12), None);
        assert_eq!(cpu.a, 0x34);
    }
}
