use crate::alu::compare;
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    #[allow(non_snake_case)]
    pub(crate) fn handleCPY(&mut self, value: Option<u8>, _address: Option<u16>) -> u8 {
        let r = compare(self.y, value.expect("CPY always has a value operand"));
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
    fn compares_against_y() {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x0200, false);
        cpu.y = 0x01;
        cpu.handleCPY(Some(0x02), None);
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
        assert!(!cpu.status.contains(StatusFlags::CARRY));
    }
}
