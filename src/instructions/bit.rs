use crate::alu::bit;
use crate::cpu::Cpu;

impl Cpu {
    #[allow(non_snake_case)]
    pub(crate) fn handleBit(&mut self, value: Option<u8>, _address: Option<u16>) -> u8 {
        bit(self.a, value.expect("BIT always has a value operand"), &mut self.status);
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
    fn takes_n_and_v_from_memory_not_the_result() {
        let mut cpu = cpu();
        cpu.a = 0x00;
        cpu.handleBit(Some(0b1100_0000), None);
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
        assert!(cpu.status.contains(StatusFlags::OVERFLOW));
        assert!(cpu.status.contains(StatusFlags::ZERO));
    }
}
