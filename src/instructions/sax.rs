use crate::cpu::Cpu;

impl Cpu {
    /// SAX: stores `A & X`. Touches no flags.
    pub(crate) fn handle_sax(&mut self, _value: Option<u8>, address: Option<u16>) -> u8 {
        let addr = address.expect("SAX always addresses memory");
        let result = self.a & self.x;
        self.bus.write(addr, result);
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
    fn stores_a_and_x() {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x8000, false);
        cpu.a = 0b1100_1100;
        cpu.x = 0b1010_1010;
        cpu.handle_sax(None, Some(0x10));
        assert_eq!(cpu.bus.read(0x10), 0b1000_1000);
    }
}
