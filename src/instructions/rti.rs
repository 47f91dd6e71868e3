use crate::cpu::Cpu;

impl Cpu {
    /// Pops P (same B/unused-preserving rule as PLP), then pops PC
    /// directly — no `+1`, unlike RTS.
    pub(crate) fn handle_rti(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        let popped_status = self.pop_byte();
        self.status.restore_from_popped_byte(popped_status);
        self.pc = self.pop_address();
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
    fn restores_pc_without_adjustment() {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x8001, false);
        cpu.handleBRK(None, None);
        cpu.pc = 0x9000; // simulate having jumped into a handler
        cpu.handle_rti(None, None);
        assert_eq!(cpu.pc, 0x8001);
    }
}
