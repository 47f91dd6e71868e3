use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    pub(crate) fn handle_cli(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.status.remove(StatusFlags::INTERRUPT_DISABLE);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::Cpu;
    use crate::status::StatusFlags;

    #[test]
    fn clears_interrupt_disable() {
        let mut cpu = Cpu::new(Bus::new(), 0x0200, false);
        cpu.status.insert(StatusFlags::INTERRUPT_DISABLE);
        cpu.handle_cli(None, None);
        assert!(!cpu.status.contains(StatusFlags::INTERRUPT_DISABLE));
    }
}
