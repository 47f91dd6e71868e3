use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    #[allow(non_snake_case)]
    pub(crate) fn handleCLD(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.status.remove(StatusFlags::DECIMAL);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::Cpu;
    use crate::status::StatusFlags;

    #[test]
    fn clears_decimal() {
        let mut cpu = Cpu::new(Bus::new(), 0x0200, false);
        cpu.status.insert(StatusFlags::DECIMAL);
        cpu.handleCLD(None, None);
        assert!(!cpu.status.contains(StatusFlags::DECIMAL));
    }
}
