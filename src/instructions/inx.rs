use crate::cpu::Cpu;

impl Cpu {
    #[allow(non_snake_case)]
    pub(crate) fn handleINX(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.x = self.x.wrapping_add(1);
        let x = self.x;
        self.status.set_zn(x);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::Cpu;

    #[test]
    fn wraps_from_ff_to_00() {
        let mut cpu = Cpu::new(Bus::new(), 0x0200, false);
        cpu.x = 0xFF;
        cpu.handleINX(None, None);
        assert_eq!(cpu.x, 0x00);
    }
}
