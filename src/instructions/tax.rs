use crate::cpu::Cpu;

impl Cpu {
    #[allow(non_snake_case)]
    pub(crate) fn handleTAX(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.x = self.a;
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
    fn copies_a_into_x() {
        let mut cpu = Cpu::new(Bus::new(), 0x0200, false);
        cpu.a = 0x55;
        cpu.handleTAX(None, None);
        assert_eq!(cpu.x, 0x55);
    }
}
