use crate::cpu::Cpu;

impl Cpu {
    /// Pops P. Bits 4 and 5 in the popped byte are discarded; the live B
    /// and unused bits are preserved (see `StatusFlags::restore_from_popped_byte`).
    #[allow(non_snake_case)]
    pub(crate) fn handlePLP(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        let popped = self.pop_byte();
        self.status.restore_from_popped_byte(popped);
        0
    }
}
