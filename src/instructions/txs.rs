use crate::cpu::Cpu;

impl Cpu {
    /// Copies X into SP. Unlike the other transfers, TXS does not touch
    /// Z/N — SP isn't a value register.
    pub(crate) fn handle_txs(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.sp = self.x;
        0
    }
}
