use crate::cpu::Cpu;

impl Cpu {
    /// Bitwise AND accumulator with memory. Uses `&`, never `^` — EOR owns
    /// the exclusive-or handler.
    #[allow(non_snake_case)]
    pub(crate) fn handleAND(&mut self, value: Option<u8>, _address: Option<u16>) -> u8 {
        self.a &= value.expect("AND always has a value operand");
        let a = self.a;
        self.status.set_zn(a);
        0
    }
}
