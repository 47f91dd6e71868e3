use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_nop(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        0
    }
}
