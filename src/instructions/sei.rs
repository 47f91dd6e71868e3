use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    pub(crate) fn handle_sei(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.status.insert(StatusFlags::INTERRUPT_DISABLE);
        0
    }
}
