use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    #[allow(non_snake_case)]
    pub(crate) fn handleCLC(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.status.remove(StatusFlags::CARRY);
        0
    }
}
