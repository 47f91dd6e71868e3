use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_tay(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.y = self.a;
        let y = self.y;
        self.status.set_zn(y);
        0
    }
}
