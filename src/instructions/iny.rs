use crate::cpu::Cpu;

impl Cpu {
    pub(crate) fn handle_iny(&mut self, _value: Option<u8>, _address: Option<u16>) -> u8 {
        self.y = self.y.wrapping_add(1);
        let y = self.y;
        self.status.set_zn(y);
        0
    }
}
