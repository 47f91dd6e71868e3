use crate::alu::ror;
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    pub(crate) fn handle_ror(&mut self, value: Option<u8>, address: Option<u16>) -> u8 {
        let carry_in = self.status.contains(StatusFlags::CARRY);
        let r = ror(value.expect("ROR always has a value operand"), carry_in);
        match address {
            Some(addr) => self.bus.write(addr, r.value),
            None => self.a = r.value,
        }
        self.status.set_flag(StatusFlags::CARRY, r.carry);
        self.status.set_zn(r.value);
        0
    }
}
