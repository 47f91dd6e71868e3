use crate::alu::ror;
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    /// ARR: AND the accumulator with the immediate operand, then ROR the
    /// accumulator. Carry and overflow follow their own rule here instead
    /// of the plain ROR rule: C takes the result's bit 6, V is bit 6 XOR
    /// bit 5 of the result.
    pub(crate) fn handle_arr(&mut self, value: Option<u8>, _address: Option<u16>) -> u8 {
        self.a &= value.expect("ARR always has a value operand");
        let carry_in = self.status.contains(StatusFlags::CARRY);
        let r = ror(self.a, carry_in);
        self.a = r.value;
        self.status.set_zn(r.value);
        self.status.set_flag(StatusFlags::CARRY, (r.value & 0x40) != 0);
        let bit6 = (r.value & 0x40) != 0;
        let bit5 = (r.value & 0x20) != 0;
        self.status.set_flag(StatusFlags::OVERFLOW, bit6 != bit5);
        0
    }
}
