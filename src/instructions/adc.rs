use crate::alu::{adc_binary, adc_decimal};
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    /// Add memory to accumulator with carry. Honors the Decimal flag per
    /// the documented NMOS BCD quirks (see `alu::adc_decimal`).
    pub(crate) fn handle_adc(&mut self, value: Option<u8>, _address: Option<u16>) -> u8 {
        let m = value.expect("ADC always has a value operand");
        let carry_in = self.status.contains(StatusFlags::CARRY);
        let r = if self.status.contains(StatusFlags::DECIMAL) {
            adc_decimal(self.a, m, carry_in)
        } else {
            adc_binary(self.a, m, carry_in)
        };
        self.a = r.value;
        self.status.set_flag(StatusFlags::CARRY, r.carry);
        self.status.set_flag(StatusFlags::ZERO, r.zero);
        self.status.set_flag(StatusFlags::OVERFLOW, r.overflow);
        self.status.set_flag(StatusFlags::NEGATIVE, r.negative);
        0
    }
}
