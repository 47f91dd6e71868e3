use crate::alu::{adc_binary, adc_decimal, ror};
use crate::cpu::Cpu;
use crate::status::StatusFlags;

impl Cpu {
    /// RRA: ROR the operand, then ADC the accumulator with the rotated
    /// value, feeding the ROR's carry-out into the ADC's carry-in.
    pub(crate) fn handle_rra(&mut self, value: Option<u8>, address: Option<u16>) -> u8 {
        let addr = address.expect("RRA always addresses memory");
        let carry_in = self.status.contains(StatusFlags::CARRY);
        let rotated = ror(value.expect("RRA always has a value operand"), carry_in);
        self.bus.write(addr, rotated.value);

        let r = if self.status.contains(StatusFlags::DECIMAL) {
            adc_decimal(self.a, rotated.value, rotated.carry)
        } else {
            adc_binary(self.a, rotated.value, rotated.carry)
        };
        self.a = r.value;
        self.status.set_flag(StatusFlags::CARRY, r.carry);
        self.status.set_flag(StatusFlags::ZERO, r.zero);
        self.status.set_flag(StatusFlags::OVERFLOW, r.overflow);
        self.status.set_flag(StatusFlags::NEGATIVE, r.negative);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::{Bus, Ram};
    use crate::cpu::Cpu;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn rotates_memory_then_adds_into_accumulator() {
        let mut bus = Bus::new();
        bus.attach(Rc::new(RefCell::new(Ram::new(0x10000, 0))), 0x00, 0xFF, false).unwrap();
        let mut cpu = Cpu::new(bus, 0x8000, false);
        cpu.a = 0x01;
        cpu.handle_rra(Some(0b0000_0010), Some(0x10));
        assert_eq!(cpu.bus.read(0x10), 0b0000_0001);
        assert_eq!(cpu.a, 0x02);
    }
}
