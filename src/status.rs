use bitflags::bitflags;

bitflags! {
    /// The 6502 processor status byte (P). Bit positions are fixed by the
    /// hardware and mirrored here so the packed byte and the named flags
    /// alias the same storage.
    pub struct StatusFlags: u8 {
        const CARRY             = 1 << 0;
        const ZERO               = 1 << 1;
        const INTERRUPT_DISABLE  = 1 << 2;
        const DECIMAL            = 1 << 3;
        const BREAK              = 1 << 4;
        const UNUSED             = 1 << 5;
        const OVERFLOW           = 1 << 6;
        const NEGATIVE           = 1 << 7;
    }
}

impl StatusFlags {
    /// Sets or clears `flag` depending on `value`.
    pub(crate) fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        if value {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    /// Updates Z and N from `result`, as almost every ALU and load/transfer
    /// instruction does.
    pub(crate) fn set_zn(&mut self, result: u8) {
        self.set_flag(StatusFlags::ZERO, result == 0);
        self.set_flag(StatusFlags::NEGATIVE, (result & 0x80) != 0);
    }

    /// The byte materialized onto the stack by PHP/BRK: bits 4 and 5 always
    /// read back as 1 once pushed, regardless of their live state.
    pub(crate) fn to_pushed_byte(self) -> u8 {
        (self | StatusFlags::BREAK | StatusFlags::UNUSED).bits()
    }

    /// Restores flags from a byte popped off the stack (PLP/RTI). Bits 4 and
    /// 5 in the popped byte are discarded; the live B/unused bits are kept
    /// (the NMOS convention — see design notes).
    pub(crate) fn restore_from_popped_byte(&mut self, popped: u8) {
        let preserved = *self & (StatusFlags::BREAK | StatusFlags::UNUSED);
        let popped = StatusFlags::from_bits_truncate(popped) & !(StatusFlags::BREAK | StatusFlags::UNUSED);
        *self = popped | preserved;
    }
}
