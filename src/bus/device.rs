/// A memory-mapped collaborator attached to the [`super::Bus`] over one or
/// more 256-byte pages.
///
/// Implementations translate the absolute address handed to them into a
/// device-local address using `offset`, which the bus records once at
/// attach time. Mirrored attachments reuse that same offset, which is how
/// a device smaller than its mapped range ends up repeating.
pub trait Device: std::fmt::Debug {
    /// Records the base address of this device's first (non-mirror)
    /// attachment. Called at most once by `Bus::attach`.
    fn set_offset(&mut self, offset: u16);

    fn read(&self, addr: u16) -> u8;

    fn write(&mut self, addr: u16, value: u8);
}
