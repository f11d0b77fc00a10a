use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// An unmapped base or `0xCB`-prefixed opcode was fetched. Real
    /// hardware behaves unpredictably here; the emulator treats it as a
    /// hard stop so the fault stays debuggable.
    #[error("invalid opcode {opcode:#04X} at {pc:#06X}")]
    InvalidOpcode { opcode: u8, pc: u16 },
}
