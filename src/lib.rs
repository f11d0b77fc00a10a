//! Cycle-accurate emulation core for the Sharp SM83, the CPU of the
//! Gameboy (DMG).
//!
//! The crate emulates only the CPU itself: the register file, the full
//! base and `0xCB`-prefixed instruction sets with hardware-exact flag
//! behavior, the interrupt/halt state machine, and the machine-cycle
//! contract that lets the surrounding system clock its peripherals in
//! lockstep with every bus access the CPU makes. Memory, video, audio,
//! timers and the rest of the console live behind the [`CpuBus`] and
//! [`InterruptController`] seams.

mod cpu;
mod error;
mod interrupts;

#[cfg(test)]
mod tests;

pub use cpu::{Cpu, CpuBus, CpuState, Reg16, Reg8};
pub use error::CpuError;
pub use interrupts::{InterruptController, InterruptManager, InterruptType, Interrupts};
