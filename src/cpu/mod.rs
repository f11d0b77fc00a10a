mod alu;
mod cpu;
pub mod instruction;
mod instructions_table;
mod registers;

use std::cell::RefCell;
use std::rc::Rc;

pub use cpu::{Cpu, CpuState};
pub use registers::{Reg16, Reg8};

/// The memory system as the CPU sees it.
///
/// `read`/`write` are plain accesses and must not advance time; the CPU
/// ticks its cycle callback exactly once before every access it makes.
/// The two trigger methods are zero-cost notifications fired just
/// before an increment/decrement-then-access commit (`LD A,(HL+)`,
/// `INC rr`, ...); peripherals that emulate OAM bus corruption latch
/// them, everyone else can ignore them.
pub trait CpuBus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);

    fn trigger_write(&mut self, _addr: u16) {}
    fn trigger_read_write(&mut self, _addr: u16) {}
}

// Lets a driver share one bus between the CPU, the peripherals and the
// cycle callback.
impl<B: CpuBus> CpuBus for Rc<RefCell<B>> {
    fn read(&mut self, addr: u16) -> u8 {
        self.borrow_mut().read(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.borrow_mut().write(addr, data);
    }

    fn trigger_write(&mut self, addr: u16) {
        self.borrow_mut().trigger_write(addr);
    }

    fn trigger_read_write(&mut self, addr: u16) {
        self.borrow_mut().trigger_read_write(addr);
    }
}
