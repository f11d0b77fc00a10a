//! Interrupt dispatch, the EI delay slot, and the edge cases around
//! IME.

use std::cell::RefCell;
use std::rc::Rc;

use super::{TestRam, TestSystem};
use crate::{Cpu, InterruptController, InterruptType, Reg16};

#[test]
fn dispatch_pushes_pc_and_jumps_to_the_vector() {
    let mut sys = TestSystem::new(&[]);
    sys.cpu.set_register_pair(Reg16::PC, 0x1234);
    sys.cpu.set_ime(true);
    sys.raise_interrupt(InterruptType::Vblank);
    sys.raise_interrupt(InterruptType::Timer);

    assert_eq!(sys.step_timed(), 5);

    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x0040);
    assert_eq!(sys.cpu.register_pair(Reg16::SP), 0xFFFC);
    assert_eq!(sys.read_mem(0xFFFD), 0x12);
    assert_eq!(sys.read_mem(0xFFFC), 0x34);
    assert!(!sys.cpu.ime());

    // only the taken source is acknowledged
    let flags = sys.interrupts.borrow().read_interrupt_flags();
    assert_eq!(flags & 0x1F, 1 << InterruptType::Timer as u8);
}

#[test]
fn ei_takes_effect_after_the_following_instruction() {
    // EI ; NOP ; NOP
    let mut sys = TestSystem::new(&[0xFB, 0x00, 0x00]);
    sys.raise_interrupt(InterruptType::Serial);

    // EI itself does not enable
    assert_eq!(sys.step_timed(), 1);
    assert!(!sys.cpu.ime());

    // the delay slot still runs, even with a pending interrupt
    assert_eq!(sys.step_timed(), 1);
    assert!(sys.cpu.ime());
    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x0102);

    // only now is the interrupt serviced
    assert_eq!(sys.step_timed(), 5);
    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x0058);
}

#[test]
fn di_in_the_delay_slot_cancels_ei() {
    // EI ; DI ; NOP
    let mut sys = TestSystem::new(&[0xFB, 0xF3, 0x00]);
    sys.raise_interrupt(InterruptType::Timer);

    sys.run_steps(3);

    assert!(!sys.cpu.ime());
    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x0103);
}

#[test]
fn reti_enables_without_delay() {
    let mut sys = TestSystem::new(&[0xD9]);
    sys.cpu.set_register_pair(Reg16::SP, 0xC000);
    sys.write_mem(0xC000, 0x00);
    sys.write_mem(0xC001, 0x02);
    sys.raise_interrupt(InterruptType::Timer);

    assert_eq!(sys.step_timed(), 4);
    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x0200);
    assert!(sys.cpu.ime());

    // the very next step dispatches
    assert_eq!(sys.step_timed(), 5);
    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x0050);
}

/// Controller that reports a pending interrupt but cannot resolve a
/// source, like hardware where the PC push overwrote IE.
struct PhantomPending;

impl InterruptController for PhantomPending {
    fn has_pending_interrupt(&self) -> bool {
        true
    }

    fn pending_interrupt(&self) -> Option<InterruptType> {
        None
    }

    fn acknowledge_interrupt(&mut self, _interrupt: InterruptType) {
        unreachable!("nothing to acknowledge")
    }
}

#[test]
fn dispatch_without_a_source_lands_at_0x0000() {
    let ram = Rc::new(RefCell::new(TestRam::new()));
    let mut cpu = Cpu::new(ram.clone(), PhantomPending, || {});
    cpu.set_register_pair(Reg16::PC, 0x1234);
    cpu.set_ime(true);

    cpu.step().unwrap();

    assert_eq!(cpu.register_pair(Reg16::PC), 0x0000);
    assert_eq!(cpu.register_pair(Reg16::SP), 0xFFFC);
    assert_eq!(ram.borrow().mem[0xFFFD], 0x12);
    assert_eq!(ram.borrow().mem[0xFFFC], 0x34);
    assert!(!cpu.ime());
}
