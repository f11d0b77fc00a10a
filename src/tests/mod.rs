mod instr_tests;
mod interrupt_tests;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Cpu, CpuBus, InterruptManager, InterruptType, Interrupts};

/// Address the cycle callback mirrors the running cycle count into, so
/// a program can observe mid-instruction peripheral state.
pub const CYCLE_COUNTER_ADDR: u16 = 0xFFA0;

/// Flat 64K of memory that also records the OAM corruption triggers it
/// receives.
pub struct TestRam {
    pub mem: Vec<u8>,
    pub write_triggers: Vec<u16>,
    pub read_write_triggers: Vec<u16>,
}

impl TestRam {
    fn new() -> Self {
        Self {
            mem: vec![0; 0x10000],
            write_triggers: Vec::new(),
            read_write_triggers: Vec::new(),
        }
    }

    fn load(&mut self, addr: u16, data: &[u8]) {
        self.mem[addr as usize..addr as usize + data.len()].copy_from_slice(data);
    }
}

impl CpuBus for TestRam {
    fn read(&mut self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.mem[addr as usize] = data;
    }

    fn trigger_write(&mut self, addr: u16) {
        self.write_triggers.push(addr);
    }

    fn trigger_read_write(&mut self, addr: u16) {
        self.read_write_triggers.push(addr);
    }
}

pub type TestCpu = Cpu<Rc<RefCell<TestRam>>, Rc<RefCell<Interrupts>>, Box<dyn FnMut()>>;

pub struct TestSystem {
    pub cpu: TestCpu,
    pub ram: Rc<RefCell<TestRam>>,
    pub interrupts: Rc<RefCell<Interrupts>>,
    pub cycles: Rc<Cell<u64>>,
}

impl TestSystem {
    /// Builds a CPU over flat RAM with `program` at the reset PC
    /// (0x0100). The cycle callback counts M-cycles and mirrors the
    /// count into [`CYCLE_COUNTER_ADDR`] like a tiny peripheral would.
    pub fn new(program: &[u8]) -> Self {
        let ram = Rc::new(RefCell::new(TestRam::new()));
        ram.borrow_mut().load(0x0100, program);

        let interrupts = Rc::new(RefCell::new(Interrupts::default()));

        let cycles = Rc::new(Cell::new(0u64));

        let counter = cycles.clone();
        let counter_ram = ram.clone();
        let cycle_fn = Box::new(move || {
            counter.set(counter.get() + 1);
            counter_ram.borrow_mut().mem[CYCLE_COUNTER_ADDR as usize] = counter.get() as u8;
        }) as Box<dyn FnMut()>;

        Self {
            cpu: Cpu::new(ram.clone(), interrupts.clone(), cycle_fn),
            ram,
            interrupts,
            cycles,
        }
    }

    /// Steps once and returns the M-cycles that step consumed.
    pub fn step_timed(&mut self) -> u64 {
        let before = self.cycles.get();
        self.cpu.step().unwrap();
        self.cycles.get() - before
    }

    pub fn run_steps(&mut self, count: usize) {
        for _ in 0..count {
            self.cpu.step().unwrap();
        }
    }

    pub fn read_mem(&self, addr: u16) -> u8 {
        self.ram.borrow().mem[addr as usize]
    }

    pub fn write_mem(&mut self, addr: u16, data: u8) {
        self.ram.borrow_mut().mem[addr as usize] = data;
    }

    /// Enables and requests `interrupt` in one go.
    pub fn raise_interrupt(&mut self, interrupt: InterruptType) {
        let mut interrupts = self.interrupts.borrow_mut();
        let enable = interrupts.read_interrupt_enable();
        interrupts.write_interrupt_enable(enable | (1 << interrupt as u8));
        interrupts.request_interrupt(interrupt);
    }
}
