use super::alu;
use super::instruction::{Condition, Instruction, Opcode, OperandType};
use super::registers::{CpuFlags, Registers};
use super::CpuBus;
use super::{Reg16, Reg8};
use crate::error::CpuError;
use crate::interrupts::InterruptController;

/// Driver state machine. `Stopped` is terminal until `reset`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CpuState {
    Running,
    Halted,
    Stopped,
}

/// The SM83 core.
///
/// The CPU never advances time on its own: every memory access and
/// every internal machine cycle invokes `cycle_fn` exactly once, always
/// *before* the access itself touches the bus. The owner uses that
/// callback to clock all peripherals by one M-cycle (4 T-cycles), so a
/// read performed mid-instruction observes peripheral state at the
/// exact hardware time of that access.
pub struct Cpu<B, I, F>
where
    B: CpuBus,
    I: InterruptController,
    F: FnMut(),
{
    regs: Registers,
    state: CpuState,

    ime: bool,
    /// Enable scheduled by `EI`, committed one instruction late.
    ime_next: bool,
    /// Re-fetch the current PC byte without advancing PC (HALT bug).
    halt_bug: bool,

    bus: B,
    interrupts: I,
    cycle_fn: F,
}

impl<B, I, F> Cpu<B, I, F>
where
    B: CpuBus,
    I: InterruptController,
    F: FnMut(),
{
    pub fn new(bus: B, interrupts: I, cycle_fn: F) -> Self {
        let mut cpu = Self {
            regs: Registers::new(),
            state: CpuState::Running,
            ime: false,
            ime_next: false,
            halt_bug: false,
            bus,
            interrupts,
            cycle_fn,
        };

        cpu.reset();

        cpu
    }

    /// Seeds the DMG post-boot register state and clears the
    /// `Stopped` state.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.state = CpuState::Running;
        self.ime = false;
        self.ime_next = false;
        self.halt_bug = false;
    }

    /// Advances by exactly one instruction, one interrupt dispatch, or
    /// one halted idle cycle. `Stopped` makes this a no-op.
    pub fn step(&mut self) -> Result<(), CpuError> {
        match self.state {
            CpuState::Stopped => return Ok(()),
            CpuState::Halted => {
                // the clock keeps running while halted
                self.cycle();

                // a pending, unmasked interrupt wakes the CPU even
                // with IME off; it is only serviced when IME is on
                if self.interrupts.has_pending_interrupt() {
                    self.state = CpuState::Running;
                    if self.ime {
                        self.service_interrupt();
                    }
                }
                return Ok(());
            }
            CpuState::Running => {}
        }

        if self.ime && self.interrupts.has_pending_interrupt() {
            self.service_interrupt();
            return Ok(());
        }

        // EI only takes effect after the instruction that follows it
        let commit_ime = self.ime_next;

        if let Err(err) = self.next_instruction() {
            self.state = CpuState::Stopped;
            return Err(err);
        }

        // a HALT that fell into the fetch glitch runs the glitched
        // instruction within the same step
        if self.halt_bug {
            if let Err(err) = self.next_instruction() {
                self.state = CpuState::Stopped;
                return Err(err);
            }
        }

        if commit_ime && self.ime_next {
            self.ime = true;
            self.ime_next = false;
        }

        Ok(())
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state == CpuState::Stopped
    }

    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Seeding hook for drivers that skip the boot ROM.
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;
        self.ime_next = false;
    }

    pub fn register(&self, reg: Reg8) -> u8 {
        self.regs.read(reg)
    }

    pub fn set_register(&mut self, reg: Reg8, data: u8) {
        self.regs.write(reg, data);
    }

    pub fn register_pair(&self, pair: Reg16) -> u16 {
        self.regs.read_pair(pair)
    }

    pub fn set_register_pair(&mut self, pair: Reg16, data: u16) {
        self.regs.write_pair(pair, data);
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn interrupts_mut(&mut self) -> &mut I {
        &mut self.interrupts
    }
}

impl<B, I, F> Cpu<B, I, F>
where
    B: CpuBus,
    I: InterruptController,
    F: FnMut(),
{
    /// One M-cycle of hardware time.
    #[inline]
    fn cycle(&mut self) {
        (self.cycle_fn)();
    }

    fn read_bus_cycle(&mut self, addr: u16) -> u8 {
        self.cycle();
        self.bus.read(addr)
    }

    fn write_bus_cycle(&mut self, addr: u16, data: u8) {
        self.cycle();
        self.bus.write(addr, data);
    }

    fn fetch_next_pc(&mut self) -> u8 {
        let result = self.read_bus_cycle(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        result
    }

    fn fetch_word(&mut self) -> u16 {
        (self.fetch_next_pc() as u16) | ((self.fetch_next_pc() as u16) << 8)
    }

    fn stack_push(&mut self, data: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_bus_cycle(self.regs.sp, (data >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_bus_cycle(self.regs.sp, data as u8);
    }

    fn stack_pop(&mut self) -> u16 {
        let low = self.read_bus_cycle(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let high = self.read_bus_cycle(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);

        ((high as u16) << 8) | low as u16
    }

    #[inline]
    fn flag_get(&self, flag: CpuFlags) -> bool {
        self.regs.flag_get(flag)
    }

    #[inline]
    fn flag_set(&mut self, flag: CpuFlags, value: bool) {
        self.regs.flag_set(flag, value);
    }

    fn check_cond(&self, cond: Condition) -> bool {
        match cond {
            Condition::NC => !self.flag_get(CpuFlags::C),
            Condition::C => self.flag_get(CpuFlags::C),
            Condition::NZ => !self.flag_get(CpuFlags::Z),
            Condition::Z => self.flag_get(CpuFlags::Z),
            Condition::Unconditional => true,
        }
    }

    /// 5 M-cycles: two idle, the PC push, the vector jump, one idle.
    fn service_interrupt(&mut self) {
        self.ime = false;
        self.ime_next = false;

        self.cycle();
        self.cycle();

        let pc = self.regs.pc;
        self.stack_push(pc);

        // the source is resolved only after the push: on hardware the
        // push itself can clear IE and cancel the dispatch, which then
        // lands at 0x0000
        self.regs.pc = match self.interrupts.pending_interrupt() {
            Some(interrupt) => {
                self.interrupts.acknowledge_interrupt(interrupt);
                interrupt.vector()
            }
            None => 0x0000,
        };

        self.cycle();
    }

    fn next_instruction(&mut self) -> Result<(), CpuError> {
        let pc = self.regs.pc;

        let byte = if self.halt_bug {
            // glitched fetch: the byte is read but PC does not advance,
            // so it will be fetched again as the following instruction
            self.halt_bug = false;
            self.read_bus_cycle(pc)
        } else {
            self.fetch_next_pc()
        };

        let mut instruction = Instruction::from_byte(byte, pc);
        if instruction.opcode == Opcode::Prefix {
            instruction = Instruction::from_prefix(self.fetch_next_pc(), pc);
        }

        self.exec_instruction(instruction)
    }

    fn read_operand(&mut self, ty: OperandType) -> u16 {
        match ty {
            OperandType::RegA => self.regs.a as u16,
            OperandType::RegB => self.regs.b as u16,
            OperandType::RegC => self.regs.c as u16,
            OperandType::RegD => self.regs.d as u16,
            OperandType::RegE => self.regs.e as u16,
            OperandType::RegH => self.regs.h as u16,
            OperandType::RegL => self.regs.l as u16,
            OperandType::AddrHL => {
                let hl = self.regs.read_pair(Reg16::HL);
                self.read_bus_cycle(hl) as u16
            }
            OperandType::AddrHLDec => {
                let hl = self.regs.read_pair(Reg16::HL);
                self.bus.trigger_read_write(hl);
                let result = self.read_bus_cycle(hl) as u16;
                self.regs.write_pair(Reg16::HL, hl.wrapping_sub(1));
                result
            }
            OperandType::AddrHLInc => {
                let hl = self.regs.read_pair(Reg16::HL);
                self.bus.trigger_read_write(hl);
                let result = self.read_bus_cycle(hl) as u16;
                self.regs.write_pair(Reg16::HL, hl.wrapping_add(1));
                result
            }
            OperandType::AddrBC => {
                let bc = self.regs.read_pair(Reg16::BC);
                self.read_bus_cycle(bc) as u16
            }
            OperandType::AddrDE => {
                let de = self.regs.read_pair(Reg16::DE);
                self.read_bus_cycle(de) as u16
            }
            OperandType::RegAF => self.regs.read_pair(Reg16::AF),
            OperandType::RegBC => self.regs.read_pair(Reg16::BC),
            OperandType::RegDE => self.regs.read_pair(Reg16::DE),
            OperandType::RegHL => self.regs.read_pair(Reg16::HL),
            OperandType::RegSP => self.regs.sp,
            OperandType::Imm8 => self.fetch_next_pc() as u16,
            OperandType::Imm8Signed => self.fetch_next_pc() as i8 as i16 as u16,
            OperandType::Imm16 => self.fetch_word(),
            OperandType::HighAddr8 => {
                let addr = 0xFF00 | self.fetch_next_pc() as u16;
                self.read_bus_cycle(addr) as u16
            }
            OperandType::HighAddrC => self.read_bus_cycle(0xFF00 | self.regs.c as u16) as u16,
            OperandType::Addr16 => {
                let addr = self.fetch_word();
                self.read_bus_cycle(addr) as u16
            }
            OperandType::Implied => 0,
            OperandType::Addr16Val16 => unreachable!("16-bit store operand is write-only"),
        }
    }

    fn write_operand(&mut self, ty: OperandType, data: u16) {
        match ty {
            OperandType::RegA => self.regs.a = data as u8,
            OperandType::RegB => self.regs.b = data as u8,
            OperandType::RegC => self.regs.c = data as u8,
            OperandType::RegD => self.regs.d = data as u8,
            OperandType::RegE => self.regs.e = data as u8,
            OperandType::RegH => self.regs.h = data as u8,
            OperandType::RegL => self.regs.l = data as u8,
            OperandType::AddrHL => {
                let hl = self.regs.read_pair(Reg16::HL);
                self.write_bus_cycle(hl, data as u8);
            }
            OperandType::AddrHLDec => {
                let hl = self.regs.read_pair(Reg16::HL);
                self.bus.trigger_write(hl);
                self.write_bus_cycle(hl, data as u8);
                self.regs.write_pair(Reg16::HL, hl.wrapping_sub(1));
            }
            OperandType::AddrHLInc => {
                let hl = self.regs.read_pair(Reg16::HL);
                self.bus.trigger_write(hl);
                self.write_bus_cycle(hl, data as u8);
                self.regs.write_pair(Reg16::HL, hl.wrapping_add(1));
            }
            OperandType::AddrBC => {
                let bc = self.regs.read_pair(Reg16::BC);
                self.write_bus_cycle(bc, data as u8);
            }
            OperandType::AddrDE => {
                let de = self.regs.read_pair(Reg16::DE);
                self.write_bus_cycle(de, data as u8);
            }
            OperandType::RegAF => self.regs.write_pair(Reg16::AF, data),
            OperandType::RegBC => self.regs.write_pair(Reg16::BC, data),
            OperandType::RegDE => self.regs.write_pair(Reg16::DE, data),
            OperandType::RegHL => self.regs.write_pair(Reg16::HL, data),
            OperandType::RegSP => self.regs.sp = data,
            OperandType::HighAddr8 => {
                let addr = 0xFF00 | self.fetch_next_pc() as u16;
                self.write_bus_cycle(addr, data as u8);
            }
            OperandType::HighAddrC => {
                let addr = 0xFF00 | self.regs.c as u16;
                self.write_bus_cycle(addr, data as u8);
            }
            OperandType::Addr16 => {
                let addr = self.fetch_word();
                self.write_bus_cycle(addr, data as u8);
            }
            OperandType::Addr16Val16 => {
                let addr = self.fetch_word();
                self.write_bus_cycle(addr, data as u8);
                self.write_bus_cycle(addr.wrapping_add(1), (data >> 8) as u8);
            }
            OperandType::Implied => {}
            OperandType::Imm8 | OperandType::Imm8Signed | OperandType::Imm16 => {
                unreachable!("immediates are read-only")
            }
        }
    }

    fn exec_instruction(&mut self, instruction: Instruction) -> Result<(), CpuError> {
        let src = self.read_operand(instruction.src);

        let result = match instruction.opcode {
            Opcode::Nop => 0,
            Opcode::Ld => src,
            Opcode::LdSPHL => {
                // internal cycle for the 16-bit transfer
                self.cycle();
                src
            }
            Opcode::LdHLSPSigned8 => {
                let (result, half_carry, carry) = alu::add_signed_offset(self.regs.sp, src as u8);
                self.cycle();

                self.flag_set(CpuFlags::Z, false);
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, half_carry);
                self.flag_set(CpuFlags::C, carry);

                result
            }
            Opcode::Push => {
                self.cycle();
                self.stack_push(src);
                0
            }
            Opcode::Pop => self.stack_pop(),
            Opcode::Inc16 => {
                self.bus.trigger_write(src);
                self.cycle();
                src.wrapping_add(1)
            }
            Opcode::Dec16 => {
                self.bus.trigger_write(src);
                self.cycle();
                src.wrapping_sub(1)
            }
            Opcode::Inc => {
                let out = alu::add_bytes(src as u8, 1, false);

                self.flag_set(CpuFlags::Z, out.result == 0);
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, out.half_carry);

                out.result as u16
            }
            Opcode::Dec => {
                let out = alu::sub_bytes(src as u8, 1, false);

                self.flag_set(CpuFlags::Z, out.result == 0);
                self.flag_set(CpuFlags::N, true);
                self.flag_set(CpuFlags::H, out.half_carry);

                out.result as u16
            }
            Opcode::Add => {
                let out = alu::add_bytes(self.regs.a, src as u8, false);

                self.set_arithmetic_flags(&out, false);

                out.result as u16
            }
            Opcode::Adc => {
                let carry_in = self.flag_get(CpuFlags::C);
                let out = alu::add_bytes(self.regs.a, src as u8, carry_in);

                self.set_arithmetic_flags(&out, false);

                out.result as u16
            }
            Opcode::Sub => {
                let out = alu::sub_bytes(self.regs.a, src as u8, false);

                self.set_arithmetic_flags(&out, true);

                out.result as u16
            }
            Opcode::Sbc => {
                let borrow_in = self.flag_get(CpuFlags::C);
                let out = alu::sub_bytes(self.regs.a, src as u8, borrow_in);

                self.set_arithmetic_flags(&out, true);

                out.result as u16
            }
            Opcode::Cp => {
                // SUB with the result discarded
                let out = alu::sub_bytes(self.regs.a, src as u8, false);

                self.set_arithmetic_flags(&out, true);

                0
            }
            Opcode::Add16 => {
                let dest = self.read_operand(instruction.dest);
                let (result, half_carry, carry) = alu::add_words(dest, src);
                self.cycle();

                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, half_carry);
                self.flag_set(CpuFlags::C, carry);

                result
            }
            Opcode::AddSPSigned8 => {
                let (result, half_carry, carry) = alu::add_signed_offset(self.regs.sp, src as u8);
                self.cycle();
                self.cycle();

                self.flag_set(CpuFlags::Z, false);
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, half_carry);
                self.flag_set(CpuFlags::C, carry);

                result
            }
            Opcode::And => {
                let result = self.regs.a & src as u8;

                self.flag_set(CpuFlags::Z, result == 0);
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, true);
                self.flag_set(CpuFlags::C, false);

                result as u16
            }
            Opcode::Xor => {
                let result = self.regs.a ^ src as u8;

                self.flag_set(CpuFlags::Z, result == 0);
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, false);
                self.flag_set(CpuFlags::C, false);

                result as u16
            }
            Opcode::Or => {
                let result = self.regs.a | src as u8;

                self.flag_set(CpuFlags::Z, result == 0);
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, false);
                self.flag_set(CpuFlags::C, false);

                result as u16
            }
            Opcode::Jp(cond) => {
                if self.check_cond(cond) {
                    self.cycle();
                    self.regs.pc = src;
                }
                0
            }
            Opcode::JpHL => {
                self.regs.pc = src;
                0
            }
            Opcode::Jr(cond) => {
                if self.check_cond(cond) {
                    self.cycle();
                    self.regs.pc = self.regs.pc.wrapping_add(src);
                }
                0
            }
            Opcode::Call(cond) => {
                if self.check_cond(cond) {
                    self.cycle();
                    self.stack_push(self.regs.pc);
                    self.regs.pc = src;
                }
                0
            }
            Opcode::Ret(cond) => {
                // conditional RET spends an extra cycle on the check
                if cond != Condition::Unconditional {
                    self.cycle();
                }
                if self.check_cond(cond) {
                    self.regs.pc = self.stack_pop();
                    self.cycle();
                }
                0
            }
            Opcode::Reti => {
                self.regs.pc = self.stack_pop();
                self.cycle();
                // unlike EI, RETI enables interrupts without delay
                self.ime = true;
                self.ime_next = false;
                0
            }
            Opcode::Rst(loc) => {
                self.cycle();
                self.stack_push(self.regs.pc);
                self.regs.pc = loc as u16;
                0
            }
            Opcode::Di => {
                self.ime = false;
                self.ime_next = false;
                0
            }
            Opcode::Ei => {
                self.ime_next = true;
                0
            }
            Opcode::Ccf => {
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, false);
                let carry = self.flag_get(CpuFlags::C);
                self.flag_set(CpuFlags::C, !carry);
                0
            }
            Opcode::Scf => {
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, false);
                self.flag_set(CpuFlags::C, true);
                0
            }
            Opcode::Daa => {
                let carry = self.flag_get(CpuFlags::C);
                let half_carry = self.flag_get(CpuFlags::H);

                if !self.flag_get(CpuFlags::N) {
                    let mut correction = 0u8;
                    if half_carry || self.regs.a & 0xF > 0x9 {
                        correction |= 0x06;
                    }
                    if carry || self.regs.a > 0x99 {
                        correction |= 0x60;
                        self.flag_set(CpuFlags::C, true);
                    }
                    self.regs.a = self.regs.a.wrapping_add(correction);
                } else if carry {
                    // -0x66 / -0x60 after a subtraction
                    self.regs.a = self
                        .regs
                        .a
                        .wrapping_add(if half_carry { 0x9A } else { 0xA0 });
                } else if half_carry {
                    // -0x06
                    self.regs.a = self.regs.a.wrapping_add(0xFA);
                }

                self.flag_set(CpuFlags::Z, self.regs.a == 0);
                self.flag_set(CpuFlags::H, false);
                0
            }
            Opcode::Cpl => {
                self.regs.a = !self.regs.a;

                self.flag_set(CpuFlags::N, true);
                self.flag_set(CpuFlags::H, true);
                0
            }
            Opcode::Rlca => {
                let carry = self.regs.a >> 7;
                self.regs.a = self.regs.a << 1 | carry;

                self.set_rotate_a_flags(carry == 1);
                0
            }
            Opcode::Rla => {
                let carry = self.regs.a >> 7;
                self.regs.a = self.regs.a << 1 | self.flag_get(CpuFlags::C) as u8;

                self.set_rotate_a_flags(carry == 1);
                0
            }
            Opcode::Rrca => {
                let carry = self.regs.a & 1;
                self.regs.a = self.regs.a >> 1 | carry << 7;

                self.set_rotate_a_flags(carry == 1);
                0
            }
            Opcode::Rra => {
                let carry = self.regs.a & 1;
                self.regs.a = self.regs.a >> 1 | (self.flag_get(CpuFlags::C) as u8) << 7;

                self.set_rotate_a_flags(carry == 1);
                0
            }
            Opcode::Rlc => {
                let src = src as u8;
                let carry = src >> 7;
                let result = src << 1 | carry;

                self.set_shift_flags(result, carry == 1);
                result as u16
            }
            Opcode::Rrc => {
                let src = src as u8;
                let carry = src & 1;
                let result = src >> 1 | carry << 7;

                self.set_shift_flags(result, carry == 1);
                result as u16
            }
            Opcode::Rl => {
                let src = src as u8;
                let carry = src >> 7;
                let result = src << 1 | self.flag_get(CpuFlags::C) as u8;

                self.set_shift_flags(result, carry == 1);
                result as u16
            }
            Opcode::Rr => {
                let src = src as u8;
                let carry = src & 1;
                let result = src >> 1 | (self.flag_get(CpuFlags::C) as u8) << 7;

                self.set_shift_flags(result, carry == 1);
                result as u16
            }
            Opcode::Sla => {
                let src = src as u8;
                let carry = src >> 7;
                let result = src << 1;

                self.set_shift_flags(result, carry == 1);
                result as u16
            }
            Opcode::Sra => {
                let src = src as u8;
                let carry = src & 1;
                let result = src >> 1 | src & 0x80;

                self.set_shift_flags(result, carry == 1);
                result as u16
            }
            Opcode::Swap => {
                let src = src as u8;
                let result = src >> 4 | src << 4;

                self.set_shift_flags(result, false);
                result as u16
            }
            Opcode::Srl => {
                let src = src as u8;
                let carry = src & 1;
                let result = src >> 1;

                self.set_shift_flags(result, carry == 1);
                result as u16
            }
            Opcode::Bit(bit) => {
                self.flag_set(CpuFlags::Z, (src >> bit) & 1 == 0);
                self.flag_set(CpuFlags::N, false);
                self.flag_set(CpuFlags::H, true);
                0
            }
            Opcode::Res(bit) => src & !(1u16 << bit),
            Opcode::Set(bit) => src | 1u16 << bit,
            Opcode::Halt => {
                if !self.ime && self.interrupts.has_pending_interrupt() {
                    // HALT bug: the CPU does not halt; the following
                    // fetch reads its byte without advancing PC
                    self.halt_bug = true;
                } else {
                    self.state = CpuState::Halted;
                }
                0
            }
            Opcode::Stop => {
                self.state = CpuState::Stopped;
                0
            }
            Opcode::Illegal => {
                return Err(CpuError::InvalidOpcode {
                    opcode: instruction.byte,
                    pc: instruction.pc,
                });
            }
            Opcode::Prefix => unreachable!("prefix is resolved during decode"),
        };

        self.write_operand(instruction.dest, result);

        Ok(())
    }

    fn set_arithmetic_flags(&mut self, out: &alu::AluResult, subtract: bool) {
        self.flag_set(CpuFlags::Z, out.result == 0);
        self.flag_set(CpuFlags::N, subtract);
        self.flag_set(CpuFlags::H, out.half_carry);
        self.flag_set(CpuFlags::C, out.carry);
    }

    /// The accumulator rotates always clear Z.
    fn set_rotate_a_flags(&mut self, carry: bool) {
        self.flag_set(CpuFlags::Z, false);
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, false);
        self.flag_set(CpuFlags::C, carry);
    }

    fn set_shift_flags(&mut self, result: u8, carry: bool) {
        self.flag_set(CpuFlags::Z, result == 0);
        self.flag_set(CpuFlags::N, false);
        self.flag_set(CpuFlags::H, false);
        self.flag_set(CpuFlags::C, carry);
    }
}
