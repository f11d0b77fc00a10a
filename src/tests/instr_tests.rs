//! Flag and result semantics for the instruction groups the driver
//! tests do not already pin down.

use super::TestSystem;
use crate::{CpuError, CpuState, InterruptType, Reg16, Reg8};

#[test]
fn add_and_adc_flags() {
    // ADD A,0x0F ; ADC A,0xFF
    let mut sys = TestSystem::new(&[0xC6, 0x0F, 0xCE, 0xFF]);
    sys.cpu.set_register(Reg8::A, 0x01);
    sys.cpu.set_register(Reg8::F, 0x00);

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x10);
    assert_eq!(sys.cpu.register(Reg8::F), 0x20); // H

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x0F);
    assert_eq!(sys.cpu.register(Reg8::F), 0x10); // C
}

#[test]
fn sub_and_cp_flags() {
    // SUB 0x21 ; CP 0xFF
    let mut sys = TestSystem::new(&[0xD6, 0x21, 0xFE, 0xFF]);
    sys.cpu.set_register(Reg8::A, 0x20);
    sys.cpu.set_register(Reg8::F, 0x00);

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0xFF);
    assert_eq!(sys.cpu.register(Reg8::F), 0x70); // N H C

    sys.run_steps(1);
    // comparison discards the result but sets the SUB flags
    assert_eq!(sys.cpu.register(Reg8::A), 0xFF);
    assert_eq!(sys.cpu.register(Reg8::F), 0xC0); // Z N
}

#[test]
fn inc_and_dec_leave_carry_untouched() {
    // INC A ; DEC A
    let mut sys = TestSystem::new(&[0x3C, 0x3D]);
    sys.cpu.set_register(Reg8::A, 0xFF);
    sys.cpu.set_register(Reg8::F, 0x10); // C

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x00);
    assert_eq!(sys.cpu.register(Reg8::F), 0xB0); // Z H, C preserved

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0xFF);
    assert_eq!(sys.cpu.register(Reg8::F), 0x70); // N H, C preserved
}

#[test]
fn bitwise_flags() {
    // AND 0x0F ; OR 0x0F ; XOR A
    let mut sys = TestSystem::new(&[0xE6, 0x0F, 0xF6, 0x0F, 0xAF]);
    sys.cpu.set_register(Reg8::A, 0xF0);

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x00);
    assert_eq!(sys.cpu.register(Reg8::F), 0xA0); // Z H

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x0F);
    assert_eq!(sys.cpu.register(Reg8::F), 0x00);

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x00);
    assert_eq!(sys.cpu.register(Reg8::F), 0x80); // Z
}

#[test]
fn daa_after_addition_and_subtraction() {
    // ADD A,0x38 ; DAA ; SUB 0x13 ; DAA
    let mut sys = TestSystem::new(&[0xC6, 0x38, 0x27, 0xD6, 0x13, 0x27]);
    sys.cpu.set_register(Reg8::A, 0x45);
    sys.cpu.set_register(Reg8::F, 0x00);

    sys.run_steps(2);
    assert_eq!(sys.cpu.register(Reg8::A), 0x83); // BCD 45 + 38
    assert_eq!(sys.cpu.register(Reg8::F), 0x00);

    sys.run_steps(2);
    assert_eq!(sys.cpu.register(Reg8::A), 0x70); // BCD 83 - 13
    assert_eq!(sys.cpu.register(Reg8::F), 0x40); // N
}

#[test]
fn pop_af_masks_the_flag_low_nibble() {
    let mut sys = TestSystem::new(&[0xF1]);
    sys.cpu.set_register_pair(Reg16::SP, 0xC000);
    sys.write_mem(0xC000, 0xFF);
    sys.write_mem(0xC001, 0x12);

    sys.run_steps(1);

    assert_eq!(sys.cpu.register_pair(Reg16::AF), 0x12F0);
}

#[test]
fn add_sp_signed_flags_come_from_low_byte() {
    // ADD SP,+2 from 0xFFF8 does not carry out of the low byte
    let mut sys = TestSystem::new(&[0xE8, 0x02]);
    sys.cpu.set_register_pair(Reg16::SP, 0xFFF8);
    sys.cpu.set_register(Reg8::F, 0xF0);

    sys.run_steps(1);

    assert_eq!(sys.cpu.register_pair(Reg16::SP), 0xFFFA);
    assert_eq!(sys.cpu.register(Reg8::F), 0x00);
}

#[test]
fn ld_hl_sp_signed() {
    let mut sys = TestSystem::new(&[0xF8, 0x01]);
    sys.cpu.set_register_pair(Reg16::SP, 0x00FF);

    sys.run_steps(1);

    assert_eq!(sys.cpu.register_pair(Reg16::HL), 0x0100);
    assert_eq!(sys.cpu.register_pair(Reg16::SP), 0x00FF);
    assert_eq!(sys.cpu.register(Reg8::F), 0x30); // H C
}

#[test]
fn add_hl_reports_high_byte_carries_and_keeps_z() {
    let mut sys = TestSystem::new(&[0x09]);
    sys.cpu.set_register_pair(Reg16::HL, 0x0FFF);
    sys.cpu.set_register_pair(Reg16::BC, 0x0001);
    sys.cpu.set_register(Reg8::F, 0x80); // Z

    sys.run_steps(1);

    assert_eq!(sys.cpu.register_pair(Reg16::HL), 0x1000);
    assert_eq!(sys.cpu.register(Reg8::F), 0xA0); // Z untouched, H
}

#[test]
fn accumulator_rotates_clear_z() {
    // RLA ; RLCA
    let mut sys = TestSystem::new(&[0x17, 0x07]);
    sys.cpu.set_register(Reg8::A, 0x80);
    sys.cpu.set_register(Reg8::F, 0x80); // Z set, C clear

    // shifting out the only set bit leaves zero, yet Z stays clear
    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x00);
    assert_eq!(sys.cpu.register(Reg8::F), 0x10); // C

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x00);
    assert_eq!(sys.cpu.register(Reg8::F), 0x00);
}

#[test]
fn prefixed_rotates_do_set_z() {
    // RLC B with B == 0
    let mut sys = TestSystem::new(&[0xCB, 0x00]);
    sys.cpu.set_register(Reg8::B, 0x00);
    sys.cpu.set_register(Reg8::F, 0x10);

    sys.run_steps(1);

    assert_eq!(sys.cpu.register(Reg8::B), 0x00);
    assert_eq!(sys.cpu.register(Reg8::F), 0x80); // Z
}

#[test]
fn shifts_and_swap() {
    // SRA B ; SWAP A ; SRL A
    let mut sys = TestSystem::new(&[0xCB, 0x28, 0xCB, 0x37, 0xCB, 0x3F]);
    sys.cpu.set_register(Reg8::B, 0x81);
    sys.cpu.set_register(Reg8::A, 0xF1);
    sys.cpu.set_register(Reg8::F, 0x00);

    sys.run_steps(1);
    // arithmetic shift keeps the sign bit
    assert_eq!(sys.cpu.register(Reg8::B), 0xC0);
    assert_eq!(sys.cpu.register(Reg8::F), 0x10); // C

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x1F);
    assert_eq!(sys.cpu.register(Reg8::F), 0x00);

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x0F);
    assert_eq!(sys.cpu.register(Reg8::F), 0x10); // C
}

#[test]
fn bit_res_set_on_memory() {
    // BIT 7,(HL) ; RES 7,(HL) ; SET 0,(HL)
    let mut sys = TestSystem::new(&[0xCB, 0x7E, 0xCB, 0xBE, 0xCB, 0xC6]);
    sys.cpu.set_register_pair(Reg16::HL, 0xC000);
    sys.cpu.set_register(Reg8::F, 0x10);
    sys.write_mem(0xC000, 0x80);

    sys.run_steps(1);
    // bit is set, so Z is clear; C is preserved
    assert_eq!(sys.cpu.register(Reg8::F), 0x30); // H C

    sys.run_steps(1);
    assert_eq!(sys.read_mem(0xC000), 0x00);

    sys.run_steps(1);
    assert_eq!(sys.read_mem(0xC000), 0x01);
}

#[test]
fn jr_with_negative_offset() {
    let mut sys = TestSystem::new(&[0x18, 0xFE]); // JR -2

    sys.run_steps(1);

    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x0100);
}

#[test]
fn jp_hl_is_a_plain_register_copy() {
    let mut sys = TestSystem::new(&[0xE9]);
    sys.cpu.set_register_pair(Reg16::HL, 0x4321);

    sys.run_steps(1);

    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x4321);
    assert_eq!(sys.cpu.register_pair(Reg16::HL), 0x4321);
}

#[test]
fn hl_post_inc_dec_accesses() {
    // LD A,(HL+) ; LD (HL-),A
    let mut sys = TestSystem::new(&[0x2A, 0x32]);
    sys.cpu.set_register_pair(Reg16::HL, 0xC123);
    sys.write_mem(0xC123, 0x5A);

    sys.run_steps(1);
    assert_eq!(sys.cpu.register(Reg8::A), 0x5A);
    assert_eq!(sys.cpu.register_pair(Reg16::HL), 0xC124);

    sys.run_steps(1);
    assert_eq!(sys.read_mem(0xC124), 0x5A);
    assert_eq!(sys.cpu.register_pair(Reg16::HL), 0xC123);
}

#[test]
fn corruption_triggers_fire_before_the_commit() {
    // LD A,(HL+) ; LD (HL-),A ; INC BC ; DEC DE
    let mut sys = TestSystem::new(&[0x2A, 0x32, 0x03, 0x1B]);
    sys.cpu.set_register_pair(Reg16::HL, 0xFE12);
    sys.cpu.set_register_pair(Reg16::BC, 0xFE34);
    sys.cpu.set_register_pair(Reg16::DE, 0xFE56);

    sys.run_steps(4);

    let ram = sys.ram.borrow();
    assert_eq!(ram.read_write_triggers, [0xFE12]);
    // the write variant fires for both the store and the two 16-bit
    // increment/decrement commits, with the pre-commit value
    assert_eq!(ram.write_triggers, [0xFE13, 0xFE34, 0xFE56]);
}

#[test]
fn stop_is_terminal_until_reset() {
    let mut sys = TestSystem::new(&[0x10]);

    assert_eq!(sys.step_timed(), 1);
    assert_eq!(sys.cpu.state(), CpuState::Stopped);

    // pending interrupts do not leave STOP
    sys.raise_interrupt(InterruptType::Joypad);
    assert_eq!(sys.step_timed(), 0);
    assert_eq!(sys.cpu.state(), CpuState::Stopped);

    sys.cpu.reset();
    assert_eq!(sys.cpu.state(), CpuState::Running);
    assert_eq!(sys.cpu.register_pair(Reg16::PC), 0x0100);
}

#[test]
fn illegal_opcode_stops_the_cpu() {
    let mut sys = TestSystem::new(&[0xD3]);

    let err = sys.cpu.step().unwrap_err();
    assert_eq!(
        err,
        CpuError::InvalidOpcode {
            opcode: 0xD3,
            pc: 0x0100
        }
    );
    assert_eq!(err.to_string(), "invalid opcode 0xD3 at 0x0100");
    assert_eq!(sys.cpu.state(), CpuState::Stopped);

    // stays a no-op afterwards
    assert_eq!(sys.step_timed(), 0);
}
