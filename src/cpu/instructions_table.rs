use super::instruction::{Condition, Opcode, OperandType};

use Opcode::*;
use OperandType::*;

type Entry = (Opcode, (OperandType, OperandType));

/// Base opcode table. Every byte maps to a handler; the unmapped holes
/// of the SM83 map resolve to `Illegal`, which is a fatal decode error
/// rather than a silent NOP.
#[rustfmt::skip]
pub(super) const INSTRUCTIONS: [Entry; 256] = [
    (Nop, (Implied, Implied)),                            // 0x00 NOP
    (Ld, (RegBC, Imm16)),                                 // 0x01 LD BC,d16
    (Ld, (AddrBC, RegA)),                                 // 0x02 LD (BC),A
    (Inc16, (RegBC, RegBC)),                              // 0x03 INC BC
    (Inc, (RegB, RegB)),                                  // 0x04 INC B
    (Dec, (RegB, RegB)),                                  // 0x05 DEC B
    (Ld, (RegB, Imm8)),                                   // 0x06 LD B,d8
    (Rlca, (Implied, Implied)),                           // 0x07 RLCA
    (Ld, (Addr16Val16, RegSP)),                           // 0x08 LD (a16),SP
    (Add16, (RegHL, RegBC)),                              // 0x09 ADD HL,BC
    (Ld, (RegA, AddrBC)),                                 // 0x0A LD A,(BC)
    (Dec16, (RegBC, RegBC)),                              // 0x0B DEC BC
    (Inc, (RegC, RegC)),                                  // 0x0C INC C
    (Dec, (RegC, RegC)),                                  // 0x0D DEC C
    (Ld, (RegC, Imm8)),                                   // 0x0E LD C,d8
    (Rrca, (Implied, Implied)),                           // 0x0F RRCA
    (Stop, (Implied, Implied)),                           // 0x10 STOP
    (Ld, (RegDE, Imm16)),                                 // 0x11 LD DE,d16
    (Ld, (AddrDE, RegA)),                                 // 0x12 LD (DE),A
    (Inc16, (RegDE, RegDE)),                              // 0x13 INC DE
    (Inc, (RegD, RegD)),                                  // 0x14 INC D
    (Dec, (RegD, RegD)),                                  // 0x15 DEC D
    (Ld, (RegD, Imm8)),                                   // 0x16 LD D,d8
    (Rla, (Implied, Implied)),                            // 0x17 RLA
    (Jr(Condition::Unconditional), (Implied, Imm8Signed)), // 0x18 JR r8
    (Add16, (RegHL, RegDE)),                              // 0x19 ADD HL,DE
    (Ld, (RegA, AddrDE)),                                 // 0x1A LD A,(DE)
    (Dec16, (RegDE, RegDE)),                              // 0x1B DEC DE
    (Inc, (RegE, RegE)),                                  // 0x1C INC E
    (Dec, (RegE, RegE)),                                  // 0x1D DEC E
    (Ld, (RegE, Imm8)),                                   // 0x1E LD E,d8
    (Rra, (Implied, Implied)),                            // 0x1F RRA
    (Jr(Condition::NZ), (Implied, Imm8Signed)),           // 0x20 JR NZ,r8
    (Ld, (RegHL, Imm16)),                                 // 0x21 LD HL,d16
    (Ld, (AddrHLInc, RegA)),                              // 0x22 LD (HL+),A
    (Inc16, (RegHL, RegHL)),                              // 0x23 INC HL
    (Inc, (RegH, RegH)),                                  // 0x24 INC H
    (Dec, (RegH, RegH)),                                  // 0x25 DEC H
    (Ld, (RegH, Imm8)),                                   // 0x26 LD H,d8
    (Daa, (Implied, Implied)),                            // 0x27 DAA
    (Jr(Condition::Z), (Implied, Imm8Signed)),            // 0x28 JR Z,r8
    (Add16, (RegHL, RegHL)),                              // 0x29 ADD HL,HL
    (Ld, (RegA, AddrHLInc)),                              // 0x2A LD A,(HL+)
    (Dec16, (RegHL, RegHL)),                              // 0x2B DEC HL
    (Inc, (RegL, RegL)),                                  // 0x2C INC L
    (Dec, (RegL, RegL)),                                  // 0x2D DEC L
    (Ld, (RegL, Imm8)),                                   // 0x2E LD L,d8
    (Cpl, (Implied, Implied)),                            // 0x2F CPL
    (Jr(Condition::NC), (Implied, Imm8Signed)),           // 0x30 JR NC,r8
    (Ld, (RegSP, Imm16)),                                 // 0x31 LD SP,d16
    (Ld, (AddrHLDec, RegA)),                              // 0x32 LD (HL-),A
    (Inc16, (RegSP, RegSP)),                              // 0x33 INC SP
    (Inc, (AddrHL, AddrHL)),                              // 0x34 INC (HL)
    (Dec, (AddrHL, AddrHL)),                              // 0x35 DEC (HL)
    (Ld, (AddrHL, Imm8)),                                 // 0x36 LD (HL),d8
    (Scf, (Implied, Implied)),                            // 0x37 SCF
    (Jr(Condition::C), (Implied, Imm8Signed)),            // 0x38 JR C,r8
    (Add16, (RegHL, RegSP)),                              // 0x39 ADD HL,SP
    (Ld, (RegA, AddrHLDec)),                              // 0x3A LD A,(HL-)
    (Dec16, (RegSP, RegSP)),                              // 0x3B DEC SP
    (Inc, (RegA, RegA)),                                  // 0x3C INC A
    (Dec, (RegA, RegA)),                                  // 0x3D DEC A
    (Ld, (RegA, Imm8)),                                   // 0x3E LD A,d8
    (Ccf, (Implied, Implied)),                            // 0x3F CCF
    (Ld, (RegB, RegB)),                                   // 0x40 LD B,B
    (Ld, (RegB, RegC)),                                   // 0x41 LD B,C
    (Ld, (RegB, RegD)),                                   // 0x42 LD B,D
    (Ld, (RegB, RegE)),                                   // 0x43 LD B,E
    (Ld, (RegB, RegH)),                                   // 0x44 LD B,H
    (Ld, (RegB, RegL)),                                   // 0x45 LD B,L
    (Ld, (RegB, AddrHL)),                                 // 0x46 LD B,(HL)
    (Ld, (RegB, RegA)),                                   // 0x47 LD B,A
    (Ld, (RegC, RegB)),                                   // 0x48 LD C,B
    (Ld, (RegC, RegC)),                                   // 0x49 LD C,C
    (Ld, (RegC, RegD)),                                   // 0x4A LD C,D
    (Ld, (RegC, RegE)),                                   // 0x4B LD C,E
    (Ld, (RegC, RegH)),                                   // 0x4C LD C,H
    (Ld, (RegC, RegL)),                                   // 0x4D LD C,L
    (Ld, (RegC, AddrHL)),                                 // 0x4E LD C,(HL)
    (Ld, (RegC, RegA)),                                   // 0x4F LD C,A
    (Ld, (RegD, RegB)),                                   // 0x50 LD D,B
    (Ld, (RegD, RegC)),                                   // 0x51 LD D,C
    (Ld, (RegD, RegD)),                                   // 0x52 LD D,D
    (Ld, (RegD, RegE)),                                   // 0x53 LD D,E
    (Ld, (RegD, RegH)),                                   // 0x54 LD D,H
    (Ld, (RegD, RegL)),                                   // 0x55 LD D,L
    (Ld, (RegD, AddrHL)),                                 // 0x56 LD D,(HL)
    (Ld, (RegD, RegA)),                                   // 0x57 LD D,A
    (Ld, (RegE, RegB)),                                   // 0x58 LD E,B
    (Ld, (RegE, RegC)),                                   // 0x59 LD E,C
    (Ld, (RegE, RegD)),                                   // 0x5A LD E,D
    (Ld, (RegE, RegE)),                                   // 0x5B LD E,E
    (Ld, (RegE, RegH)),                                   // 0x5C LD E,H
    (Ld, (RegE, RegL)),                                   // 0x5D LD E,L
    (Ld, (RegE, AddrHL)),                                 // 0x5E LD E,(HL)
    (Ld, (RegE, RegA)),                                   // 0x5F LD E,A
    (Ld, (RegH, RegB)),                                   // 0x60 LD H,B
    (Ld, (RegH, RegC)),                                   // 0x61 LD H,C
    (Ld, (RegH, RegD)),                                   // 0x62 LD H,D
    (Ld, (RegH, RegE)),                                   // 0x63 LD H,E
    (Ld, (RegH, RegH)),                                   // 0x64 LD H,H
    (Ld, (RegH, RegL)),                                   // 0x65 LD H,L
    (Ld, (RegH, AddrHL)),                                 // 0x66 LD H,(HL)
    (Ld, (RegH, RegA)),                                   // 0x67 LD H,A
    (Ld, (RegL, RegB)),                                   // 0x68 LD L,B
    (Ld, (RegL, RegC)),                                   // 0x69 LD L,C
    (Ld, (RegL, RegD)),                                   // 0x6A LD L,D
    (Ld, (RegL, RegE)),                                   // 0x6B LD L,E
    (Ld, (RegL, RegH)),                                   // 0x6C LD L,H
    (Ld, (RegL, RegL)),                                   // 0x6D LD L,L
    (Ld, (RegL, AddrHL)),                                 // 0x6E LD L,(HL)
    (Ld, (RegL, RegA)),                                   // 0x6F LD L,A
    (Ld, (AddrHL, RegB)),                                 // 0x70 LD (HL),B
    (Ld, (AddrHL, RegC)),                                 // 0x71 LD (HL),C
    (Ld, (AddrHL, RegD)),                                 // 0x72 LD (HL),D
    (Ld, (AddrHL, RegE)),                                 // 0x73 LD (HL),E
    (Ld, (AddrHL, RegH)),                                 // 0x74 LD (HL),H
    (Ld, (AddrHL, RegL)),                                 // 0x75 LD (HL),L
    (Halt, (Implied, Implied)),                           // 0x76 HALT
    (Ld, (AddrHL, RegA)),                                 // 0x77 LD (HL),A
    (Ld, (RegA, RegB)),                                   // 0x78 LD A,B
    (Ld, (RegA, RegC)),                                   // 0x79 LD A,C
    (Ld, (RegA, RegD)),                                   // 0x7A LD A,D
    (Ld, (RegA, RegE)),                                   // 0x7B LD A,E
    (Ld, (RegA, RegH)),                                   // 0x7C LD A,H
    (Ld, (RegA, RegL)),                                   // 0x7D LD A,L
    (Ld, (RegA, AddrHL)),                                 // 0x7E LD A,(HL)
    (Ld, (RegA, RegA)),                                   // 0x7F LD A,A
    (Add, (RegA, RegB)),                                  // 0x80 ADD A,B
    (Add, (RegA, RegC)),                                  // 0x81 ADD A,C
    (Add, (RegA, RegD)),                                  // 0x82 ADD A,D
    (Add, (RegA, RegE)),                                  // 0x83 ADD A,E
    (Add, (RegA, RegH)),                                  // 0x84 ADD A,H
    (Add, (RegA, RegL)),                                  // 0x85 ADD A,L
    (Add, (RegA, AddrHL)),                                // 0x86 ADD A,(HL)
    (Add, (RegA, RegA)),                                  // 0x87 ADD A,A
    (Adc, (RegA, RegB)),                                  // 0x88 ADC A,B
    (Adc, (RegA, RegC)),                                  // 0x89 ADC A,C
    (Adc, (RegA, RegD)),                                  // 0x8A ADC A,D
    (Adc, (RegA, RegE)),                                  // 0x8B ADC A,E
    (Adc, (RegA, RegH)),                                  // 0x8C ADC A,H
    (Adc, (RegA, RegL)),                                  // 0x8D ADC A,L
    (Adc, (RegA, AddrHL)),                                // 0x8E ADC A,(HL)
    (Adc, (RegA, RegA)),                                  // 0x8F ADC A,A
    (Sub, (RegA, RegB)),                                  // 0x90 SUB B
    (Sub, (RegA, RegC)),                                  // 0x91 SUB C
    (Sub, (RegA, RegD)),                                  // 0x92 SUB D
    (Sub, (RegA, RegE)),                                  // 0x93 SUB E
    (Sub, (RegA, RegH)),                                  // 0x94 SUB H
    (Sub, (RegA, RegL)),                                  // 0x95 SUB L
    (Sub, (RegA, AddrHL)),                                // 0x96 SUB (HL)
    (Sub, (RegA, RegA)),                                  // 0x97 SUB A
    (Sbc, (RegA, RegB)),                                  // 0x98 SBC A,B
    (Sbc, (RegA, RegC)),                                  // 0x99 SBC A,C
    (Sbc, (RegA, RegD)),                                  // 0x9A SBC A,D
    (Sbc, (RegA, RegE)),                                  // 0x9B SBC A,E
    (Sbc, (RegA, RegH)),                                  // 0x9C SBC A,H
    (Sbc, (RegA, RegL)),                                  // 0x9D SBC A,L
    (Sbc, (RegA, AddrHL)),                                // 0x9E SBC A,(HL)
    (Sbc, (RegA, RegA)),                                  // 0x9F SBC A,A
    (And, (RegA, RegB)),                                  // 0xA0 AND B
    (And, (RegA, RegC)),                                  // 0xA1 AND C
    (And, (RegA, RegD)),                                  // 0xA2 AND D
    (And, (RegA, RegE)),                                  // 0xA3 AND E
    (And, (RegA, RegH)),                                  // 0xA4 AND H
    (And, (RegA, RegL)),                                  // 0xA5 AND L
    (And, (RegA, AddrHL)),                                // 0xA6 AND (HL)
    (And, (RegA, RegA)),                                  // 0xA7 AND A
    (Xor, (RegA, RegB)),                                  // 0xA8 XOR B
    (Xor, (RegA, RegC)),                                  // 0xA9 XOR C
    (Xor, (RegA, RegD)),                                  // 0xAA XOR D
    (Xor, (RegA, RegE)),                                  // 0xAB XOR E
    (Xor, (RegA, RegH)),                                  // 0xAC XOR H
    (Xor, (RegA, RegL)),                                  // 0xAD XOR L
    (Xor, (RegA, AddrHL)),                                // 0xAE XOR (HL)
    (Xor, (RegA, RegA)),                                  // 0xAF XOR A
    (Or, (RegA, RegB)),                                   // 0xB0 OR B
    (Or, (RegA, RegC)),                                   // 0xB1 OR C
    (Or, (RegA, RegD)),                                   // 0xB2 OR D
    (Or, (RegA, RegE)),                                   // 0xB3 OR E
    (Or, (RegA, RegH)),                                   // 0xB4 OR H
    (Or, (RegA, RegL)),                                   // 0xB5 OR L
    (Or, (RegA, AddrHL)),                                 // 0xB6 OR (HL)
    (Or, (RegA, RegA)),                                   // 0xB7 OR A
    (Cp, (Implied, RegB)),                                // 0xB8 CP B
    (Cp, (Implied, RegC)),                                // 0xB9 CP C
    (Cp, (Implied, RegD)),                                // 0xBA CP D
    (Cp, (Implied, RegE)),                                // 0xBB CP E
    (Cp, (Implied, RegH)),                                // 0xBC CP H
    (Cp, (Implied, RegL)),                                // 0xBD CP L
    (Cp, (Implied, AddrHL)),                              // 0xBE CP (HL)
    (Cp, (Implied, RegA)),                                // 0xBF CP A
    (Ret(Condition::NZ), (Implied, Implied)),             // 0xC0 RET NZ
    (Pop, (RegBC, Implied)),                              // 0xC1 POP BC
    (Jp(Condition::NZ), (Implied, Imm16)),                // 0xC2 JP NZ,a16
    (Jp(Condition::Unconditional), (Implied, Imm16)),     // 0xC3 JP a16
    (Call(Condition::NZ), (Implied, Imm16)),              // 0xC4 CALL NZ,a16
    (Push, (Implied, RegBC)),                             // 0xC5 PUSH BC
    (Add, (RegA, Imm8)),                                  // 0xC6 ADD A,d8
    (Rst(0x00), (Implied, Implied)),                      // 0xC7 RST 00
    (Ret(Condition::Z), (Implied, Implied)),              // 0xC8 RET Z
    (Ret(Condition::Unconditional), (Implied, Implied)),  // 0xC9 RET
    (Jp(Condition::Z), (Implied, Imm16)),                 // 0xCA JP Z,a16
    (Prefix, (Implied, Implied)),                         // 0xCB PREFIX CB
    (Call(Condition::Z), (Implied, Imm16)),               // 0xCC CALL Z,a16
    (Call(Condition::Unconditional), (Implied, Imm16)),   // 0xCD CALL a16
    (Adc, (RegA, Imm8)),                                  // 0xCE ADC A,d8
    (Rst(0x08), (Implied, Implied)),                      // 0xCF RST 08
    (Ret(Condition::NC), (Implied, Implied)),             // 0xD0 RET NC
    (Pop, (RegDE, Implied)),                              // 0xD1 POP DE
    (Jp(Condition::NC), (Implied, Imm16)),                // 0xD2 JP NC,a16
    (Illegal, (Implied, Implied)),                        // 0xD3
    (Call(Condition::NC), (Implied, Imm16)),              // 0xD4 CALL NC,a16
    (Push, (Implied, RegDE)),                             // 0xD5 PUSH DE
    (Sub, (RegA, Imm8)),                                  // 0xD6 SUB d8
    (Rst(0x10), (Implied, Implied)),                      // 0xD7 RST 10
    (Ret(Condition::C), (Implied, Implied)),              // 0xD8 RET C
    (Reti, (Implied, Implied)),                           // 0xD9 RETI
    (Jp(Condition::C), (Implied, Imm16)),                 // 0xDA JP C,a16
    (Illegal, (Implied, Implied)),                        // 0xDB
    (Call(Condition::C), (Implied, Imm16)),               // 0xDC CALL C,a16
    (Illegal, (Implied, Implied)),                        // 0xDD
    (Sbc, (RegA, Imm8)),                                  // 0xDE SBC A,d8
    (Rst(0x18), (Implied, Implied)),                      // 0xDF RST 18
    (Ld, (HighAddr8, RegA)),                              // 0xE0 LDH (a8),A
    (Pop, (RegHL, Implied)),                              // 0xE1 POP HL
    (Ld, (HighAddrC, RegA)),                              // 0xE2 LD (C),A
    (Illegal, (Implied, Implied)),                        // 0xE3
    (Illegal, (Implied, Implied)),                        // 0xE4
    (Push, (Implied, RegHL)),                             // 0xE5 PUSH HL
    (And, (RegA, Imm8)),                                  // 0xE6 AND d8
    (Rst(0x20), (Implied, Implied)),                      // 0xE7 RST 20
    (AddSPSigned8, (RegSP, Imm8Signed)),                  // 0xE8 ADD SP,r8
    (JpHL, (Implied, RegHL)),                             // 0xE9 JP HL
    (Ld, (Addr16, RegA)),                                 // 0xEA LD (a16),A
    (Illegal, (Implied, Implied)),                        // 0xEB
    (Illegal, (Implied, Implied)),                        // 0xEC
    (Illegal, (Implied, Implied)),                        // 0xED
    (Xor, (RegA, Imm8)),                                  // 0xEE XOR d8
    (Rst(0x28), (Implied, Implied)),                      // 0xEF RST 28
    (Ld, (RegA, HighAddr8)),                              // 0xF0 LDH A,(a8)
    (Pop, (RegAF, Implied)),                              // 0xF1 POP AF
    (Ld, (RegA, HighAddrC)),                              // 0xF2 LD A,(C)
    (Di, (Implied, Implied)),                             // 0xF3 DI
    (Illegal, (Implied, Implied)),                        // 0xF4
    (Push, (Implied, RegAF)),                             // 0xF5 PUSH AF
    (Or, (RegA, Imm8)),                                   // 0xF6 OR d8
    (Rst(0x30), (Implied, Implied)),                      // 0xF7 RST 30
    (LdHLSPSigned8, (RegHL, Imm8Signed)),                 // 0xF8 LD HL,SP+r8
    (LdSPHL, (RegSP, RegHL)),                             // 0xF9 LD SP,HL
    (Ld, (RegA, Addr16)),                                 // 0xFA LD A,(a16)
    (Ei, (Implied, Implied)),                             // 0xFB EI
    (Illegal, (Implied, Implied)),                        // 0xFC
    (Illegal, (Implied, Implied)),                        // 0xFD
    (Cp, (Implied, Imm8)),                                // 0xFE CP d8
    (Rst(0x38), (Implied, Implied)),                      // 0xFF RST 38
];

/// Secondary table reached through the `0xCB` prefix: rotates, shifts,
/// swap and the single-bit test/reset/set group. Fully populated, no
/// illegal entries.
#[rustfmt::skip]
pub(super) const PREFIXED_INSTRUCTIONS: [Entry; 256] = [
    (Rlc, (RegB, RegB)),                                  // 0x00 RLC B
    (Rlc, (RegC, RegC)),                                  // 0x01 RLC C
    (Rlc, (RegD, RegD)),                                  // 0x02 RLC D
    (Rlc, (RegE, RegE)),                                  // 0x03 RLC E
    (Rlc, (RegH, RegH)),                                  // 0x04 RLC H
    (Rlc, (RegL, RegL)),                                  // 0x05 RLC L
    (Rlc, (AddrHL, AddrHL)),                              // 0x06 RLC (HL)
    (Rlc, (RegA, RegA)),                                  // 0x07 RLC A
    (Rrc, (RegB, RegB)),                                  // 0x08 RRC B
    (Rrc, (RegC, RegC)),                                  // 0x09 RRC C
    (Rrc, (RegD, RegD)),                                  // 0x0A RRC D
    (Rrc, (RegE, RegE)),                                  // 0x0B RRC E
    (Rrc, (RegH, RegH)),                                  // 0x0C RRC H
    (Rrc, (RegL, RegL)),                                  // 0x0D RRC L
    (Rrc, (AddrHL, AddrHL)),                              // 0x0E RRC (HL)
    (Rrc, (RegA, RegA)),                                  // 0x0F RRC A
    (Rl, (RegB, RegB)),                                   // 0x10 RL B
    (Rl, (RegC, RegC)),                                   // 0x11 RL C
    (Rl, (RegD, RegD)),                                   // 0x12 RL D
    (Rl, (RegE, RegE)),                                   // 0x13 RL E
    (Rl, (RegH, RegH)),                                   // 0x14 RL H
    (Rl, (RegL, RegL)),                                   // 0x15 RL L
    (Rl, (AddrHL, AddrHL)),                               // 0x16 RL (HL)
    (Rl, (RegA, RegA)),                                   // 0x17 RL A
    (Rr, (RegB, RegB)),                                   // 0x18 RR B
    (Rr, (RegC, RegC)),                                   // 0x19 RR C
    (Rr, (RegD, RegD)),                                   // 0x1A RR D
    (Rr, (RegE, RegE)),                                   // 0x1B RR E
    (Rr, (RegH, RegH)),                                   // 0x1C RR H
    (Rr, (RegL, RegL)),                                   // 0x1D RR L
    (Rr, (AddrHL, AddrHL)),                               // 0x1E RR (HL)
    (Rr, (RegA, RegA)),                                   // 0x1F RR A
    (Sla, (RegB, RegB)),                                  // 0x20 SLA B
    (Sla, (RegC, RegC)),                                  // 0x21 SLA C
    (Sla, (RegD, RegD)),                                  // 0x22 SLA D
    (Sla, (RegE, RegE)),                                  // 0x23 SLA E
    (Sla, (RegH, RegH)),                                  // 0x24 SLA H
    (Sla, (RegL, RegL)),                                  // 0x25 SLA L
    (Sla, (AddrHL, AddrHL)),                              // 0x26 SLA (HL)
    (Sla, (RegA, RegA)),                                  // 0x27 SLA A
    (Sra, (RegB, RegB)),                                  // 0x28 SRA B
    (Sra, (RegC, RegC)),                                  // 0x29 SRA C
    (Sra, (RegD, RegD)),                                  // 0x2A SRA D
    (Sra, (RegE, RegE)),                                  // 0x2B SRA E
    (Sra, (RegH, RegH)),                                  // 0x2C SRA H
    (Sra, (RegL, RegL)),                                  // 0x2D SRA L
    (Sra, (AddrHL, AddrHL)),                              // 0x2E SRA (HL)
    (Sra, (RegA, RegA)),                                  // 0x2F SRA A
    (Swap, (RegB, RegB)),                                 // 0x30 SWAP B
    (Swap, (RegC, RegC)),                                 // 0x31 SWAP C
    (Swap, (RegD, RegD)),                                 // 0x32 SWAP D
    (Swap, (RegE, RegE)),                                 // 0x33 SWAP E
    (Swap, (RegH, RegH)),                                 // 0x34 SWAP H
    (Swap, (RegL, RegL)),                                 // 0x35 SWAP L
    (Swap, (AddrHL, AddrHL)),                             // 0x36 SWAP (HL)
    (Swap, (RegA, RegA)),                                 // 0x37 SWAP A
    (Srl, (RegB, RegB)),                                  // 0x38 SRL B
    (Srl, (RegC, RegC)),                                  // 0x39 SRL C
    (Srl, (RegD, RegD)),                                  // 0x3A SRL D
    (Srl, (RegE, RegE)),                                  // 0x3B SRL E
    (Srl, (RegH, RegH)),                                  // 0x3C SRL H
    (Srl, (RegL, RegL)),                                  // 0x3D SRL L
    (Srl, (AddrHL, AddrHL)),                              // 0x3E SRL (HL)
    (Srl, (RegA, RegA)),                                  // 0x3F SRL A
    (Bit(0), (Implied, RegB)),                            // 0x40 BIT 0,B
    (Bit(0), (Implied, RegC)),                            // 0x41 BIT 0,C
    (Bit(0), (Implied, RegD)),                            // 0x42 BIT 0,D
    (Bit(0), (Implied, RegE)),                            // 0x43 BIT 0,E
    (Bit(0), (Implied, RegH)),                            // 0x44 BIT 0,H
    (Bit(0), (Implied, RegL)),                            // 0x45 BIT 0,L
    (Bit(0), (Implied, AddrHL)),                          // 0x46 BIT 0,(HL)
    (Bit(0), (Implied, RegA)),                            // 0x47 BIT 0,A
    (Bit(1), (Implied, RegB)),                            // 0x48 BIT 1,B
    (Bit(1), (Implied, RegC)),                            // 0x49 BIT 1,C
    (Bit(1), (Implied, RegD)),                            // 0x4A BIT 1,D
    (Bit(1), (Implied, RegE)),                            // 0x4B BIT 1,E
    (Bit(1), (Implied, RegH)),                            // 0x4C BIT 1,H
    (Bit(1), (Implied, RegL)),                            // 0x4D BIT 1,L
    (Bit(1), (Implied, AddrHL)),                          // 0x4E BIT 1,(HL)
    (Bit(1), (Implied, RegA)),                            // 0x4F BIT 1,A
    (Bit(2), (Implied, RegB)),                            // 0x50 BIT 2,B
    (Bit(2), (Implied, RegC)),                            // 0x51 BIT 2,C
    (Bit(2), (Implied, RegD)),                            // 0x52 BIT 2,D
    (Bit(2), (Implied, RegE)),                            // 0x53 BIT 2,E
    (Bit(2), (Implied, RegH)),                            // 0x54 BIT 2,H
    (Bit(2), (Implied, RegL)),                            // 0x55 BIT 2,L
    (Bit(2), (Implied, AddrHL)),                          // 0x56 BIT 2,(HL)
    (Bit(2), (Implied, RegA)),                            // 0x57 BIT 2,A
    (Bit(3), (Implied, RegB)),                            // 0x58 BIT 3,B
    (Bit(3), (Implied, RegC)),                            // 0x59 BIT 3,C
    (Bit(3), (Implied, RegD)),                            // 0x5A BIT 3,D
    (Bit(3), (Implied, RegE)),                            // 0x5B BIT 3,E
    (Bit(3), (Implied, RegH)),                            // 0x5C BIT 3,H
    (Bit(3), (Implied, RegL)),                            // 0x5D BIT 3,L
    (Bit(3), (Implied, AddrHL)),                          // 0x5E BIT 3,(HL)
    (Bit(3), (Implied, RegA)),                            // 0x5F BIT 3,A
    (Bit(4), (Implied, RegB)),                            // 0x60 BIT 4,B
    (Bit(4), (Implied, RegC)),                            // 0x61 BIT 4,C
    (Bit(4), (Implied, RegD)),                            // 0x62 BIT 4,D
    (Bit(4), (Implied, RegE)),                            // 0x63 BIT 4,E
    (Bit(4), (Implied, RegH)),                            // 0x64 BIT 4,H
    (Bit(4), (Implied, RegL)),                            // 0x65 BIT 4,L
    (Bit(4), (Implied, AddrHL)),                          // 0x66 BIT 4,(HL)
    (Bit(4), (Implied, RegA)),                            // 0x67 BIT 4,A
    (Bit(5), (Implied, RegB)),                            // 0x68 BIT 5,B
    (Bit(5), (Implied, RegC)),                            // 0x69 BIT 5,C
    (Bit(5), (Implied, RegD)),                            // 0x6A BIT 5,D
    (Bit(5), (Implied, RegE)),                            // 0x6B BIT 5,E
    (Bit(5), (Implied, RegH)),                            // 0x6C BIT 5,H
    (Bit(5), (Implied, RegL)),                            // 0x6D BIT 5,L
    (Bit(5), (Implied, AddrHL)),                          // 0x6E BIT 5,(HL)
    (Bit(5), (Implied, RegA)),                            // 0x6F BIT 5,A
    (Bit(6), (Implied, RegB)),                            // 0x70 BIT 6,B
    (Bit(6), (Implied, RegC)),                            // 0x71 BIT 6,C
    (Bit(6), (Implied, RegD)),                            // 0x72 BIT 6,D
    (Bit(6), (Implied, RegE)),                            // 0x73 BIT 6,E
    (Bit(6), (Implied, RegH)),                            // 0x74 BIT 6,H
    (Bit(6), (Implied, RegL)),                            // 0x75 BIT 6,L
    (Bit(6), (Implied, AddrHL)),                          // 0x76 BIT 6,(HL)
    (Bit(6), (Implied, RegA)),                            // 0x77 BIT 6,A
    (Bit(7), (Implied, RegB)),                            // 0x78 BIT 7,B
    (Bit(7), (Implied, RegC)),                            // 0x79 BIT 7,C
    (Bit(7), (Implied, RegD)),                            // 0x7A BIT 7,D
    (Bit(7), (Implied, RegE)),                            // 0x7B BIT 7,E
    (Bit(7), (Implied, RegH)),                            // 0x7C BIT 7,H
    (Bit(7), (Implied, RegL)),                            // 0x7D BIT 7,L
    (Bit(7), (Implied, AddrHL)),                          // 0x7E BIT 7,(HL)
    (Bit(7), (Implied, RegA)),                            // 0x7F BIT 7,A
    (Res(0), (RegB, RegB)),                               // 0x80 RES 0,B
    (Res(0), (RegC, RegC)),                               // 0x81 RES 0,C
    (Res(0), (RegD, RegD)),                               // 0x82 RES 0,D
    (Res(0), (RegE, RegE)),                               // 0x83 RES 0,E
    (Res(0), (RegH, RegH)),                               // 0x84 RES 0,H
    (Res(0), (RegL, RegL)),                               // 0x85 RES 0,L
    (Res(0), (AddrHL, AddrHL)),                           // 0x86 RES 0,(HL)
    (Res(0), (RegA, RegA)),                               // 0x87 RES 0,A
    (Res(1), (RegB, RegB)),                               // 0x88 RES 1,B
    (Res(1), (RegC, RegC)),                               // 0x89 RES 1,C
    (Res(1), (RegD, RegD)),                               // 0x8A RES 1,D
    (Res(1), (RegE, RegE)),                               // 0x8B RES 1,E
    (Res(1), (RegH, RegH)),                               // 0x8C RES 1,H
    (Res(1), (RegL, RegL)),                               // 0x8D RES 1,L
    (Res(1), (AddrHL, AddrHL)),                           // 0x8E RES 1,(HL)
    (Res(1), (RegA, RegA)),                               // 0x8F RES 1,A
    (Res(2), (RegB, RegB)),                               // 0x90 RES 2,B
    (Res(2), (RegC, RegC)),                               // 0x91 RES 2,C
    (Res(2), (RegD, RegD)),                               // 0x92 RES 2,D
    (Res(2), (RegE, RegE)),                               // 0x93 RES 2,E
    (Res(2), (RegH, RegH)),                               // 0x94 RES 2,H
    (Res(2), (RegL, RegL)),                               // 0x95 RES 2,L
    (Res(2), (AddrHL, AddrHL)),                           // 0x96 RES 2,(HL)
    (Res(2), (RegA, RegA)),                               // 0x97 RES 2,A
    (Res(3), (RegB, RegB)),                               // 0x98 RES 3,B
    (Res(3), (RegC, RegC)),                               // 0x99 RES 3,C
    (Res(3), (RegD, RegD)),                               // 0x9A RES 3,D
    (Res(3), (RegE, RegE)),                               // 0x9B RES 3,E
    (Res(3), (RegH, RegH)),                               // 0x9C RES 3,H
    (Res(3), (RegL, RegL)),                               // 0x9D RES 3,L
    (Res(3), (AddrHL, AddrHL)),                           // 0x9E RES 3,(HL)
    (Res(3), (RegA, RegA)),                               // 0x9F RES 3,A
    (Res(4), (RegB, RegB)),                               // 0xA0 RES 4,B
    (Res(4), (RegC, RegC)),                               // 0xA1 RES 4,C
    (Res(4), (RegD, RegD)),                               // 0xA2 RES 4,D
    (Res(4), (RegE, RegE)),                               // 0xA3 RES 4,E
    (Res(4), (RegH, RegH)),                               // 0xA4 RES 4,H
    (Res(4), (RegL, RegL)),                               // 0xA5 RES 4,L
    (Res(4), (AddrHL, AddrHL)),                           // 0xA6 RES 4,(HL)
    (Res(4), (RegA, RegA)),                               // 0xA7 RES 4,A
    (Res(5), (RegB, RegB)),                               // 0xA8 RES 5,B
    (Res(5), (RegC, RegC)),                               // 0xA9 RES 5,C
    (Res(5), (RegD, RegD)),                               // 0xAA RES 5,D
    (Res(5), (RegE, RegE)),                               // 0xAB RES 5,E
    (Res(5), (RegH, RegH)),                               // 0xAC RES 5,H
    (Res(5), (RegL, RegL)),                               // 0xAD RES 5,L
    (Res(5), (AddrHL, AddrHL)),                           // 0xAE RES 5,(HL)
    (Res(5), (RegA, RegA)),                               // 0xAF RES 5,A
    (Res(6), (RegB, RegB)),                               // 0xB0 RES 6,B
    (Res(6), (RegC, RegC)),                               // 0xB1 RES 6,C
    (Res(6), (RegD, RegD)),                               // 0xB2 RES 6,D
    (Res(6), (RegE, RegE)),                               // 0xB3 RES 6,E
    (Res(6), (RegH, RegH)),                               // 0xB4 RES 6,H
    (Res(6), (RegL, RegL)),                               // 0xB5 RES 6,L
    (Res(6), (AddrHL, AddrHL)),                           // 0xB6 RES 6,(HL)
    (Res(6), (RegA, RegA)),                               // 0xB7 RES 6,A
    (Res(7), (RegB, RegB)),                               // 0xB8 RES 7,B
    (Res(7), (RegC, RegC)),                               // 0xB9 RES 7,C
    (Res(7), (RegD, RegD)),                               // 0xBA RES 7,D
    (Res(7), (RegE, RegE)),                               // 0xBB RES 7,E
    (Res(7), (RegH, RegH)),                               // 0xBC RES 7,H
    (Res(7), (RegL, RegL)),                               // 0xBD RES 7,L
    (Res(7), (AddrHL, AddrHL)),                           // 0xBE RES 7,(HL)
    (Res(7), (RegA, RegA)),                               // 0xBF RES 7,A
    (Set(0), (RegB, RegB)),                               // 0xC0 SET 0,B
    (Set(0), (RegC, RegC)),                               // 0xC1 SET 0,C
    (Set(0), (RegD, RegD)),                               // 0xC2 SET 0,D
    (Set(0), (RegE, RegE)),                               // 0xC3 SET 0,E
    (Set(0), (RegH, RegH)),                               // 0xC4 SET 0,H
    (Set(0), (RegL, RegL)),                               // 0xC5 SET 0,L
    (Set(0), (AddrHL, AddrHL)),                           // 0xC6 SET 0,(HL)
    (Set(0), (RegA, RegA)),                               // 0xC7 SET 0,A
    (Set(1), (RegB, RegB)),                               // 0xC8 SET 1,B
    (Set(1), (RegC, RegC)),                               // 0xC9 SET 1,C
    (Set(1), (RegD, RegD)),                               // 0xCA SET 1,D
    (Set(1), (RegE, RegE)),                               // 0xCB SET 1,E
    (Set(1), (RegH, RegH)),                               // 0xCC SET 1,H
    (Set(1), (RegL, RegL)),                               // 0xCD SET 1,L
    (Set(1), (AddrHL, AddrHL)),                           // 0xCE SET 1,(HL)
    (Set(1), (RegA, RegA)),                               // 0xCF SET 1,A
    (Set(2), (RegB, RegB)),                               // 0xD0 SET 2,B
    (Set(2), (RegC, RegC)),                               // 0xD1 SET 2,C
    (Set(2), (RegD, RegD)),                               // 0xD2 SET 2,D
    (Set(2), (RegE, RegE)),                               // 0xD3 SET 2,E
    (Set(2), (RegH, RegH)),                               // 0xD4 SET 2,H
    (Set(2), (RegL, RegL)),                               // 0xD5 SET 2,L
    (Set(2), (AddrHL, AddrHL)),                           // 0xD6 SET 2,(HL)
    (Set(2), (RegA, RegA)),                               // 0xD7 SET 2,A
    (Set(3), (RegB, RegB)),                               // 0xD8 SET 3,B
    (Set(3), (RegC, RegC)),                               // 0xD9 SET 3,C
    (Set(3), (RegD, RegD)),                               // 0xDA SET 3,D
    (Set(3), (RegE, RegE)),                               // 0xDB SET 3,E
    (Set(3), (RegH, RegH)),                               // 0xDC SET 3,H
    (Set(3), (RegL, RegL)),                               // 0xDD SET 3,L
    (Set(3), (AddrHL, AddrHL)),                           // 0xDE SET 3,(HL)
    (Set(3), (RegA, RegA)),                               // 0xDF SET 3,A
    (Set(4), (RegB, RegB)),                               // 0xE0 SET 4,B
    (Set(4), (RegC, RegC)),                               // 0xE1 SET 4,C
    (Set(4), (RegD, RegD)),                               // 0xE2 SET 4,D
    (Set(4), (RegE, RegE)),                               // 0xE3 SET 4,E
    (Set(4), (RegH, RegH)),                               // 0xE4 SET 4,H
    (Set(4), (RegL, RegL)),                               // 0xE5 SET 4,L
    (Set(4), (AddrHL, AddrHL)),                           // 0xE6 SET 4,(HL)
    (Set(4), (RegA, RegA)),                               // 0xE7 SET 4,A
    (Set(5), (RegB, RegB)),                               // 0xE8 SET 5,B
    (Set(5), (RegC, RegC)),                               // 0xE9 SET 5,C
    (Set(5), (RegD, RegD)),                               // 0xEA SET 5,D
    (Set(5), (RegE, RegE)),                               // 0xEB SET 5,E
    (Set(5), (RegH, RegH)),                               // 0xEC SET 5,H
    (Set(5), (RegL, RegL)),                               // 0xED SET 5,L
    (Set(5), (AddrHL, AddrHL)),                           // 0xEE SET 5,(HL)
    (Set(5), (RegA, RegA)),                               // 0xEF SET 5,A
    (Set(6), (RegB, RegB)),                               // 0xF0 SET 6,B
    (Set(6), (RegC, RegC)),                               // 0xF1 SET 6,C
    (Set(6), (RegD, RegD)),                               // 0xF2 SET 6,D
    (Set(6), (RegE, RegE)),                               // 0xF3 SET 6,E
    (Set(6), (RegH, RegH)),                               // 0xF4 SET 6,H
    (Set(6), (RegL, RegL)),                               // 0xF5 SET 6,L
    (Set(6), (AddrHL, AddrHL)),                           // 0xF6 SET 6,(HL)
    (Set(6), (RegA, RegA)),                               // 0xF7 SET 6,A
    (Set(7), (RegB, RegB)),                               // 0xF8 SET 7,B
    (Set(7), (RegC, RegC)),                               // 0xF9 SET 7,C
    (Set(7), (RegD, RegD)),                               // 0xFA SET 7,D
    (Set(7), (RegE, RegE)),                               // 0xFB SET 7,E
    (Set(7), (RegH, RegH)),                               // 0xFC SET 7,H
    (Set(7), (RegL, RegL)),                               // 0xFD SET 7,L
    (Set(7), (AddrHL, AddrHL)),                           // 0xFE SET 7,(HL)
    (Set(7), (RegA, RegA)),                               // 0xFF SET 7,A
];
