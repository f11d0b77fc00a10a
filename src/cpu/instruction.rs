use std::fmt::Display;

use super::instructions_table;

#[derive(Debug)]
pub(super) struct Instruction {
    /// Address the opcode byte was fetched from.
    pub pc: u16,
    /// The raw opcode byte (the second byte for `0xCB`-prefixed ones).
    pub byte: u8,
    pub opcode: Opcode,
    pub src: OperandType,
    pub dest: OperandType,
}

/// Where an operand comes from or goes to. The execution core funnels
/// every instruction through one read-operand/compute/write-operand
/// pass, so anything addressable by any instruction shows up here.
#[derive(PartialEq, Copy, Clone, Debug)]
pub enum OperandType {
    RegA,
    RegB,
    RegC,
    RegD,
    RegE,
    RegH,
    RegL,

    AddrHL,
    AddrHLDec,
    AddrHLInc,
    AddrBC,
    AddrDE,

    RegAF,
    RegBC,
    RegDE,
    RegHL,

    RegSP,

    Imm8,
    Imm8Signed,
    Imm16,

    HighAddr8,
    HighAddrC,
    Addr16,
    /// Write a 16-bit value to an immediate address (`LD (a16),SP`).
    Addr16Val16,

    /// Filler for instructions without this operand.
    Implied,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Condition {
    NC,
    C,
    NZ,
    Z,
    Unconditional,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Opcode {
    Nop,
    Stop,

    Ld,
    LdSPHL,
    LdHLSPSigned8,

    Push,
    Pop,

    Inc,
    Inc16,
    Dec,
    Dec16,

    Add,
    Add16,
    AddSPSigned8,
    Adc,
    Cp,
    Sub,
    Sbc,
    And,
    Xor,
    Or,

    Jp(Condition),
    JpHL,
    Jr(Condition),

    Call(Condition),
    Ret(Condition),

    Reti,

    Rst(u8),

    Di,
    Ei,
    Ccf,
    Scf,
    Daa,
    Cpl,

    Rlca,
    Rla,
    Rrca,
    Rra,

    Prefix,

    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,

    Bit(u8),
    Res(u8),
    Set(u8),

    Illegal,

    Halt,
}

impl Instruction {
    pub fn from_byte(byte: u8, pc: u16) -> Self {
        let (opcode, operand_types) = instructions_table::INSTRUCTIONS[byte as usize];

        Instruction {
            pc,
            byte,
            opcode,
            dest: operand_types.0,
            src: operand_types.1,
        }
    }

    pub fn from_prefix(byte: u8, pc: u16) -> Self {
        let (opcode, operand_types) = instructions_table::PREFIXED_INSTRUCTIONS[byte as usize];

        Instruction {
            pc,
            byte,
            opcode,
            dest: operand_types.0,
            src: operand_types.1,
        }
    }
}

fn operand_str(operand: OperandType) -> &'static str {
    match operand {
        OperandType::RegA => "A",
        OperandType::RegB => "B",
        OperandType::RegC => "C",
        OperandType::RegD => "D",
        OperandType::RegE => "E",
        OperandType::RegH => "H",
        OperandType::RegL => "L",
        OperandType::AddrHL => "(HL)",
        OperandType::AddrHLDec => "(HL-)",
        OperandType::AddrHLInc => "(HL+)",
        OperandType::AddrBC => "(BC)",
        OperandType::AddrDE => "(DE)",
        OperandType::RegAF => "AF",
        OperandType::RegBC => "BC",
        OperandType::RegDE => "DE",
        OperandType::RegHL => "HL",
        OperandType::RegSP => "SP",
        OperandType::Imm8 => "d8",
        OperandType::Imm8Signed => "r8",
        OperandType::Imm16 => "d16",
        OperandType::HighAddr8 => "(a8)",
        OperandType::HighAddrC => "(C)",
        OperandType::Addr16 | OperandType::Addr16Val16 => "(a16)",
        OperandType::Implied => "",
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let opcode: String = match self.opcode {
            Opcode::Nop => "NOP".into(),
            Opcode::Stop => "STOP".into(),
            Opcode::Ld | Opcode::LdSPHL => "LD".into(),
            Opcode::LdHLSPSigned8 => "LD HL,SP+r8".into(),
            Opcode::Push => "PUSH".into(),
            Opcode::Pop => "POP".into(),
            Opcode::Inc | Opcode::Inc16 => "INC".into(),
            Opcode::Dec | Opcode::Dec16 => "DEC".into(),
            Opcode::Add | Opcode::Add16 | Opcode::AddSPSigned8 => "ADD".into(),
            Opcode::Adc => "ADC".into(),
            Opcode::Cp => "CP".into(),
            Opcode::Sub => "SUB".into(),
            Opcode::Sbc => "SBC".into(),
            Opcode::And => "AND".into(),
            Opcode::Xor => "XOR".into(),
            Opcode::Or => "OR".into(),
            Opcode::Jp(Condition::Unconditional) | Opcode::JpHL => "JP".into(),
            Opcode::Jp(cond) => format!("JP {:?},", cond),
            Opcode::Jr(Condition::Unconditional) => "JR".into(),
            Opcode::Jr(cond) => format!("JR {:?},", cond),
            Opcode::Call(Condition::Unconditional) => "CALL".into(),
            Opcode::Call(cond) => format!("CALL {:?},", cond),
            Opcode::Ret(Condition::Unconditional) => "RET".into(),
            Opcode::Ret(cond) => format!("RET {:?},", cond),
            Opcode::Reti => "RETI".into(),
            Opcode::Rst(loc) => format!("RST {:02X}", loc),
            Opcode::Di => "DI".into(),
            Opcode::Ei => "EI".into(),
            Opcode::Ccf => "CCF".into(),
            Opcode::Scf => "SCF".into(),
            Opcode::Daa => "DAA".into(),
            Opcode::Cpl => "CPL".into(),
            Opcode::Rlca => "RLCA".into(),
            Opcode::Rla => "RLA".into(),
            Opcode::Rrca => "RRCA".into(),
            Opcode::Rra => "RRA".into(),
            Opcode::Prefix => "PREFIX".into(),
            Opcode::Rlc => "RLC".into(),
            Opcode::Rrc => "RRC".into(),
            Opcode::Rl => "RL".into(),
            Opcode::Rr => "RR".into(),
            Opcode::Sla => "SLA".into(),
            Opcode::Sra => "SRA".into(),
            Opcode::Swap => "SWAP".into(),
            Opcode::Srl => "SRL".into(),
            Opcode::Bit(n) => format!("BIT {},", n),
            Opcode::Res(n) => format!("RES {},", n),
            Opcode::Set(n) => format!("SET {},", n),
            Opcode::Illegal => "ILLEGAL".into(),
            Opcode::Halt => "HALT".into(),
        };

        let dest = operand_str(self.dest);
        let src = operand_str(self.src);

        let operands = match (dest.is_empty(), src.is_empty()) {
            (false, false) => format!("{},{}", dest, src),
            (false, true) => dest.to_owned(),
            (true, _) => src.to_owned(),
        };

        write!(f, "{} {}", opcode, operands)
    }
}
