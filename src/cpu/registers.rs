use bitflags::bitflags;

bitflags! {
    /// The 4 live bits of F; bits 0-3 do not exist in hardware and
    /// always read back as zero.
    pub(crate) struct CpuFlags: u8 {
        const Z = 1 << 7;
        const N = 1 << 6;
        const H = 1 << 5;
        const C = 1 << 4;
    }
}

/// Individually addressable 8-bit register slots, including the halves
/// of SP and PC.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Reg8 {
    A,
    F,
    B,
    C,
    D,
    E,
    H,
    L,
    SpHigh,
    SpLow,
    PcHigh,
    PcLow,
}

/// Register pairs, composed high byte first.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
    PC,
}

pub(crate) struct Registers {
    pub(crate) a: u8,
    pub(crate) f: CpuFlags,
    pub(crate) b: u8,
    pub(crate) c: u8,
    pub(crate) d: u8,
    pub(crate) e: u8,
    pub(crate) h: u8,
    pub(crate) l: u8,
    pub(crate) sp: u16,
    pub(crate) pc: u16,
}

impl Registers {
    pub(crate) fn new() -> Self {
        Self {
            a: 0,
            f: CpuFlags::empty(),
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,
            sp: 0,
            pc: 0,
        }
    }

    /// DMG post-boot values.
    pub(crate) fn reset(&mut self) {
        self.write_pair(Reg16::AF, 0x01B0);
        self.write_pair(Reg16::BC, 0x0013);
        self.write_pair(Reg16::DE, 0x00D8);
        self.write_pair(Reg16::HL, 0x014D);
        self.sp = 0xFFFE;
        self.pc = 0x0100;
    }

    pub(crate) fn read(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.a,
            Reg8::F => self.f.bits(),
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
            Reg8::SpHigh => (self.sp >> 8) as u8,
            Reg8::SpLow => self.sp as u8,
            Reg8::PcHigh => (self.pc >> 8) as u8,
            Reg8::PcLow => self.pc as u8,
        }
    }

    pub(crate) fn write(&mut self, reg: Reg8, data: u8) {
        match reg {
            Reg8::A => self.a = data,
            Reg8::F => self.f = CpuFlags::from_bits_truncate(data),
            Reg8::B => self.b = data,
            Reg8::C => self.c = data,
            Reg8::D => self.d = data,
            Reg8::E => self.e = data,
            Reg8::H => self.h = data,
            Reg8::L => self.l = data,
            Reg8::SpHigh => self.sp = (self.sp & 0x00FF) | ((data as u16) << 8),
            Reg8::SpLow => self.sp = (self.sp & 0xFF00) | data as u16,
            Reg8::PcHigh => self.pc = (self.pc & 0x00FF) | ((data as u16) << 8),
            Reg8::PcLow => self.pc = (self.pc & 0xFF00) | data as u16,
        }
    }

    pub(crate) fn read_pair(&self, pair: Reg16) -> u16 {
        match pair {
            Reg16::AF => (self.a as u16) << 8 | self.f.bits() as u16,
            Reg16::BC => (self.b as u16) << 8 | self.c as u16,
            Reg16::DE => (self.d as u16) << 8 | self.e as u16,
            Reg16::HL => (self.h as u16) << 8 | self.l as u16,
            Reg16::SP => self.sp,
            Reg16::PC => self.pc,
        }
    }

    pub(crate) fn write_pair(&mut self, pair: Reg16, data: u16) {
        match pair {
            Reg16::AF => {
                self.a = (data >> 8) as u8;
                self.f = CpuFlags::from_bits_truncate(data as u8);
            }
            Reg16::BC => {
                self.b = (data >> 8) as u8;
                self.c = data as u8;
            }
            Reg16::DE => {
                self.d = (data >> 8) as u8;
                self.e = data as u8;
            }
            Reg16::HL => {
                self.h = (data >> 8) as u8;
                self.l = data as u8;
            }
            Reg16::SP => self.sp = data,
            Reg16::PC => self.pc = data,
        }
    }

    #[inline]
    pub(crate) fn flag_get(&self, flag: CpuFlags) -> bool {
        self.f.intersects(flag)
    }

    #[inline]
    pub(crate) fn flag_set(&mut self, flag: CpuFlags, value: bool) {
        self.f.set(flag, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_round_trip() {
        let mut regs = Registers::new();

        for pair in [Reg16::BC, Reg16::DE, Reg16::HL, Reg16::SP, Reg16::PC] {
            for value in 0..=0xFFFFu16 {
                regs.write_pair(pair, value);
                assert_eq!(regs.read_pair(pair), value);
            }
        }
    }

    #[test]
    fn flags_low_nibble_always_clear() {
        let mut regs = Registers::new();

        for value in 0..=0xFFu8 {
            regs.write(Reg8::F, value);
            assert_eq!(regs.read(Reg8::F), value & 0xF0);
        }

        for value in 0..=0xFFFFu16 {
            regs.write_pair(Reg16::AF, value);
            assert_eq!(regs.read_pair(Reg16::AF), value & 0xFFF0);
        }
    }

    #[test]
    fn pairs_compose_high_byte_first() {
        let mut regs = Registers::new();

        regs.write_pair(Reg16::BC, 0x1234);
        assert_eq!(regs.read(Reg8::B), 0x12);
        assert_eq!(regs.read(Reg8::C), 0x34);

        regs.write_pair(Reg16::SP, 0xABCD);
        assert_eq!(regs.read(Reg8::SpHigh), 0xAB);
        assert_eq!(regs.read(Reg8::SpLow), 0xCD);

        regs.write(Reg8::PcHigh, 0x80);
        regs.write(Reg8::PcLow, 0x01);
        assert_eq!(regs.read_pair(Reg16::PC), 0x8001);
    }

    #[test]
    fn reset_seeds_dmg_post_boot_state() {
        let mut regs = Registers::new();
        regs.reset();

        assert_eq!(regs.read_pair(Reg16::AF), 0x01B0);
        assert_eq!(regs.read_pair(Reg16::BC), 0x0013);
        assert_eq!(regs.read_pair(Reg16::DE), 0x00D8);
        assert_eq!(regs.read_pair(Reg16::HL), 0x014D);
        assert_eq!(regs.sp, 0xFFFE);
        assert_eq!(regs.pc, 0x0100);
    }
}
