//! Pure arithmetic primitives shared by the 8-bit arithmetic group, the
//! 16-bit `ADD HL,rr` and the SP-relative instructions.

pub(super) struct AluResult {
    pub result: u8,
    pub half_carry: bool,
    pub carry: bool,
}

pub(super) fn add_bytes(a: u8, b: u8, carry_in: bool) -> AluResult {
    let c = carry_in as u8;

    AluResult {
        result: a.wrapping_add(b).wrapping_add(c),
        half_carry: (a & 0xF) + (b & 0xF) + c > 0xF,
        carry: (a as u16) + (b as u16) + (c as u16) > 0xFF,
    }
}

pub(super) fn sub_bytes(a: u8, b: u8, borrow_in: bool) -> AluResult {
    let c = borrow_in as u8;

    AluResult {
        result: a.wrapping_sub(b).wrapping_sub(c),
        half_carry: (a & 0xF) < (b & 0xF) + c,
        carry: (a as u16) < (b as u16) + (c as u16),
    }
}

/// 16-bit add as two chained byte adds. H/C are reported from the high
/// byte, i.e. across bits 11 and 15.
pub(super) fn add_words(a: u16, b: u16) -> (u16, bool, bool) {
    let low = add_bytes(a as u8, b as u8, false);
    let high = add_bytes((a >> 8) as u8, (b >> 8) as u8, low.carry);

    (
        (high.result as u16) << 8 | low.result as u16,
        high.half_carry,
        high.carry,
    )
}

/// SP plus a sign-extended 8-bit offset. The result spans all 16 bits,
/// but H/C reflect only the unsigned low-byte addition (hardware
/// quirk shared by `ADD SP,e` and `LD HL,SP+e`).
pub(super) fn add_signed_offset(sp: u16, offset: u8) -> (u16, bool, bool) {
    let low = add_bytes(sp as u8, offset, false);
    let result = sp.wrapping_add(offset as i8 as i16 as u16);

    (result, low.half_carry, low.carry)
}
