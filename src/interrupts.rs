use std::cell::RefCell;
use std::convert::TryFrom;
use std::rc::Rc;

use bitflags::bitflags;

/// The five interrupt sources, in priority order (Vblank highest).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InterruptType {
    Vblank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptType {
    /// Fixed dispatch vector: 0x40, 0x48, 0x50, 0x58, 0x60.
    pub fn vector(self) -> u16 {
        0x40 + (self as u16) * 8
    }
}

impl TryFrom<u8> for InterruptType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Vblank),
            1 => Ok(Self::LcdStat),
            2 => Ok(Self::Timer),
            3 => Ok(Self::Serial),
            4 => Ok(Self::Joypad),
            _ => Err(()),
        }
    }
}

/// The side of the interrupt controller the CPU drives.
///
/// The CPU polls [`has_pending_interrupt`] on every step regardless of
/// IME (a pending, unmasked interrupt always wakes it from HALT), but
/// only resolves and acknowledges a source while servicing.
///
/// [`has_pending_interrupt`]: InterruptController::has_pending_interrupt
pub trait InterruptController {
    fn has_pending_interrupt(&self) -> bool;

    /// The highest-priority source that is both requested and enabled,
    /// lowest bit number winning.
    fn pending_interrupt(&self) -> Option<InterruptType>;

    fn acknowledge_interrupt(&mut self, interrupt: InterruptType);
}

/// The side peripherals drive to raise a request.
pub trait InterruptManager {
    fn request_interrupt(&mut self, interrupt: InterruptType);
}

bitflags! {
    struct InterruptsFlags: u8 {
        const VBLANK   = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER    = 1 << 2;
        const SERIAL   = 1 << 3;
        const JOYPAD   = 1 << 4;
    }
}

impl From<InterruptType> for InterruptsFlags {
    fn from(interrupt: InterruptType) -> Self {
        match interrupt {
            InterruptType::Vblank => Self::VBLANK,
            InterruptType::LcdStat => Self::LCD_STAT,
            InterruptType::Timer => Self::TIMER,
            InterruptType::Serial => Self::SERIAL,
            InterruptType::Joypad => Self::JOYPAD,
        }
    }
}

/// Reference IE/IF implementation backing the `0xFFFF`/`0xFF0F`
/// registers of a full system.
pub struct Interrupts {
    enabled: InterruptsFlags,
    requested: InterruptsFlags,
}

impl Default for Interrupts {
    fn default() -> Self {
        Self {
            enabled: InterruptsFlags::empty(),
            requested: InterruptsFlags::empty(),
        }
    }
}

impl Interrupts {
    pub fn write_interrupt_enable(&mut self, data: u8) {
        self.enabled = InterruptsFlags::from_bits_truncate(data);
    }

    pub fn read_interrupt_enable(&self) -> u8 {
        self.enabled.bits()
    }

    pub fn write_interrupt_flags(&mut self, data: u8) {
        self.requested = InterruptsFlags::from_bits_truncate(data);
    }

    /// The unused top bits of IF read back as set.
    pub fn read_interrupt_flags(&self) -> u8 {
        0xE0 | self.requested.bits()
    }
}

impl InterruptManager for Interrupts {
    fn request_interrupt(&mut self, interrupt: InterruptType) {
        self.requested.insert(interrupt.into());
    }
}

impl InterruptController for Interrupts {
    fn has_pending_interrupt(&self) -> bool {
        self.requested.bits() & self.enabled.bits() & 0x1F != 0
    }

    fn pending_interrupt(&self) -> Option<InterruptType> {
        let pending = self.requested.bits() & self.enabled.bits() & 0x1F;

        if pending == 0 {
            None
        } else {
            // lowest set bit is the highest priority source
            InterruptType::try_from(pending.trailing_zeros() as u8).ok()
        }
    }

    fn acknowledge_interrupt(&mut self, interrupt: InterruptType) {
        assert!(self.requested.contains(interrupt.into()));

        self.requested.remove(interrupt.into());
    }
}

// Lets a driver share one controller between the CPU, the peripherals
// and the cycle callback.
impl<I: InterruptController> InterruptController for Rc<RefCell<I>> {
    fn has_pending_interrupt(&self) -> bool {
        self.borrow().has_pending_interrupt()
    }

    fn pending_interrupt(&self) -> Option<InterruptType> {
        self.borrow().pending_interrupt()
    }

    fn acknowledge_interrupt(&mut self, interrupt: InterruptType) {
        self.borrow_mut().acknowledge_interrupt(interrupt);
    }
}
