//! # Condition Flags
//!
//! The 8080 keeps five condition flags. They are stored here as named booleans
//! and only packed into a byte for `PUSH PSW`, which fixes the layout:
//!
//! ```text
//! bit  7   6   5   4   3   2   1   0
//!      S   Z   0   AC  0   P   1   C
//! ```

use crate::registers::Condition;

/// The five 8080 condition flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// S: bit 7 of the result
    pub sign: bool,
    /// Z: result was zero
    pub zero: bool,
    /// P: result has an even number of set bits
    pub parity: bool,
    /// C: carry out of bit 7 (borrow for subtraction)
    pub carry: bool,
    /// AC: carry out of bit 3
    pub aux_carry: bool,
}

impl Flags {
    pub const SIGN: u8 = 0b1000_0000;
    pub const ZERO: u8 = 0b0100_0000;
    pub const AUX_CARRY: u8 = 0b0001_0000;
    pub const PARITY: u8 = 0b0000_0100;
    /// Bit 1 always reads as 1 in the packed byte.
    pub const ALWAYS_SET: u8 = 0b0000_0010;
    pub const CARRY: u8 = 0b0000_0001;

    /// Packs the flags into the PSW low byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::Flags;
    ///
    /// let flags = Flags { zero: true, carry: true, ..Flags::default() };
    /// assert_eq!(flags.to_byte(), 0b0100_0011);
    /// ```
    pub fn to_byte(self) -> u8 {
        let mut packed = Self::ALWAYS_SET;

        if self.sign {
            packed |= Self::SIGN;
        }
        if self.zero {
            packed |= Self::ZERO;
        }
        if self.aux_carry {
            packed |= Self::AUX_CARRY;
        }
        if self.parity {
            packed |= Self::PARITY;
        }
        if self.carry {
            packed |= Self::CARRY;
        }

        packed
    }

    /// Unpacks a PSW low byte. Bits 5, 3 and 1 are ignored.
    pub fn from_byte(packed: u8) -> Self {
        Self {
            sign: packed & Self::SIGN != 0,
            zero: packed & Self::ZERO != 0,
            parity: packed & Self::PARITY != 0,
            carry: packed & Self::CARRY != 0,
            aux_carry: packed & Self::AUX_CARRY != 0,
        }
    }

    /// Sets S, Z and P from an 8-bit result.
    pub(crate) fn set_szp(&mut self, result: u8) {
        self.sign = result & 0x80 != 0;
        self.zero = result == 0;
        self.parity = parity(result);
    }

    /// Evaluates a branch condition against the current flags.
    pub fn test(self, condition: Condition) -> bool {
        match condition {
            Condition::NotZero => !self.zero,
            Condition::Zero => self.zero,
            Condition::NoCarry => !self.carry,
            Condition::Carry => self.carry,
            Condition::ParityOdd => !self.parity,
            Condition::ParityEven => self.parity,
            Condition::Plus => !self.sign,
            Condition::Minus => self.sign,
        }
    }
}

/// Even parity of a byte (true if an even number of bits are set).
pub const fn parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}
