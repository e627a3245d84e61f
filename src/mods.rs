//! Modifier bits, in the order of the HID keyboard report modifier byte

use core::ops::{BitOr, BitOrAssign};

use crate::keycode::Keyboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mods(pub u8);

const MOD_KEYS: [Keyboard; 8] = [
    Keyboard::LeftControl,
    Keyboard::LeftShift,
    Keyboard::LeftAlt,
    Keyboard::LeftGUI,
    Keyboard::RightControl,
    Keyboard::RightShift,
    Keyboard::RightAlt,
    Keyboard::RightGUI,
];

impl Mods {
    pub const NONE: Self = Self(0);
    pub const LCTL: Self = Self(1 << 0);
    pub const LSFT: Self = Self(1 << 1);
    pub const LALT: Self = Self(1 << 2);
    pub const LGUI: Self = Self(1 << 3);
    pub const RCTL: Self = Self(1 << 4);
    pub const RSFT: Self = Self(1 << 5);
    pub const RALT: Self = Self(1 << 6);
    pub const RGUI: Self = Self(1 << 7);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Modifier keys for the set bits, as they appear in a keyboard report
    pub fn keys(self) -> impl Iterator<Item = Keyboard> {
        MOD_KEYS
            .into_iter()
            .enumerate()
            .filter(move |(bit, _)| self.0 & (1 << bit) != 0)
            .map(|(_, key)| key)
    }
}

impl BitOr for Mods {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mods {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs)
    }
}
