//! QMK-style 16-bit keycodes

pub use usbd_human_interface_device::page::Keyboard;

pub type Layer = u8;

/// A 16-bit keycode. The low range holds the HID keyboard page, higher ranges hold firmware
/// keycodes such as tap dances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Keycode(pub u16);

impl Keycode {
    pub const BASIC_MAX: u16 = 0x00FF;
    pub const TAP_DANCE: u16 = 0x5700;
    pub const TAP_DANCE_MAX: u16 = 0x57FF;

    /// Keycode of the tap dance at `index` in the dance table
    pub const fn tap_dance(index: u8) -> Self {
        Self(Self::TAP_DANCE + index as u16)
    }

    pub const fn is_tap_dance(self) -> bool {
        self.0 >= Self::TAP_DANCE && self.0 <= Self::TAP_DANCE_MAX
    }

    pub const fn tap_dance_index(self) -> Option<usize> {
        if self.is_tap_dance() {
            Some((self.0 - Self::TAP_DANCE) as usize)
        } else {
            None
        }
    }

    pub fn as_basic(self) -> Option<Keyboard> {
        if self.0 <= Self::BASIC_MAX {
            Some(Keyboard::from(self.0 as u8))
        } else {
            None
        }
    }
}

impl From<Keyboard> for Keycode {
    fn from(key: Keyboard) -> Self {
        Self(Into::<u8>::into(key) as u16)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn tap_dance_range() {
        assert_eq!(Keycode::tap_dance(0), Keycode(0x5700));
        assert_eq!(Keycode::tap_dance(3).tap_dance_index(), Some(3));
        assert_eq!(Keycode(0x57FF).tap_dance_index(), Some(0xFF));
        assert!(!Keycode(0x56FF).is_tap_dance());
        assert!(!Keycode(0x5800).is_tap_dance());
        assert_eq!(Keycode::from(Keyboard::A).tap_dance_index(), None);
    }

    #[test]
    fn basic_keycodes() {
        assert_eq!(Keycode::from(Keyboard::UpArrow), Keycode(82));
        assert_eq!(Keycode(82).as_basic(), Some(Keyboard::UpArrow));
        assert_eq!(Keycode::tap_dance(1).as_basic(), None);
    }
}
