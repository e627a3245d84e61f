//! For ease and shorthand
pub use super::{DanceBinding, DanceHandler, DanceState, TapDance, TapDanceConfig};
pub use crate::firmware::Firmware;
pub use crate::keycode::Keyboard::*;
pub use crate::keycode::{Keyboard, Keycode, Layer};

pub const NOP: Keyboard = NoEventIndicated;
pub const ___: Keyboard = NoEventIndicated;

pub const QUOT: Keyboard = Apostrophe;
pub const GRV: Keyboard = Grave;
pub const BSL: Keyboard = Backslash;
pub const SCLN: Keyboard = Semicolon;

pub const LSFT: Keyboard = LeftShift;
pub const LCTL: Keyboard = LeftControl;
pub const LALT: Keyboard = LeftAlt;
pub const LGUI: Keyboard = LeftGUI;
pub const RSFT: Keyboard = RightShift;
pub const RCTL: Keyboard = RightControl;
pub const RALT: Keyboard = RightAlt;
pub const RGUI: Keyboard = RightGUI;

pub const LEFT: Keyboard = LeftArrow;
pub const RIGHT: Keyboard = RightArrow;
pub const UP: Keyboard = UpArrow;
pub const DOWN: Keyboard = DownArrow;

/// Keycode of the dance at `index`, for the layout
pub const fn td(index: u8) -> Keycode {
    Keycode::tap_dance(index)
}
