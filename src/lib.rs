//! Tap-dance keys for a split keyboard, and the ErgoDox keymap that uses them
//!
//! The firmware owns scanning, debouncing, USB and layers; this crate gets called on every key
//! event and every idle tick, and talks back through [`firmware::Firmware`].

#![no_std]

/// Diagnostic trace of tap-dance transitions, only in debug builds with the `defmt` feature
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(all(feature = "defmt", debug_assertions))]
        defmt::debug!($($arg)*);
    };
}

pub mod firmware;
pub mod keycode;
pub mod keymap;
pub mod mods;
pub mod tapdance;
