use super::Instant;
use crate::keycode::Keycode;
use crate::mods::Mods;

/// Progress of one tap-dance sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DanceState {
    pub(super) count: u8,
    pub(super) keycode: Keycode,
    pub(super) timer: Instant,
    pub(super) oneshot_mods: Mods,
    pub(super) weak_mods: Mods,
    pub(super) pressed: bool,
    pub(super) finished: bool,
    pub(super) interrupted: bool,
}

impl DanceState {
    pub const fn new() -> Self {
        Self {
            count: 0,
            keycode: Keycode(0),
            timer: 0,
            oneshot_mods: Mods::NONE,
            weak_mods: Mods::NONE,
            pressed: false,
            finished: false,
            interrupted: false,
        }
    }

    /// Taps so far in this sequence, zero when idle
    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn keycode(&self) -> Keycode {
        self.keycode
    }

    /// Time of the latest press
    pub fn timer(&self) -> Instant {
        self.timer
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Whether another key forced this sequence to finish
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn oneshot_mods(&self) -> Mods {
        self.oneshot_mods
    }

    pub fn weak_mods(&self) -> Mods {
        self.weak_mods
    }

    /// Commit to the current interpretation from inside `on_each_tap`. The finished callback is
    /// then skipped, and the dance resets on release.
    pub fn mark_finished(&mut self) {
        self.finished = true;
    }

    pub fn is_idle(&self) -> bool {
        self.count == 0
    }
}
