//! Tap dances: one key that does different things depending on how many times it is tapped in
//! quick succession.
//!
//! Each configured dance has its own [`DanceState`]. The firmware drives all of them through three
//! entry points on [`TapDance`]:
//!
//! - [`TapDance::preprocess_key_event`] for every key press, before anything else, so that
//!   pressing some other key finishes an open dance straight away;
//! - [`TapDance::handle_key_event`] for every key transition, which counts the taps;
//! - [`TapDance::scan_for_timeouts`] on every idle tick, which finishes dances whose tapping term
//!   ran out.

use core::fmt;

use crate::firmware::Firmware;
use crate::keycode::{Keyboard, Keycode, Layer};

pub mod dual_role;
pub mod pair;
/// Shorthand for building a dance table
pub mod prelude;
mod state;

pub use dual_role::DualRole;
pub use pair::Pair;
pub use state::DanceState;

/// Milliseconds
pub type Duration = u64;
/// Milliseconds since boot
pub type Instant = u64;

pub const DEFAULT_TAPPING_TERM: Duration = 200;

/// User callbacks for one dance. Callbacks left out do nothing.
pub trait DanceHandler {
    /// Called on every press, the count already includes it
    fn on_each_tap(&self, _state: &mut DanceState, _fw: &mut dyn Firmware) {}
    /// Called once per sequence, when the dance times out or is interrupted
    fn on_finished(&self, _state: &mut DanceState, _fw: &mut dyn Firmware) {}
    /// Called when the sequence is over and the key is released
    fn on_reset(&self, _state: &mut DanceState, _fw: &mut dyn Firmware) {}
}

#[derive(Clone, Copy)]
pub enum DanceAction<'a> {
    Pair(Pair),
    DualRole(DualRole),
    Custom(&'a dyn DanceHandler),
}

impl<'a> DanceAction<'a> {
    pub fn handler(&self) -> &dyn DanceHandler {
        match self {
            Self::Pair(pair) => pair,
            Self::DualRole(dual_role) => dual_role,
            Self::Custom(handler) => *handler,
        }
    }
}

impl<'a> fmt::Debug for DanceAction<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair(pair) => f.debug_tuple("Pair").field(pair).finish(),
            Self::DualRole(dual_role) => f.debug_tuple("DualRole").field(dual_role).finish(),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// One entry of the dance table
#[derive(Debug, Clone, Copy)]
pub struct DanceBinding<'a> {
    pub action: DanceAction<'a>,
    /// Overrides [`TapDanceConfig::tapping_term`] for this dance
    pub tapping_term: Option<Duration>,
}

impl<'a> DanceBinding<'a> {
    pub const fn pair(first: Keyboard, second: Keyboard) -> Self {
        Self {
            action: DanceAction::Pair(Pair::new(first, second)),
            tapping_term: None,
        }
    }

    pub const fn dual_role(key: Keyboard, layer: Layer) -> Self {
        Self {
            action: DanceAction::DualRole(DualRole::new(key, layer)),
            tapping_term: None,
        }
    }

    pub const fn custom(handler: &'a dyn DanceHandler) -> Self {
        Self {
            action: DanceAction::Custom(handler),
            tapping_term: None,
        }
    }

    pub const fn with_tapping_term(self, tapping_term: Duration) -> Self {
        Self {
            tapping_term: Some(tapping_term),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapDanceConfig {
    /// Time after the latest tap before the dance finishes on its own
    pub tapping_term: Duration,
}

impl Default for TapDanceConfig {
    fn default() -> Self {
        Self {
            tapping_term: DEFAULT_TAPPING_TERM,
        }
    }
}

#[derive(Debug)]
pub struct TapDance<'a, const DANCES: usize> {
    config: TapDanceConfig,
    bindings: [DanceBinding<'a>; DANCES],
    states: [DanceState; DANCES],
    /// Keycode of the most recently pressed dance
    last_dance: Option<Keycode>,
    /// Highest dance index pressed since boot, bounds the scans
    highest: Option<usize>,
}

impl<'a, const DANCES: usize> TapDance<'a, DANCES> {
    pub fn new(bindings: [DanceBinding<'a>; DANCES], config: TapDanceConfig) -> Self {
        Self {
            config,
            bindings,
            states: [DanceState::new(); DANCES],
            last_dance: None,
            highest: None,
        }
    }

    pub fn state(&self, index: usize) -> Option<&DanceState> {
        self.states.get(index)
    }

    /// Counts taps of dance keys. Returns whether `keycode` is a configured dance.
    pub fn handle_key_event(
        &mut self,
        keycode: Keycode,
        pressed: bool,
        now: Instant,
        fw: &mut dyn Firmware,
    ) -> bool {
        let Some(index) = keycode.tap_dance_index().filter(|index| *index < DANCES) else {
            return false;
        };
        trace!(
            "handle_key_event: index={=usize} keycode={=u16} pressed={=bool}",
            index,
            keycode.0,
            pressed
        );

        if self.highest.map_or(true, |highest| index > highest) {
            self.highest = Some(index);
        }

        let binding = &self.bindings[index];
        let state = &mut self.states[index];
        state.pressed = pressed;

        if pressed {
            state.keycode = keycode;
            state.count = state.count.saturating_add(1);
            state.timer = now;
            state.oneshot_mods = fw.oneshot_mods();
            state.weak_mods = fw.mods() | fw.weak_mods();
            binding.action.handler().on_each_tap(state, fw);
            self.last_dance = Some(keycode);
        } else if state.count > 0 && state.finished {
            self.reset(index, fw);
        }

        true
    }

    /// Finishes every open dance that `keycode` does not continue. Call before
    /// [`Self::handle_key_event`], for every key.
    pub fn preprocess_key_event(
        &mut self,
        keycode: Keycode,
        pressed: bool,
        fw: &mut dyn Firmware,
    ) {
        if !pressed {
            return;
        }
        let Some(highest) = self.highest else {
            return;
        };

        for index in 0..=highest {
            let state = &self.states[index];
            if state.count == 0 {
                continue;
            }
            if keycode == state.keycode && Some(keycode) == self.last_dance {
                trace!("continuing tap dance {=usize}", index);
                continue;
            }
            trace!("interrupting tap dance {=usize}", index);
            self.states[index].interrupted = true;
            self.finish(index, fw);
            self.reset(index, fw);
        }
    }

    /// Finishes dances whose tapping term has run out
    pub fn scan_for_timeouts(&mut self, now: Instant, fw: &mut dyn Firmware) {
        let Some(highest) = self.highest else {
            return;
        };

        for index in 0..=highest {
            let state = &self.states[index];
            let tapping_term = self.bindings[index]
                .tapping_term
                .unwrap_or(self.config.tapping_term);
            if state.count > 0 && now.saturating_sub(state.timer) > tapping_term {
                self.finish(index, fw);
                self.reset(index, fw);
            }
        }
    }

    /// Resets a dance even if its key is still held
    pub fn force_reset(&mut self, index: usize, fw: &mut dyn Firmware) {
        if let Some(state) = self.states.get_mut(index) {
            trace!("forcing reset of tap dance {=usize}", index);
            state.pressed = false;
            self.reset(index, fw);
        }
    }

    fn finish(&mut self, index: usize, fw: &mut dyn Firmware) {
        let state = &mut self.states[index];
        if state.finished {
            return;
        }
        trace!("finishing tap dance {=usize}: count={=u8}", index, state.count);
        state.finished = true;
        // The output inherits the modifiers from when the dance was tapped
        fw.add_mods(state.oneshot_mods);
        fw.add_weak_mods(state.weak_mods);
        fw.send_report();
        self.bindings[index].action.handler().on_finished(state, fw);
    }

    fn reset(&mut self, index: usize, fw: &mut dyn Firmware) {
        let state = &mut self.states[index];
        if state.pressed {
            return;
        }
        trace!("resetting tap dance {=usize}", index);
        self.bindings[index].action.handler().on_reset(state, fw);
        fw.del_mods(state.oneshot_mods);
        fw.del_weak_mods(state.weak_mods);
        fw.send_report();
        state.count = 0;
        state.interrupted = false;
        state.finished = false;
        self.last_dance = None;
    }
}
