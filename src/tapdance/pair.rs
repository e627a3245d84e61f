use super::DanceHandler;
use super::DanceState;
use crate::firmware::Firmware;
use crate::keycode::Keyboard;

/// Tap once for `first`, twice for `second`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub first: Keyboard,
    pub second: Keyboard,
}

impl Pair {
    pub const fn new(first: Keyboard, second: Keyboard) -> Self {
        Self { first, second }
    }

    fn key(&self, count: u8) -> Option<Keyboard> {
        match count {
            1 => Some(self.first),
            2 => Some(self.second),
            _ => None,
        }
    }
}

impl DanceHandler for Pair {
    fn on_each_tap(&self, state: &mut DanceState, fw: &mut dyn Firmware) {
        trace!("pair on_each_tap: count={=u8}", state.count());
        if state.count() == 2 {
            fw.register_code(self.second);
            state.mark_finished();
        }
    }

    fn on_finished(&self, state: &mut DanceState, fw: &mut dyn Firmware) {
        if let Some(key) = self.key(state.count()) {
            fw.register_code(key);
        }
    }

    fn on_reset(&self, state: &mut DanceState, fw: &mut dyn Firmware) {
        if let Some(key) = self.key(state.count()) {
            fw.unregister_code(key);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::firmware::recorder::{Effect, Recorder};

    fn tapped(count: u8) -> DanceState {
        DanceState {
            count,
            ..DanceState::new()
        }
    }

    #[test]
    fn single_tap() {
        let pair = Pair::new(Keyboard::Apostrophe, Keyboard::Grave);
        let mut fw = Recorder::default();
        let mut state = tapped(1);

        pair.on_each_tap(&mut state, &mut fw);
        assert!(!state.finished());
        assert!(fw.keys().is_empty());

        pair.on_finished(&mut state, &mut fw);
        pair.on_reset(&mut state, &mut fw);
        assert_eq!(
            fw.keys(),
            [
                Effect::Down(Keyboard::Apostrophe),
                Effect::Up(Keyboard::Apostrophe)
            ]
        );
    }

    #[test]
    fn double_tap_finishes_early() {
        let pair = Pair::new(Keyboard::Apostrophe, Keyboard::Grave);
        let mut fw = Recorder::default();
        let mut state = tapped(2);

        pair.on_each_tap(&mut state, &mut fw);
        assert!(state.finished());
        assert_eq!(fw.keys(), [Effect::Down(Keyboard::Grave)]);

        pair.on_reset(&mut state, &mut fw);
        assert_eq!(
            fw.keys(),
            [Effect::Down(Keyboard::Grave), Effect::Up(Keyboard::Grave)]
        );
    }

    #[test]
    fn more_taps_do_nothing() {
        let pair = Pair::new(Keyboard::Apostrophe, Keyboard::Grave);
        let mut fw = Recorder::default();
        let mut state = tapped(3);

        pair.on_each_tap(&mut state, &mut fw);
        pair.on_finished(&mut state, &mut fw);
        pair.on_reset(&mut state, &mut fw);
        assert!(fw.keys().is_empty());
    }
}
