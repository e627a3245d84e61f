use super::DanceHandler;
use super::DanceState;
use crate::firmware::Firmware;
use crate::keycode::{Keyboard, Layer};

/// Tap once for `key`, twice to move to `layer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualRole {
    pub key: Keyboard,
    pub layer: Layer,
}

impl DualRole {
    pub const fn new(key: Keyboard, layer: Layer) -> Self {
        Self { key, layer }
    }
}

impl DanceHandler for DualRole {
    fn on_each_tap(&self, state: &mut DanceState, fw: &mut dyn Firmware) {
        trace!(
            "dual_role on_each_tap: count={=u8} layer={=u8}",
            state.count(),
            self.layer
        );
        if state.count() == 2 {
            fw.layer_move(self.layer);
            state.mark_finished();
        }
    }

    fn on_finished(&self, state: &mut DanceState, fw: &mut dyn Firmware) {
        trace!("dual_role on_finished: count={=u8}", state.count());
        match state.count() {
            1 => fw.register_code(self.key),
            2 => fw.layer_move(self.layer),
            _ => (),
        }
    }

    fn on_reset(&self, state: &mut DanceState, fw: &mut dyn Firmware) {
        // The layer move stays in effect
        if state.count() == 1 {
            fw.unregister_code(self.key);
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
    fn single_tap_is_key() {
        let dual = DualRole::new(Keyboard::I, 3);
        let mut fw = Recorder::default();
        let mut state = tapped(1);

        dual.on_each_tap(&mut state, &mut fw);
        assert!(!state.finished());
        dual.on_finished(&mut state, &mut fw);
        dual.on_reset(&mut state, &mut fw);
        assert_eq!(
            fw.keys(),
            [Effect::Down(Keyboard::I), Effect::Up(Keyboard::I)]
        );
    }

    #[test]
    fn double_tap_moves_layer() {
        let dual = DualRole::new(Keyboard::I, 3);
        let mut fw = Recorder::default();
        let mut state = tapped(2);

        dual.on_each_tap(&mut state, &mut fw);
        assert!(state.finished());
        dual.on_reset(&mut state, &mut fw);
        assert_eq!(fw.keys(), [Effect::LayerMove(3)]);
    }
}
