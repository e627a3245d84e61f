//! The ErgoDox keymap: its tap dances, the hook around them, and the layer indicators

use crate::firmware::Firmware;
use crate::keycode::{Keyboard, Keycode, Layer};
use crate::tapdance::{DanceBinding, Duration, Instant, TapDance, TapDanceConfig};

// Export as pub so that it can be used from macro
#[doc(hidden)]
pub use paste::paste;

#[rustfmt::skip]
#[macro_export]
macro_rules! make_dance_key {
    // Shorthands
    (Quot) => { $crate::keycode::Keyboard::Apostrophe };
    (Grv) => { $crate::keycode::Keyboard::Grave };
    (Bsl) => { $crate::keycode::Keyboard::Backslash };
    (Scol) => { $crate::keycode::Keyboard::Semicolon };
    (Min) => { $crate::keycode::Keyboard::Minus };
    (Eql) => { $crate::keycode::Keyboard::Equal };
    (LBr) => { $crate::keycode::Keyboard::LeftBrace };
    (RBr) => { $crate::keycode::Keyboard::RightBrace };
    (Esc) => { $crate::keycode::Keyboard::Escape };
    (Spc) => { $crate::keycode::Keyboard::Space };

    (Left) => { $crate::keycode::Keyboard::LeftArrow };
    (Down) => { $crate::keycode::Keyboard::DownArrow };
    (Up) => { $crate::keycode::Keyboard::UpArrow };
    (Right) => { $crate::keycode::Keyboard::RightArrow };

    // Have numbers translate to number keys
    ($n:literal) => {
        $crate::keymap::paste! { $crate::keycode::Keyboard::[<Keyboard $n>] }
    };

    // Fallback
    ($i:ident) => { $crate::keycode::Keyboard::$i };
}

#[macro_export]
macro_rules! make_dance {
    ((Pair $first:tt $second:tt)) => {
        $crate::tapdance::DanceBinding::pair(
            $crate::keymap::make_dance_key!($first),
            $crate::keymap::make_dance_key!($second),
        )
    };
    ((Pair $first:tt $second:tt $term:literal)) => {
        $crate::keymap::make_dance!((Pair $first $second)).with_tapping_term($term)
    };
    ((DualRole $key:tt $layer:literal)) => {
        $crate::tapdance::DanceBinding::dual_role($crate::keymap::make_dance_key!($key), $layer)
    };
    ((DualRole $key:tt $layer:literal $term:literal)) => {
        $crate::keymap::make_dance!((DualRole $key $layer)).with_tapping_term($term)
    };
}

#[macro_export]
macro_rules! make_dances {
    // To allow `make_dances![...]` be the same as `make_dances!([...])`
    ( $( $t:tt ),* $(,)? ) => {[ $( $crate::keymap::make_dance!($t) ),* ]};
}

// Export the macros
pub use make_dance;
pub use make_dance_key;
pub use make_dances;

pub const TD_QUOTE_GRAVE: u8 = 0;
pub const TD_I_ARROW_LAYER: u8 = 1;
pub const DANCE_COUNT: usize = 2;

pub const ARROW_LAYER: Layer = 3;
pub const TAPPING_TERM: Duration = 200;

#[rustfmt::skip]
pub const DANCES: [DanceBinding<'static>; DANCE_COUNT] = make_dances![
    // Tap once for ', twice for `
    (Pair     Quot Grv),
    // Tap once for I, twice to move to the arrow layer
    (DualRole I    3),
];

/// Runs the tap dances for the firmware's key dispatcher
#[derive(Debug)]
pub struct Keymap {
    tap_dance: TapDance<'static, DANCE_COUNT>,
}

impl Keymap {
    pub fn new() -> Self {
        Self {
            tap_dance: TapDance::new(
                DANCES,
                TapDanceConfig {
                    tapping_term: TAPPING_TERM,
                },
            ),
        }
    }

    pub fn tap_dance(&self) -> &TapDance<'static, DANCE_COUNT> {
        &self.tap_dance
    }

    /// Returns whether the key was a tap dance, otherwise the firmware should handle it
    pub fn process(
        &mut self,
        keycode: Keycode,
        pressed: bool,
        now: Instant,
        fw: &mut dyn Firmware,
    ) -> bool {
        self.tap_dance.preprocess_key_event(keycode, pressed, fw);
        let consumed = self.tap_dance.handle_key_event(keycode, pressed, now, fw);

        // On the arrow layer the I position is Up, so the release of a held I dance arrives as Up
        if keycode == Keycode::from(Keyboard::UpArrow) && !pressed {
            self.tap_dance.force_reset(TD_I_ARROW_LAYER as usize, fw);
        }
        consumed
    }

    /// Call on every idle tick
    pub fn scan(&mut self, now: Instant, fw: &mut dyn Firmware) {
        self.tap_dance.scan_for_timeouts(now, fw);
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

/// The three indicator LEDs on the right half
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerLeds {
    pub led1: bool,
    pub led2: bool,
    pub led3: bool,
}

/// Layers 1-3 light their own LED, 4-7 light combinations
pub fn layer_leds(layer: Layer) -> LayerLeds {
    let (led1, led2, led3) = match layer {
        1 => (true, false, false),
        2 => (false, true, false),
        3 => (false, false, true),
        4 => (true, true, false),
        5 => (true, false, true),
        6 => (false, true, true),
        7 => (true, true, true),
        _ => (false, false, false),
    };
    LayerLeds { led1, led2, led3 }
}

/// Highest active layer of a layer bitmask
pub fn highest_layer(layer_state: u32) -> Layer {
    layer_state
        .checked_ilog2()
        .map_or(0, |layer| layer as Layer)
}
