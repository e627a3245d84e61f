//! Services the surrounding firmware provides to tap dances

use heapless::Vec;

use crate::keycode::{Keyboard, Layer};
use crate::mods::Mods;

/// Key output, modifier and layer primitives of the host firmware
pub trait Firmware {
    fn register_code(&mut self, key: Keyboard);
    fn unregister_code(&mut self, key: Keyboard);

    fn mods(&self) -> Mods;
    fn add_mods(&mut self, mods: Mods);
    fn del_mods(&mut self, mods: Mods);

    fn weak_mods(&self) -> Mods;
    fn add_weak_mods(&mut self, mods: Mods);
    fn del_weak_mods(&mut self, mods: Mods);

    /// Firmware without one-shot modifiers never has any
    fn oneshot_mods(&self) -> Mods {
        Mods::NONE
    }

    fn send_report(&mut self);

    /// Make `layer` the only active layer
    fn layer_move(&mut self, layer: Layer);
}

#[derive(Debug, Default)]
pub struct ReportFlags {
    pub rollover: bool,
}

/// In-memory keyboard state, the way the HID writer consumes it
#[derive(Debug, Default)]
pub struct Report<const ROLLOVER: usize> {
    keys: Vec<Keyboard, ROLLOVER>,
    mods: Mods,
    weak_mods: Mods,
    oneshot_mods: Mods,
    layer: Layer,
    sent: usize,
    pub flags: ReportFlags,
}

impl<const ROLLOVER: usize> Report<ROLLOVER> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            mods: Mods::NONE,
            weak_mods: Mods::NONE,
            oneshot_mods: Mods::NONE,
            layer: 0,
            sent: 0,
            flags: Default::default(),
        }
    }

    pub fn set_oneshot_mods(&mut self, mods: Mods) {
        self.oneshot_mods = mods;
    }

    pub fn clear_oneshot_mods(&mut self) {
        self.oneshot_mods = Mods::NONE;
    }

    pub fn keys(&self) -> &[Keyboard] {
        &self.keys
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Number of reports sent so far
    pub fn sent(&self) -> usize {
        self.sent
    }

    /// Modifier keys followed by the held keys
    pub fn hid_keys(&self) -> impl Iterator<Item = Keyboard> + '_ {
        (self.mods | self.weak_mods | self.oneshot_mods)
            .keys()
            .chain(self.keys.iter().copied())
    }
}

impl<const ROLLOVER: usize> Firmware for Report<ROLLOVER> {
    fn register_code(&mut self, key: Keyboard) {
        if self.keys.contains(&key) {
            return;
        }
        if self.keys.push(key).is_err() {
            self.flags.rollover = true;
        }
    }

    fn unregister_code(&mut self, key: Keyboard) {
        self.keys.retain(|held| held != &key);
    }

    fn mods(&self) -> Mods {
        self.mods
    }

    fn add_mods(&mut self, mods: Mods) {
        self.mods.insert(mods);
    }

    fn del_mods(&mut self, mods: Mods) {
        self.mods.remove(mods);
    }

    fn weak_mods(&self) -> Mods {
        self.weak_mods
    }

    fn add_weak_mods(&mut self, mods: Mods) {
        self.weak_mods.insert(mods);
    }

    fn del_weak_mods(&mut self, mods: Mods) {
        self.weak_mods.remove(mods);
    }

    fn oneshot_mods(&self) -> Mods {
        self.oneshot_mods
    }

    fn send_report(&mut self) {
        self.sent += 1;
    }

    fn layer_move(&mut self, layer: Layer) {
        self.layer = layer;
    }
}
