//! Entprellung für Taster-Eingänge

use crate::traits::PushButton;

/// Übernimmt einen neuen Zustand erst nach `samples` gleichen Abtastungen
pub struct Debouncer<B: PushButton> {
    button: B,
    samples: u8,
    stable: bool,
    pending: u8,
}

impl<B: PushButton> Debouncer<B> {
    pub fn new(button: B, samples: u8) -> Self {
        Self {
            button,
            samples: samples.max(1),
            stable: false,
            pending: 0,
        }
    }

    pub fn into_inner(self) -> B {
        self.button
    }
}

impl<B: PushButton> PushButton for Debouncer<B> {
    fn is_pressed(&mut self) -> bool {
        let raw = self.button.is_pressed();
        if raw == self.stable {
            self.pending = 0;
        } else {
            self.pending += 1;
            if self.pending >= self.samples {
                self.stable = raw;
                self.pending = 0;
            }
        }
        self.stable
    }
}
