//! Tri-state bus driver with an active-LOW enable.

use crate::component::{BaseComponent, Component};
use crate::pin::{PinFunction, PinValue};

const PIN_NAMES: &[&str] = &["A", "-EN", "Y"];
const PIN_FUNCTIONS: &[PinFunction] = &[
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::Bidirectional,
];

const PIN_A: usize = 0;
const PIN_ENABLE: usize = 1;
const PIN_Y: usize = 2;

/// While `-EN` is LOW the gate repeats `A` onto `Y`. Raising `-EN`
/// releases the bus: `Y` is floated exactly once and then left alone,
/// so a peer taking over the line does not get fought by the stale
/// release echoing back and forth.
pub struct TristateGate {
    base: BaseComponent,
    driving: bool,
}

impl TristateGate {
    pub fn new() -> Self {
        TristateGate {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
            driving: false,
        }
    }
}

impl Component for TristateGate {
    fn type_name(&self) -> &'static str {
        "TristateGate"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn work(&mut self) {
        if self.base.value(PIN_ENABLE) == PinValue::Low {
            let level = self.base.value(PIN_A);
            self.base.drive(PIN_Y, level);
            self.driving = true;
        } else if self.driving {
            self.base.drive(PIN_Y, PinValue::Floating);
            self.driving = false;
        }
    }

    fn reset(&mut self) {
        self.base.reset();
        self.driving = false;
    }
}

impl Default for TristateGate {
    fn default() -> Self {
        TristateGate::new()
    }
}
