//! Single-shot pulse source.

use crate::component::{BaseComponent, Component};
use crate::pin::PinFunction;

const PIN_NAMES: &[&str] = &["OUT"];
const PIN_FUNCTIONS: &[PinFunction] = &[PinFunction::Output];

/// Debounced push button. A bench `pulse()` drives `OUT` HIGH and back
/// LOW as two full waves, which is what clocked parts want to see on
/// their clock pins.
pub struct SinglePulse {
    base: BaseComponent,
}

impl SinglePulse {
    pub fn new() -> Self {
        SinglePulse {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
        }
    }
}

impl Component for SinglePulse {
    fn type_name(&self) -> &'static str {
        "SinglePulse"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn work(&mut self) {}
}

impl Default for SinglePulse {
    fn default() -> Self {
        SinglePulse::new()
    }
}
