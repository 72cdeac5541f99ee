//! Manual toggle switch.

use crate::component::{BaseComponent, Component};
use crate::pin::{PinFunction, PinValue};

const PIN_NAMES: &[&str] = &["OUT"];
const PIN_FUNCTIONS: &[PinFunction] = &[PinFunction::Output];

/// The bench writes the chosen level straight onto `OUT` as a stimulus;
/// the switch itself computes nothing.
pub struct Switch {
    base: BaseComponent,
}

impl Switch {
    pub fn new() -> Self {
        Switch {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
        }
    }
}

impl Component for Switch {
    fn type_name(&self) -> &'static str {
        "Switch"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn work(&mut self) {}
}

impl Default for Switch {
    fn default() -> Self {
        Switch::new()
    }
}
