//! Indicator LED.

use crate::component::{BaseComponent, Component};
use crate::pin::{PinFunction, PinValue};

const PIN_NAMES: &[&str] = &["IN"];
const PIN_FUNCTIONS: &[PinFunction] = &[PinFunction::Input];

pub struct Led {
    base: BaseComponent,
}

impl Led {
    pub fn new() -> Self {
        Led {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
        }
    }

    /// Lit exactly while the input is held HIGH.
    pub fn is_lit(&self) -> bool {
        self.base.value(0) == PinValue::High
    }
}

impl Component for Led {
    fn type_name(&self) -> &'static str {
        "Led"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn work(&mut self) {}
}

impl Default for Led {
    fn default() -> Self {
        Led::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_follows_its_input() {
        let mut led = Led::new();
        assert!(!led.is_lit());
        led.input(0, PinValue::High);
        assert!(led.is_lit());
        led.input(0, PinValue::Low);
        assert!(!led.is_lit());
        led.input(0, PinValue::Floating);
        assert!(!led.is_lit());
    }
}
