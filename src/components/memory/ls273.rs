//! Octal D register modeled after the 74LS273.
//!
//! Hardware architecture:
//! - Eight D flip-flops sharing one clock `CP` and one master reset
//! - `-MR` LOW clears all outputs immediately, no clock needed
//! - A rising clock edge with `-MR` HIGH copies `D0..D7` to `Q0..Q7`

use crate::component::{BaseComponent, Component, PendingOperation};
use crate::pin::{PinFunction, PinValue};

const PIN_NAMES: &[&str] = &[
    "-MR", "CP", "D0", "D1", "D2", "D3", "D4", "D5", "D6", "D7", "GND", "VCC", "Q0", "Q1", "Q2",
    "Q3", "Q4", "Q5", "Q6", "Q7",
];

const PIN_FUNCTIONS: &[PinFunction] = &[
    PinFunction::RequiredInput, // -MR
    PinFunction::Input,         // CP
    PinFunction::Input,
    PinFunction::Input,
    PinFunction::Input,
    PinFunction::Input,
    PinFunction::Input,
    PinFunction::Input,
    PinFunction::Input,
    PinFunction::Input,
    PinFunction::Ground,
    PinFunction::Power,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
];

const PIN_RESET: usize = 0;
const PIN_CP: usize = 1;
const PIN_D: [usize; 8] = [2, 3, 4, 5, 6, 7, 8, 9];
const PIN_Q: [usize; 8] = [12, 13, 14, 15, 16, 17, 18, 19];

pub struct Ls273 {
    base: BaseComponent,
}

impl Ls273 {
    pub fn new() -> Self {
        Ls273 {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
        }
    }

    pub fn stored(&self) -> Option<u8> {
        self.base.read_byte(&PIN_Q)
    }
}

impl Component for Ls273 {
    fn type_name(&self) -> &'static str {
        "74LS273"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn input(&mut self, pin: usize, value: PinValue) -> bool {
        let previous = self.base.value(pin);
        if !self.base.store(pin, value) {
            return false;
        }
        // Master reset acts on its level, not on a clock edge
        if pin == PIN_RESET && value == PinValue::Low {
            self.base.set_pending(PendingOperation::Clear);
            return true;
        }
        if pin != PIN_CP || previous != PinValue::Low || value != PinValue::High {
            return false;
        }
        if self.base.value(PIN_RESET) != PinValue::High {
            return false;
        }
        if self.base.read_byte(&PIN_D).is_none() {
            return false;
        }
        self.base.set_pending(PendingOperation::Load);
        true
    }

    fn work(&mut self) {
        match self.base.take_pending() {
            PendingOperation::Clear => {
                self.base.drive_byte(&PIN_Q, 0);
            }
            PendingOperation::Load => {
                let Some(value) = self.base.read_byte(&PIN_D) else {
                    return;
                };
                self.base.drive_byte(&PIN_Q, value);
            }
            _ => {}
        }
    }
}

impl Default for Ls273 {
    fn default() -> Self {
        Ls273::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_data(register: &mut Ls273, byte: u8) {
        for (bit, pin) in PIN_D.iter().enumerate() {
            register.input(*pin, PinValue::from_bool(byte & (1 << bit) != 0));
        }
    }

    fn clock(register: &mut Ls273) -> bool {
        register.input(PIN_CP, PinValue::Low);
        let fired = register.input(PIN_CP, PinValue::High);
        if fired {
            register.work();
        }
        fired
    }

    #[test]
    fn test_load_on_rising_edge() {
        let mut register = Ls273::new();
        register.input(PIN_RESET, PinValue::High);
        set_data(&mut register, 0x5A);
        assert!(clock(&mut register));
        assert_eq!(register.stored(), Some(0x5A));
    }

    #[test]
    fn test_master_reset_needs_no_clock() {
        let mut register = Ls273::new();
        register.input(PIN_RESET, PinValue::High);
        set_data(&mut register, 0xFF);
        assert!(clock(&mut register));

        assert!(register.input(PIN_RESET, PinValue::Low));
        register.work();
        assert_eq!(register.stored(), Some(0x00));
    }

    #[test]
    fn test_clock_is_ignored_while_reset_low() {
        let mut register = Ls273::new();
        register.input(PIN_RESET, PinValue::Low);
        register.work();
        set_data(&mut register, 0x42);
        assert!(!clock(&mut register));
        assert_eq!(register.stored(), Some(0x00));
    }

    #[test]
    fn test_floating_data_drops_the_edge() {
        let mut register = Ls273::new();
        register.input(PIN_RESET, PinValue::High);
        set_data(&mut register, 0x42);
        register.input(PIN_D[3], PinValue::Floating);
        assert!(!clock(&mut register));
        assert_eq!(register.stored(), None);
    }

    #[test]
    fn test_floating_reset_blocks_the_load() {
        let mut register = Ls273::new();
        set_data(&mut register, 0x42);
        assert!(!clock(&mut register));
        assert_eq!(register.stored(), None);
    }
}
